use langur::interpreter::{
    evaluator::core::eval,
    lexer::Lexer,
    parser::core::Parser,
    value::{core::Value, environment::Environment},
};

fn run(input: &str) -> Value {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "parse errors for {input:?}: {:?}",
            parser.errors());

    eval(&program, &Environment::new())
}

fn assert_int(input: &str, expected: i64) {
    assert_eq!(run(input), Value::Int(expected), "input: {input}");
}

fn assert_bool(input: &str, expected: bool) {
    assert_eq!(run(input), Value::Bool(expected), "input: {input}");
}

fn assert_null(input: &str) {
    assert_eq!(run(input), Value::Null, "input: {input}");
}

fn assert_error(input: &str, message: &str) {
    match run(input) {
        Value::Error(error) => assert_eq!(error.to_string(), message, "input: {input}"),
        other => panic!("expected error {message:?} for {input:?}, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic() {
    let cases = [("5", 5),
                 ("10", 10),
                 ("-5", -5),
                 ("-10", -10),
                 ("5 + 5 + 5 + 5 - 10", 10),
                 ("2 * 2 * 2 * 2 * 2", 32),
                 ("-50 + 100 + -50", 0),
                 ("5 * 2 + 10", 20),
                 ("5 + 2 * 10", 25),
                 ("20 + 2 * -10", 0),
                 ("50 / 2 * 2 + 10", 60),
                 ("2 * (5 + 10)", 30),
                 ("3 * 3 * 3 + 10", 37),
                 ("3 * (3 * 3) + 10", 37),
                 ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50)];

    for (input, expected) in cases {
        assert_int(input, expected);
    }
}

#[test]
fn boolean_expressions() {
    let cases = [("true", true),
                 ("false", false),
                 ("1 < 2", true),
                 ("1 > 2", false),
                 ("1 < 1", false),
                 ("1 == 1", true),
                 ("1 != 1", false),
                 ("1 == 2", false),
                 ("1 != 2", true),
                 ("true == true", true),
                 ("false == false", true),
                 ("true == false", false),
                 ("true != false", true),
                 ("(1 < 2) == true", true),
                 ("(1 < 2) == false", false),
                 ("(1 > 2) == true", false)];

    for (input, expected) in cases {
        assert_bool(input, expected);
    }
}

#[test]
fn bang_operator_inverts_truthiness() {
    let cases = [("!true", false),
                 ("!false", true),
                 ("!5", false),
                 ("!!true", true),
                 ("!!false", false),
                 ("!!5", true)];

    for (input, expected) in cases {
        assert_bool(input, expected);
    }
}

#[test]
fn if_else_expressions() {
    assert_int("if (true) { 10 }", 10);
    assert_int("if (1) { 10 }", 10);
    assert_int("if (1 < 2) { 10 }", 10);
    assert_int("if (1 > 2) { 10 } else { 20 }", 20);
    assert_int("if (1 < 2) { 10 } else { 20 }", 10);

    assert_null("if (false) { 10 }");
    assert_null("if (1 > 2) { 10 }");
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert_int("if (0) { 1 } else { 2 }", 1);
    assert_int(r#"if ("") { 1 } else { 2 }"#, 1);
}

#[test]
fn return_statements_stop_execution() {
    assert_int("return 10;", 10);
    assert_int("return 10; 9;", 10);
    assert_int("return 2 * 5; 9;", 10);
    assert_int("9; return 2 * 5; 9;", 10);
}

#[test]
fn return_unwinds_through_nested_blocks_exactly_once() {
    assert_int("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", 10);

    let input = "let f = fn(x) {
                   if (x > 0) {
                     if (x > 10) {
                       return 100;
                     }
                     return 10;
                   }
                   return 0;
                 };
                 f(20) + f(5) + f(-1);";
    assert_int(input, 110);
}

#[test]
fn let_statements_bind_and_resolve() {
    assert_int("let a = 5; a;", 5);
    assert_int("let a = 5 * 5; a;", 25);
    assert_int("let a = 5; let b = a; b;", 5);
    assert_int("let a = 5; let b = a; let c = a + b + 5; c;", 15);
    assert_int("let a = 1; let a = 2; a;", 2);
}

#[test]
fn functions_apply_arguments_by_position() {
    assert_int("let identity = fn(x) { x; }; identity(5);", 5);
    assert_int("let identity = fn(x) { return x; }; identity(5);", 5);
    assert_int("let double = fn(x) { x * 2; }; double(5);", 10);
    assert_int("let add = fn(x, y) { x + y; }; add(5, 5);", 10);
    assert_int("let add = fn(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20);
    assert_int("fn(x) { x; }(5)", 5);
}

#[test]
fn closures_capture_their_definition_site() {
    assert_int("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);",
               4);
    assert_int("let f = fn(x) { fn(y) { x + y } }; f(40)(2);", 42);

    // The binding appears after the literal; capture is by reference,
    // not a snapshot.
    assert_int("let f = fn() { late }; let late = 7; f();", 7);
}

#[test]
fn recursive_closures_can_reach_themselves() {
    assert_int("let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2); }; fib(10);",
               55);
}

#[test]
fn functions_are_first_class_values() {
    assert_int("let applyTwice = fn(f, x) { f(f(x)) }; applyTwice(fn(x) { x + 3 }, 2);", 8);
}

#[test]
fn string_operations() {
    assert_eq!(run(r#""Hello" + " " + "World!""#), Value::from("Hello World!"));
    assert_bool(r#""a" == "a""#, true);
    assert_bool(r#""a" == "b""#, false);
    assert_bool(r#""a" != "b""#, true);
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(run("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Int(1), Value::Int(4), Value::Int(6)]));

    assert_int("[1, 2, 3][0]", 1);
    assert_int("[1, 2, 3][1]", 2);
    assert_int("let i = 0; [1][i];", 1);
    assert_int("let myArray = [1, 2, 3]; myArray[2];", 3);
    assert_int("let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];", 6);

    assert_null("[1, 2, 3][3]");
    assert_null("[1, 2, 3][-1]");
}

#[test]
fn builtin_len() {
    assert_int(r#"len("")"#, 0);
    assert_int(r#"len("four")"#, 4);
    assert_int(r#"len("hello world")"#, 11);
    assert_int("len([1, 2, 3])", 3);
    assert_int("len([])", 0);

    assert_error("len(1)", "argument to `len` not supported, got INT");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");
}

#[test]
fn builtin_array_helpers() {
    assert_int("let a = [1, 2, 3]; len(a) + first(a) + last(a);", 7);
    assert_null("first([])");
    assert_null("last([])");
    assert_null("rest([])");
    assert_eq!(run("rest([1, 2, 3])"), Value::from(vec![Value::Int(2), Value::Int(3)]));
    assert_eq!(run("rest(rest([1, 2, 3]))"), Value::from(vec![Value::Int(3)]));
    assert_eq!(run("push([], 1)"), Value::from(vec![Value::Int(1)]));

    assert_error("first(1)", "argument to `first` must be ARRAY, got INT");
    assert_error("push(1, 1)", "argument to `push` must be ARRAY, got INT");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
}

#[test]
fn rest_and_push_leave_their_input_alone() {
    assert_int("let a = [1, 2]; let b = push(a, 3); len(a);", 2);
    assert_int("let a = [1, 2]; let b = rest(a); len(a);", 2);
    assert_int("let a = [1, 2]; let b = push(a, 3); len(b);", 3);
}

#[test]
fn builtins_can_be_shadowed() {
    assert_int("let len = fn(x) { 42 }; len([1]);", 42);
}

#[test]
fn every_builtin_resolves_as_an_identifier() {
    for name in langur::interpreter::evaluator::builtin::BUILTIN_NAMES {
        match run(name) {
            Value::Builtin(builtin) => assert_eq!(builtin.name, *name),
            other => panic!("expected builtin for {name}, got {other:?}"),
        }
    }
}

#[test]
fn hash_literals_and_indexing() {
    let input = r#"let two = "two";
                   {"one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5, false: 6}"#;
    let entries = match run(input) {
        Value::Hash(entries) => entries,
        other => panic!("expected hash, got {other:?}"),
    };
    assert_eq!(entries.len(), 6);

    assert_int(r#"{"one": 1, "two": 2}["two"]"#, 2);
    assert_int(r#"{"one": 1}["one"]"#, 1);
    assert_int("{1: 1, 2: 2}[2]", 2);
    assert_int("{true: 5}[true]", 5);
    assert_int("{false: 5}[false]", 5);
    assert_int("let key = \"foo\"; {\"foo\": 5}[key]", 5);

    assert_null(r#"{"one": 1}["missing"]"#);
    assert_null("{}[0]");
}

#[test]
fn later_duplicate_hash_keys_win() {
    assert_int(r#"{"a": 1, "a": 2}["a"]"#, 2);
}

#[test]
fn runtime_errors_carry_exact_messages() {
    let cases = [("5 + true;", "type mismatch: INT + BOOL"),
                 ("5 + true; 5;", "type mismatch: INT + BOOL"),
                 ("-true", "unknown operator: -BOOL"),
                 ("true + false;", "unknown operator: BOOL + BOOL"),
                 ("5; true + false; 5", "unknown operator: BOOL + BOOL"),
                 ("if (10 > 1) { true + false; }", "unknown operator: BOOL + BOOL"),
                 (r#""Hello" - "World""#, "unknown operator: STRING - STRING"),
                 ("foobar", "identifier not found: foobar"),
                 ("5(3)", "not a function: INT"),
                 (r#""a"[0]"#, "index operator not supported: STRING"),
                 (r#"{"name": "langur"}[fn(x) { x }];"#, "unusable as hash key: FUNCTION"),
                 ("{fn(x) { x }: 1}", "unusable as hash key: FUNCTION"),
                 ("[1, 2][true]", "index operator not supported: ARRAY")];

    for (input, message) in cases {
        assert_error(input, message);
    }
}

#[test]
fn errors_propagate_through_every_construct() {
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOL + BOOL");
    assert_error("let x = 5 + true; x;", "type mismatch: INT + BOOL");
    assert_error("[1, foobar, 3]", "identifier not found: foobar");
    assert_error("{\"a\": foobar}", "identifier not found: foobar");
    assert_error("len(foobar)", "identifier not found: foobar");
    assert_error("let f = fn(x) { x }; f(foobar);", "identifier not found: foobar");
    assert_error("(5 + true) * 2", "type mismatch: INT + BOOL");
    assert_error("return 5 + true;", "type mismatch: INT + BOOL");
}

#[test]
fn calling_a_function_with_the_wrong_arity_is_an_error() {
    assert_error("let add = fn(x, y) { x + y }; add(1);",
                 "wrong number of arguments. got=1, want=2");
}

#[test]
fn division_by_zero_is_an_in_band_error() {
    assert!(run("5 / 0").is_error());
    assert!(run("let x = 10; x / (5 - 5)").is_error());
}

#[test]
fn mixed_equality_follows_the_type_mismatch_rule() {
    assert_error("5 == true", "type mismatch: INT == BOOL");
    assert_error("[1] == [1]", "unknown operator: ARRAY == ARRAY");
}

#[test]
fn quote_wraps_its_argument_unevaluated() {
    let cases = [("quote(5)", "5"),
                 ("quote(5 + 8)", "(5 + 8)"),
                 ("quote(foobar)", "foobar"),
                 ("quote(foobar + barfoo)", "(foobar + barfoo)")];

    for (input, expected) in cases {
        match run(input) {
            Value::Quote(node) => assert_eq!(node.to_string(), expected, "input: {input}"),
            other => panic!("expected quote for {input:?}, got {other:?}"),
        }
    }

    assert_eq!(run("quote(5 + 8)").to_string(), "QUOTE((5 + 8))");
}

#[test]
fn values_render_like_the_language_writes_them() {
    assert_eq!(run("[1, true, \"x\"]").to_string(), "[1, true, x]");
    assert_eq!(run("fn(x) { x + 2; }").to_string(), "fn(x) {\n  (x + 2)\n}");
    assert_eq!(run("len").to_string(), "builtin function");
    assert_eq!(run("if (false) { 1 }").to_string(), "null");
    assert_eq!(run("-true").to_string(), "ERROR: unknown operator: -BOOL");
    assert_eq!(run(r#"{"one": 1}"#).to_string(), "{one: 1}");
}

#[test]
fn hash_keys_are_stable_across_equal_values() {
    let first = Value::from("stable").hash_key().unwrap();
    let second = Value::from("stable").hash_key().unwrap();
    assert_eq!(first, second);

    assert_eq!(Value::Int(7).hash_key().unwrap(), Value::Int(7).hash_key().unwrap());
    assert_eq!(Value::Bool(true).hash_key().unwrap(),
               Value::Bool(true).hash_key().unwrap());

    // Same digest, different type tag: these must not collide.
    assert_ne!(Value::Int(1).hash_key().unwrap(), Value::Bool(true).hash_key().unwrap());

    assert!(Value::Null.hash_key().is_err());
}

#[test]
fn empty_programs_evaluate_to_null() {
    assert_null("");
    assert_null("let x = 1;");
}
