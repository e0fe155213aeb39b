use langur::{
    ast::{self, Expression, Program, Statement},
    interpreter::{lexer::Lexer, parser::core::Parser},
};

fn parse(input: &str) -> Program {
    let mut parser = Parser::new(Lexer::new(input));
    let program = parser.parse_program();

    assert!(parser.errors().is_empty(),
            "parse errors for {input:?}: {:?}",
            parser.errors());

    program
}

fn parse_errors(input: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(input));
    parser.parse_program();

    parser.errors().iter().map(ToString::to_string).collect()
}

fn assert_round_trip(input: &str, expected: &str) {
    assert_eq!(parse(input).to_string(), expected, "input: {input}");
}

#[test]
fn operator_precedence_round_trips() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false", "false"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("3 < 5 == true", "((3 < 5) == true)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))"),
                 ("add(a, b)[3]", "(add(a, b)[3])"),
                 ("-a[2]", "(-(a[2]))")];

    for (input, expected) in cases {
        assert_round_trip(input, expected);
    }
}

#[test]
fn let_statements_bind_names() {
    let cases = [("let x = 5;", "x", "5"),
                 ("let y = true;", "y", "true"),
                 ("let foobar = y;", "foobar", "y")];

    for (input, expected_name, expected_value) in cases {
        let program = parse(input);
        assert_eq!(program.statements.len(), 1);

        match &program.statements[0] {
            Statement::Let { name, value, .. } => {
                assert_eq!(name.name, expected_name);
                assert_eq!(value.to_string(), expected_value);
            },
            other => panic!("expected let statement, got {other:?}"),
        }
    }
}

#[test]
fn return_statements_carry_their_value() {
    let program = parse("return 10; return 2 * 3;");
    assert_eq!(program.statements.len(), 2);

    for statement in &program.statements {
        assert!(matches!(statement, Statement::Return { .. }),
                "expected return statement, got {statement:?}");
    }

    assert_eq!(program.to_string(), "return 10;return (2 * 3);");
}

#[test]
fn if_expressions_render_both_branches() {
    assert_round_trip("if (x < y) { x }", "if(x < y) x");
    assert_round_trip("if (x < y) { x } else { y }", "if(x < y) xelse y");
}

#[test]
fn function_literals_carry_parameters() {
    let program = parse("fn(x, y) { x + y; }");

    match &program.statements[0] {
        Statement::Expression { value: Expression::FnLit { parameters, .. },
                                .. } => {
            let names = parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
            assert_eq!(names, ["x", "y"]);
        },
        other => panic!("expected function literal, got {other:?}"),
    }

    assert_eq!(program.to_string(), "fn(x, y) (x + y)");
    assert_eq!(parse("fn() { 1 }").to_string(), "fn() 1");
}

#[test]
fn string_literals_keep_their_raw_body() {
    let program = parse(r#""hello world";"#);

    match &program.statements[0] {
        Statement::Expression { value: Expression::StringLit { value, .. },
                                .. } => {
            assert_eq!(value, "hello world");
        },
        other => panic!("expected string literal, got {other:?}"),
    }
}

#[test]
fn hash_literals_keep_pairs_in_source_order() {
    let program = parse(r#"{"one": 1, "two": 2, "three": 3}"#);

    match &program.statements[0] {
        Statement::Expression { value: Expression::HashLit { pairs, .. },
                                .. } => {
            let keys = pairs.iter().map(|(key, _)| key.to_string()).collect::<Vec<_>>();
            assert_eq!(keys, ["one", "two", "three"]);
        },
        other => panic!("expected hash literal, got {other:?}"),
    }

    match &parse("{}").statements[0] {
        Statement::Expression { value: Expression::HashLit { pairs, .. },
                                .. } => assert!(pairs.is_empty()),
        other => panic!("expected hash literal, got {other:?}"),
    }
}

#[test]
fn malformed_lets_record_errors_without_aborting() {
    let errors = parse_errors("let x 5; let = 10; let 838383;");

    assert!(errors.contains(&"expected next token to be =, got INT instead".to_string()),
            "errors: {errors:?}");
    assert!(errors.contains(&"expected next token to be IDENT, got = instead".to_string()),
            "errors: {errors:?}");
    assert!(errors.contains(&"expected next token to be IDENT, got INT instead".to_string()),
            "errors: {errors:?}");
}

#[test]
fn let_and_return_require_a_semicolon() {
    let errors = parse_errors("let x = 5");
    assert!(errors.contains(&"expected next token to be ;, got EOF instead".to_string()),
            "errors: {errors:?}");

    let errors = parse_errors("return 5");
    assert!(errors.contains(&"expected next token to be ;, got EOF instead".to_string()),
            "errors: {errors:?}");
}

#[test]
fn tokens_without_a_prefix_handler_are_reported() {
    let errors = parse_errors("+5;");
    assert!(errors.contains(&"no prefix parse function for + found".to_string()),
            "errors: {errors:?}");
}

#[test]
fn statements_after_an_error_still_parse() {
    let mut parser = Parser::new(Lexer::new("let x 5; 1 + 2;"));
    let program = parser.parse_program();

    assert!(!parser.errors().is_empty());
    assert!(program.statements
                   .iter()
                   .any(|statement| statement.to_string() == "(1 + 2)"),
            "program: {program}");
}

#[test]
fn modify_rewrites_nested_expressions_bottom_up() {
    let program = parse("let x = 1 + [1, 10][1];");

    let modified = ast::modify_program(program, &|expr| match expr {
        Expression::IntLit { token, value: 1 } => Expression::IntLit { token, value: 2 },
        other => other,
    });

    match &modified.statements[0] {
        Statement::Let { value: Expression::Infix { left, right, .. },
                         .. } => {
            assert!(matches!(**left, Expression::IntLit { value: 2, .. }));

            match &**right {
                Expression::Index { left, index, .. } => {
                    match &**left {
                        Expression::ArrayLit { elements, .. } => {
                            assert!(matches!(elements[0], Expression::IntLit { value: 2, .. }));
                            assert!(matches!(elements[1], Expression::IntLit { value: 10, .. }));
                        },
                        other => panic!("expected array literal, got {other:?}"),
                    }
                    assert!(matches!(**index, Expression::IntLit { value: 2, .. }));
                },
                other => panic!("expected index expression, got {other:?}"),
            }
        },
        other => panic!("expected let statement, got {other:?}"),
    }
}

#[test]
fn oversized_integer_literals_are_reported() {
    let errors = parse_errors("99999999999999999999999999;");
    assert!(errors.iter().any(|error| error.contains("as integer")),
            "errors: {errors:?}");
}
