use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::core::{Builtin, Value},
};

/// Defines the builtin function table.
///
/// Each entry provides a string name and the host function implementing
/// it. The macro produces:
/// - `BUILTIN_TABLE` (static table consulted on identifier miss),
/// - `BUILTIN_NAMES` (public list of builtin names).
macro_rules! builtin_functions {
    ( $( $name:literal => $func:expr ),* $(,)? ) => {
        static BUILTIN_TABLE: &[Builtin] = &[
            $( Builtin { name: $name, func: $func }, )*
        ];
        /// The names of all builtin functions.
        pub const BUILTIN_NAMES: &[&str] = &[
            $( $name, )*
        ];
    };
}

builtin_functions! {
    "len"   => len,
    "first" => first,
    "last"  => last,
    "rest"  => rest,
    "push"  => push,
    "puts"  => puts,
}

/// Resolves a name against the builtin table.
///
/// Consulted only after environment lookup misses, so any builtin can be
/// shadowed by an ordinary `let`.
pub(in crate::interpreter::evaluator) fn lookup(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(Value::Builtin)
}

/// Checks an exact argument count, producing the in-band error builtins
/// report for a mismatch.
fn check_arity(arguments: &[Value], want: usize) -> Option<Value> {
    if arguments.len() == want {
        None
    } else {
        Some(Value::Error(RuntimeError::WrongArgumentCount { got: arguments.len(),
                                                             want }))
    }
}

/// `len(value)`: the length of a string in bytes, or the number of
/// elements of an array.
fn len(arguments: Vec<Value>) -> Value {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Value::Str(text) => Value::Int(i64::try_from(text.len()).unwrap_or(i64::MAX)),
        Value::Array(values) => Value::Int(i64::try_from(values.len()).unwrap_or(i64::MAX)),
        other => Value::Error(RuntimeError::UnsupportedArgument { builtin: "len",
                                                                  got:     other.type_name(), }),
    }
}

/// `first(array)`: the first element, or `null` for an empty array.
fn first(arguments: Vec<Value>) -> Value {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Value::Array(values) => values.first().cloned().unwrap_or(Value::Null),
        other => Value::Error(RuntimeError::WrongArgumentType { builtin:  "first",
                                                                expected: "ARRAY",
                                                                got:      other.type_name(), }),
    }
}

/// `last(array)`: the last element, or `null` for an empty array.
fn last(arguments: Vec<Value>) -> Value {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Value::Array(values) => values.last().cloned().unwrap_or(Value::Null),
        other => Value::Error(RuntimeError::WrongArgumentType { builtin:  "last",
                                                                expected: "ARRAY",
                                                                got:      other.type_name(), }),
    }
}

/// `rest(array)`: a new array of everything but the first element, or
/// `null` for an empty array. The input array is not touched.
fn rest(arguments: Vec<Value>) -> Value {
    if let Some(error) = check_arity(&arguments, 1) {
        return error;
    }

    match &arguments[0] {
        Value::Array(values) => {
            if values.is_empty() {
                Value::Null
            } else {
                Value::Array(Rc::new(values[1..].to_vec()))
            }
        },
        other => Value::Error(RuntimeError::WrongArgumentType { builtin:  "rest",
                                                                expected: "ARRAY",
                                                                got:      other.type_name(), }),
    }
}

/// `push(array, value)`: a new array with the value appended. The input
/// array is not touched.
fn push(arguments: Vec<Value>) -> Value {
    if let Some(error) = check_arity(&arguments, 2) {
        return error;
    }

    match &arguments[0] {
        Value::Array(values) => {
            let mut extended = values.as_ref().clone();
            extended.push(arguments[1].clone());
            Value::Array(Rc::new(extended))
        },
        other => Value::Error(RuntimeError::WrongArgumentType { builtin:  "push",
                                                                expected: "ARRAY",
                                                                got:      other.type_name(), }),
    }
}

/// `puts(...)`: prints each argument's rendering on its own line and
/// returns `null`. Accepts any number of arguments.
fn puts(arguments: Vec<Value>) -> Value {
    for argument in &arguments {
        println!("{argument}");
    }

    Value::Null
}
