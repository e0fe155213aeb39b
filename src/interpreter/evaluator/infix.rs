use std::rc::Rc;

use crate::{ast::InfixOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies an infix operator to two already-evaluated operands.
///
/// Resolution order matters and is deliberate: integer pairs and string
/// pairs are handled before the generic equality arms so that `1 == 1`
/// and `"a" == "a"` compare contents rather than falling through.
/// Booleans and null compare by value in the equality arms; any other
/// combination is an error, either a type mismatch (different types) or
/// an unknown operator (same type, no defined behavior).
pub(in crate::interpreter::evaluator) fn eval_infix(operator: InfixOperator,
                                                    left: Value,
                                                    right: Value)
                                                    -> Value {
    match (&left, &right) {
        (Value::Int(left), Value::Int(right)) => eval_integer_infix(operator, *left, *right),
        (Value::Str(left), Value::Str(right)) => eval_string_infix(operator, left, right),
        (Value::Bool(left), Value::Bool(right)) if operator == InfixOperator::Eq => {
            Value::Bool(left == right)
        },
        (Value::Bool(left), Value::Bool(right)) if operator == InfixOperator::NotEq => {
            Value::Bool(left != right)
        },
        (Value::Null, Value::Null) if operator == InfixOperator::Eq => Value::Bool(true),
        (Value::Null, Value::Null) if operator == InfixOperator::NotEq => Value::Bool(false),
        _ if left.type_name() != right.type_name() => {
            Value::Error(RuntimeError::TypeMismatch { left: left.type_name(),
                                                      operator,
                                                      right: right.type_name() })
        },
        _ => Value::Error(RuntimeError::UnknownInfixOperator { left: left.type_name(),
                                                               operator,
                                                               right: right.type_name() }),
    }
}

/// Integer arithmetic and comparison.
///
/// Arithmetic wraps on overflow, mirroring the host's two's-complement
/// representation. Division by zero is reported in-band rather than
/// crashing the interpreter.
fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> Value {
    match operator {
        InfixOperator::Plus => Value::Int(left.wrapping_add(right)),
        InfixOperator::Minus => Value::Int(left.wrapping_sub(right)),
        InfixOperator::Asterisk => Value::Int(left.wrapping_mul(right)),
        InfixOperator::Slash => {
            if right == 0 {
                Value::Error(RuntimeError::DivisionByZero)
            } else {
                Value::Int(left.wrapping_div(right))
            }
        },
        InfixOperator::Lt => Value::Bool(left < right),
        InfixOperator::Gt => Value::Bool(left > right),
        InfixOperator::Eq => Value::Bool(left == right),
        InfixOperator::NotEq => Value::Bool(left != right),
    }
}

/// String concatenation and content comparison.
fn eval_string_infix(operator: InfixOperator, left: &Rc<str>, right: &Rc<str>) -> Value {
    match operator {
        InfixOperator::Plus => Value::Str(Rc::from(format!("{left}{right}"))),
        InfixOperator::Eq => Value::Bool(left == right),
        InfixOperator::NotEq => Value::Bool(left != right),
        _ => Value::Error(RuntimeError::UnknownInfixOperator { left: "STRING",
                                                               operator,
                                                               right: "STRING" }),
    }
}
