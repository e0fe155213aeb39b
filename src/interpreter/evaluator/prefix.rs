use crate::{ast::PrefixOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies a prefix operator to an already-evaluated operand.
pub(in crate::interpreter::evaluator) fn eval_prefix(operator: PrefixOperator,
                                                     right: &Value)
                                                     -> Value {
    match operator {
        PrefixOperator::Bang => eval_bang(right),
        PrefixOperator::Minus => eval_minus(right),
    }
}

/// Logical negation.
///
/// `!` inverts truthiness: `false` and `null` negate to `true`, every
/// other value to `false`. It is defined for all types.
fn eval_bang(right: &Value) -> Value {
    match right {
        Value::Bool(value) => Value::Bool(!value),
        Value::Null => Value::Bool(true),
        _ => Value::Bool(false),
    }
}

/// Arithmetic negation, defined only on integers.
///
/// Negation wraps on `i64::MIN`, matching the two's-complement behavior
/// of the other arithmetic operators.
fn eval_minus(right: &Value) -> Value {
    match right {
        Value::Int(value) => Value::Int(value.wrapping_neg()),
        other => {
            Value::Error(RuntimeError::UnknownPrefixOperator { operator: PrefixOperator::Minus,
                                                               right:    other.type_name(), })
        },
    }
}
