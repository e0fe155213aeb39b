use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::eval_expression,
        value::{core::Value, environment::Env},
    },
};

/// Evaluates an array literal, left to right with error short-circuit.
pub(in crate::interpreter::evaluator) fn eval_array_literal(elements: &[Expression],
                                                            env: &Env)
                                                            -> Value {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        let value = eval_expression(element, env);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }

    Value::Array(Rc::new(values))
}

/// Evaluates a hash literal.
///
/// For each pair: the key is evaluated, its hash key is computed (a
/// non-hashable key ends the whole literal), then the value is
/// evaluated. A key written twice keeps the later value.
pub(in crate::interpreter::evaluator) fn eval_hash_literal(pairs: &[(Expression, Expression)],
                                                           env: &Env)
                                                           -> Value {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key_expression, value_expression) in pairs {
        let key = eval_expression(key_expression, env);
        if key.is_error() {
            return key;
        }

        let hash_key = match key.hash_key() {
            Ok(hash_key) => hash_key,
            Err(error) => return Value::Error(error),
        };

        let value = eval_expression(value_expression, env);
        if value.is_error() {
            return value;
        }

        entries.insert(hash_key, (key, value));
    }

    Value::Hash(Rc::new(entries))
}

/// Evaluates an index expression.
///
/// Arrays take integer indices and answer `null` for anything out of
/// bounds, negative included. Hashes take any hashable key and answer
/// `null` for a miss; an entry whose stored key differs from the probe
/// is a digest collision and counts as a miss too. Indexing any other
/// type is an error.
pub(in crate::interpreter::evaluator) fn eval_index(left: &Expression,
                                                    index: &Expression,
                                                    env: &Env)
                                                    -> Value {
    let target = eval_expression(left, env);
    if target.is_error() {
        return target;
    }

    let index = eval_expression(index, env);
    if index.is_error() {
        return index;
    }

    match (&target, &index) {
        (Value::Array(values), Value::Int(position)) => {
            usize::try_from(*position).ok()
                                      .and_then(|position| values.get(position))
                                      .cloned()
                                      .unwrap_or(Value::Null)
        },
        (Value::Hash(entries), key) => {
            let hash_key = match key.hash_key() {
                Ok(hash_key) => hash_key,
                Err(error) => return Value::Error(error),
            };

            match entries.get(&hash_key) {
                Some((stored, value)) if stored == key => value.clone(),
                _ => Value::Null,
            }
        },
        _ => Value::Error(RuntimeError::IndexNotSupported { kind: target.type_name() }),
    }
}
