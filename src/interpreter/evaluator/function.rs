use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{eval_block, eval_expression},
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Evaluates a call expression.
///
/// `quote` is intercepted by name before anything is evaluated, since
/// its argument must stay an AST fragment. For everything else the
/// callee is evaluated first, then the arguments left to right, with the
/// first error short-circuiting the whole call.
pub(in crate::interpreter::evaluator) fn eval_call(function: &Expression,
                                                   arguments: &[Expression],
                                                   env: &Env)
                                                   -> Value {
    if let Expression::Ident(identifier) = function
       && identifier.name == "quote"
    {
        return quote(arguments);
    }

    let callee = eval_expression(function, env);
    if callee.is_error() {
        return callee;
    }

    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let value = eval_expression(argument, env);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }

    apply(callee, values)
}

/// Applies an evaluated callee to its evaluated arguments.
///
/// A function call binds each parameter by position into a fresh frame
/// enclosed by the *callee's captured* environment, never the caller's;
/// that is what makes closures close over their definition site. The
/// body's `Return` is unwrapped here, exactly once.
fn apply(callee: Value, arguments: Vec<Value>) -> Value {
    match callee {
        Value::Function(function) => {
            if arguments.len() != function.parameters.len() {
                return Value::Error(RuntimeError::WrongArgumentCount {
                    got:  arguments.len(),
                    want: function.parameters.len(),
                });
            }

            let inner = Environment::enclosed(&function.env);
            for (parameter, value) in function.parameters.iter().zip(arguments) {
                inner.borrow_mut().set(parameter.name.clone(), value);
            }

            match eval_block(&function.body, &inner) {
                Value::Return(value) => *value,
                other => other,
            }
        },
        Value::Builtin(builtin) => builtin.call(arguments),
        other => Value::Error(RuntimeError::NotAFunction { kind: other.type_name() }),
    }
}

/// Wraps a single unevaluated argument expression as a first-class
/// value.
///
/// No splicing or expansion happens; the fragment is carried around
/// as-is and rendered through the pretty-printer.
fn quote(arguments: &[Expression]) -> Value {
    if arguments.len() != 1 {
        return Value::Error(RuntimeError::WrongArgumentCount { got:  arguments.len(),
                                                               want: 1, });
    }

    Value::Quote(Box::new(arguments[0].clone()))
}
