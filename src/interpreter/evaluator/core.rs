use std::rc::Rc;

use crate::{
    ast::{Block, Expression, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{builtin, collection, function, infix, prefix},
        value::{
            core::{FunctionValue, Value},
            environment::Env,
        },
    },
};

/// Evaluates a program in the given environment.
///
/// Statements run in order. A `return` travelling up from any nesting
/// depth ends the program with its unwrapped value; an error ends it
/// with the error itself. Otherwise the result is the value of the last
/// statement, or `null` for an empty program.
///
/// # Example
/// ```
/// use langur::interpreter::{
///     evaluator::core::eval,
///     lexer::Lexer,
///     parser::core::Parser,
///     value::{core::Value, environment::Environment},
/// };
///
/// let mut parser = Parser::new(Lexer::new("let double = fn(x) { x * 2 }; double(21);"));
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// assert_eq!(eval(&program, &Environment::new()), Value::Int(42));
/// ```
#[must_use]
pub fn eval(program: &Program, env: &Env) -> Value {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Value::Return(value) => return *value,
            error @ Value::Error(_) => return error,
            value => result = value,
        }
    }

    result
}

/// Evaluates the statements of a block.
///
/// Unlike [`eval`], a block passes `Return` and `Error` outward
/// *without* unwrapping them. Unwrapping here would make a `return`
/// inside nested `if` blocks stop at the innermost block instead of
/// leaving the enclosing function.
pub(in crate::interpreter::evaluator) fn eval_block(block: &Block, env: &Env) -> Value {
    let mut result = Value::Null;

    for statement in &block.statements {
        match eval_statement(statement, env) {
            outward @ (Value::Return(_) | Value::Error(_)) => return outward,
            value => result = value,
        }
    }

    result
}

/// Evaluates a single statement.
fn eval_statement(statement: &Statement, env: &Env) -> Value {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }

            env.borrow_mut().set(name.name.clone(), value);
            Value::Null
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env);
            if value.is_error() {
                return value;
            }

            Value::Return(Box::new(value))
        },
        Statement::Expression { value, .. } => eval_expression(value, env),
    }
}

/// Evaluates a single expression.
///
/// This is the evaluator's central dispatch; each arm either produces a
/// value directly or hands off to the module owning that construct.
pub(in crate::interpreter::evaluator) fn eval_expression(expression: &Expression,
                                                         env: &Env)
                                                         -> Value {
    match expression {
        Expression::Ident(identifier) => eval_identifier(identifier, env),
        Expression::IntLit { value, .. } => Value::Int(*value),
        Expression::BoolLit { value, .. } => Value::Bool(*value),
        Expression::StringLit { value, .. } => Value::from(value.as_str()),
        Expression::Prefix { operator, right, .. } => {
            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }

            prefix::eval_prefix(*operator, &right)
        },
        Expression::Infix { operator,
                            left,
                            right,
                            .. } => {
            let left = eval_expression(left, env);
            if left.is_error() {
                return left;
            }

            let right = eval_expression(right, env);
            if right.is_error() {
                return right;
            }

            infix::eval_infix(*operator, left, right)
        },
        Expression::If { condition,
                         consequence,
                         alternative,
                         .. } => eval_if(condition, consequence, alternative.as_ref(), env),
        Expression::FnLit { parameters, body, .. } => {
            Value::Function(Rc::new(FunctionValue { parameters: parameters.clone(),
                                                    body:       Rc::clone(body),
                                                    env:        Rc::clone(env), }))
        },
        Expression::Call { function, arguments, .. } => {
            function::eval_call(function, arguments, env)
        },
        Expression::ArrayLit { elements, .. } => collection::eval_array_literal(elements, env),
        Expression::HashLit { pairs, .. } => collection::eval_hash_literal(pairs, env),
        Expression::Index { left, index, .. } => collection::eval_index(left, index, env),
    }
}

/// Resolves a name against the environment, falling back to the builtin
/// table.
fn eval_identifier(identifier: &Identifier, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(&identifier.name) {
        return value;
    }
    if let Some(builtin) = builtin::lookup(&identifier.name) {
        return builtin;
    }

    Value::Error(RuntimeError::IdentifierNotFound { name: identifier.name.clone() })
}

/// Evaluates an `if` expression.
///
/// The condition's truthiness picks a branch; a missing `else` branch
/// makes the whole expression `null`.
fn eval_if(condition: &Expression,
           consequence: &Block,
           alternative: Option<&Block>,
           env: &Env)
           -> Value {
    let condition = eval_expression(condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Value::Null
    }
}
