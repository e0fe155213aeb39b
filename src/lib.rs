//! # langur
//!
//! langur is a small, dynamically typed, expression-oriented scripting
//! language written in Rust. It parses and evaluates programs built from
//! `let` bindings, `fn` literals, `if/else` expressions, and first-class
//! closures over integers, booleans, strings, arrays, and hashes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::Env},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression enums that
/// represent the syntactic structure of source code as a tree, the
/// pretty-printer that renders it back with explicit parenthesization,
/// and the `modify` visitor that rewrites trees bottom-up.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches the originating token to each node for faithful rendering.
/// - Supports structural rewriting of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code. Parse errors accumulate on the parser;
/// runtime errors travel through the evaluator as in-band values. The
/// rendered message of each error is part of the language's observable
/// behavior.
///
/// # Responsibilities
/// - Defines error enums for parse-time and run-time failures.
/// - Renders the exact messages the language reports to users.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and environments to provide a complete runtime for
/// source code evaluation. It exposes the building blocks for
/// interpreting expressions or whole programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for tokenizing, parsing, and evaluating code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses and evaluates a source text in the given environment.
///
/// This is the one-call entry point the binary and the integration
/// tests use. The program is parsed first; if the parser recorded any
/// errors the program is *not* evaluated and the errors are returned
/// instead. Otherwise the program runs and its final value is returned,
/// which may be an in-band `Value::Error` describing a runtime failure.
///
/// Passing the same environment to successive calls gives incremental,
/// REPL-style sessions: bindings made by one call are visible to the
/// next.
///
/// # Errors
/// Returns the accumulated parse errors when the source is malformed.
///
/// # Examples
/// ```
/// use langur::{interpreter::value::environment::Environment, run_program};
///
/// let env = Environment::new();
///
/// let value = run_program("let x = 2; x * 21;", &env).unwrap();
/// assert_eq!(value.to_string(), "42");
///
/// // The binding from the previous call is still in scope.
/// let value = run_program("x + 1;", &env).unwrap();
/// assert_eq!(value.to_string(), "3");
/// ```
pub fn run_program(source: &str, env: &Env) -> Result<Value, Vec<ParseError>> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        Ok(evaluator::core::eval(&program, env))
    } else {
        Err(parser.errors().to_vec())
    }
}
