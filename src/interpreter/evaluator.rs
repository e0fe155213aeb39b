/// Builtin functions.
///
/// The fixed host-function table consulted when an identifier resolves
/// to no binding: `len`, `first`, `last`, `rest`, `push`, and `puts`.
pub mod builtin;
/// Array and hash evaluation.
///
/// Literal construction and the index operator for both collection
/// types.
mod collection;
/// Program, block, statement, and expression dispatch.
///
/// The evaluator's entry point and central match live here.
pub mod core;
/// Function calls.
///
/// Closure application, parameter binding, `Return` unwrapping, and the
/// `quote` special form.
mod function;
/// Infix operators.
///
/// Integer arithmetic and comparison, string concatenation, and the
/// equality rules for everything else.
mod infix;
/// Prefix operators.
///
/// Runtime behavior of `!` and unary `-`.
mod prefix;
