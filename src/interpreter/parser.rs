/// Parser state and the Pratt expression loop.
///
/// Declares the `Parser` itself, the precedence ladder, and the
/// expression entry point the other parser modules hang their handlers
/// off.
pub mod core;
/// Infix-position handlers.
///
/// Binary operators, call argument lists, and index expressions, plus
/// the shared comma-separated list helper.
mod infix;
/// Prefix-position handlers.
///
/// Everything an expression can start with: literals, identifiers,
/// grouping, prefix operators, `if`, `fn`, arrays, and hashes.
mod prefix;
/// Statement forms.
///
/// `let`, `return`, expression statements, and brace-delimited blocks.
mod statement;
