/// Parsing errors.
///
/// Defines all error types that can occur while parsing source code. The
/// parser accumulates these instead of aborting, so several can be
/// reported from a single pass.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors flow through the evaluator as first-class values and carry the
/// exact messages the language reports to users.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
