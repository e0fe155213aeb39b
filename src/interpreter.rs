/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, resolves names through lexically scoped
/// environments, applies operators and function calls, and threads
/// `return` and error values outward through arbitrary nesting. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages environments, closures, and the builtin function table.
/// - Reports runtime errors as in-band values with exact messages.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// each corresponding to a meaningful language element such as a
/// literal, identifier, operator, delimiter, or keyword. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into kind/lexeme token pairs.
/// - Handles integer and string literals, identifiers, and operators.
/// - Marks unrecognized bytes as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of statements
/// and expressions, using Pratt-style operator precedence for the
/// expression grammar.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Resolves operator precedence and associativity.
/// - Accumulates parse errors without aborting the pass.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced during execution, the
/// hash-key digests that make values usable as hash keys, and the
/// environment frames that implement lexical scope.
///
/// # Responsibilities
/// - Defines the `Value` enum, its type tags, and its rendering.
/// - Provides shared, cycle-tolerant environment handles for closures.
/// - Computes stable hash keys for integers, booleans, and strings.
pub mod value;
