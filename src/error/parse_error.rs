use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors the parser can record.
///
/// The parser never aborts; it appends one of these per failure and keeps
/// going, so a single pass can report several problems.
pub enum ParseError {
    /// The token after the current one was not the expected kind.
    UnexpectedToken {
        /// The kind the grammar required here.
        expected: TokenKind,
        /// The kind actually found.
        got:      TokenKind,
    },
    /// No handler exists for a token in expression position.
    NoPrefixParseFn {
        /// The kind with no prefix handler.
        kind: TokenKind,
    },
    /// An integer literal did not fit in a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The offending lexeme.
        literal: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, got } => {
                write!(f, "expected next token to be {expected}, got {got} instead")
            },

            Self::NoPrefixParseFn { kind } => {
                write!(f, "no prefix parse function for {kind} found")
            },

            Self::InvalidIntegerLiteral { literal } => {
                write!(f, "could not parse {literal:?} as integer")
            },
        }
    }
}

impl std::error::Error for ParseError {}
