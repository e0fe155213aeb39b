use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Runtime errors travel through the evaluator as in-band values; the
/// rendered message of each variant is part of the language's observable
/// contract, so the wording here is load-bearing.
pub enum RuntimeError {
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator that was applied.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// An infix operator has no meaning for its operand types.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator that was applied.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator has no meaning for its operand type.
    UnknownPrefixOperator {
        /// The operator that was applied.
        operator: PrefixOperator,
        /// Type tag of the operand.
        right:    &'static str,
    },
    /// A name resolved to neither a binding nor a builtin.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// A call target was not callable.
    NotAFunction {
        /// Type tag of the value in call position.
        kind: &'static str,
    },
    /// A value of a non-hashable type was used as a hash key.
    UnusableHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type tag of the indexed value.
        kind: &'static str,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// A function or builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the callee requires.
        want: usize,
    },
    /// A builtin received an argument of the wrong type.
    WrongArgumentType {
        /// The builtin's name.
        builtin:  &'static str,
        /// The type tag the builtin requires.
        expected: &'static str,
        /// Type tag of the argument actually supplied.
        got:      &'static str,
    },
    /// A builtin has no behavior for the supplied argument type.
    UnsupportedArgument {
        /// The builtin's name.
        builtin: &'static str,
        /// Type tag of the argument actually supplied.
        got:     &'static str,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },

            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },

            Self::UnknownPrefixOperator { operator, right } => {
                write!(f, "unknown operator: {operator}{right}")
            },

            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),

            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),

            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),

            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },

            Self::DivisionByZero => write!(f, "division by zero"),

            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },

            Self::WrongArgumentType { builtin,
                                      expected,
                                      got, } => {
                write!(f, "argument to `{builtin}` must be {expected}, got {got}")
            },

            Self::UnsupportedArgument { builtin, got } => {
                write!(f, "argument to `{builtin}` not supported, got {got}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
