use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::{Block, Expression, Identifier},
    error::RuntimeError,
    interpreter::value::{environment::Env, hash_key::HashKey},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type that can appear in expressions, bindings,
/// and results, plus the two in-band sentinels the evaluator threads
/// through ordinary returns: `Return`, unwrapped exactly once at the
/// nearest function call or the program root, and `Error`, which
/// short-circuits every enclosing evaluation site.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A boolean value, `true` or `false`.
    Bool(bool),
    /// The absence of a value. Produced by missing `else` branches,
    /// out-of-bounds indexing, and `puts`.
    Null,
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered sequence of values.
    Array(Rc<Vec<Self>>),
    /// A mapping from hashable keys to values. Each entry keeps the
    /// original key value alongside the stored value so digest collisions
    /// can be told apart on lookup.
    Hash(Rc<HashMap<HashKey, (Self, Self)>>),
    /// A first-class function together with the environment it closed
    /// over.
    Function(Rc<FunctionValue>),
    /// A host-provided function.
    Builtin(&'static Builtin),
    /// A `return` travelling outward. Never user-observable.
    Return(Box<Self>),
    /// A runtime failure travelling outward. Never caught.
    Error(RuntimeError),
    /// A wrapped, unevaluated AST fragment produced by `quote`.
    Quote(Box<Expression>),
}

/// A function value: parameters, a shared body, and the captured
/// environment.
///
/// The environment is held by reference, not snapshotted, so bindings
/// created after the function literal was evaluated are still visible to
/// the closure.
pub struct FunctionValue {
    /// The parameter names, in order.
    pub parameters: Vec<Identifier>,
    /// The function body, shared with the AST that produced it.
    pub body:       Rc<Block>,
    /// The environment in effect at the definition site.
    pub env:        Env,
}

impl fmt::Debug for FunctionValue {
    // The captured environment can contain this closure; keep it out of
    // the output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
         .field("parameters", &self.parameters)
         .finish_non_exhaustive()
    }
}

/// A host-implemented function callable from the language.
pub struct Builtin {
    /// The name the builtin is looked up by.
    pub name: &'static str,
    /// The host function. Receives the evaluated arguments and returns
    /// the result directly; builtins never produce `Return`.
    pub func: fn(Vec<Value>) -> Value,
}

impl Builtin {
    /// Invokes the builtin with the given evaluated arguments.
    #[must_use]
    pub fn call(&self, arguments: Vec<Value>) -> Value {
        (self.func)(arguments)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the type tag used in error messages, such as `INT` or
    /// `FUNCTION`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "INT",
            Self::Bool(_) => "BOOL",
            Self::Null => "NULL",
            Self::Str(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::Return(_) => "RETURN",
            Self::Error(_) => "ERROR",
            Self::Quote(_) => "QUOTE",
        }
    }

    /// Returns `true` if the value is [`Error`].
    ///
    /// Every evaluation site checks this on its subresults and propagates
    /// the error unchanged.
    ///
    /// [`Error`]: Self::Error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns this value's truthiness.
    ///
    /// Only `false` and `null` are falsy; every other value, including
    /// `0` and `""`, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Null => false,
            _ => true,
        }
    }

    /// Computes the hash key of this value.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnusableHashKey`] for any type other than
    /// `INT`, `BOOL`, or `STRING`.
    pub fn hash_key(&self) -> Result<HashKey, RuntimeError> {
        HashKey::of(self)
    }
}

impl PartialEq for Value {
    /// Structural equality for scalars and collections; reference
    /// equality for functions and builtins.
    ///
    /// Comparing through the captured environment of a closure would
    /// recurse into reference cycles, so functions compare by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Null, Self::Null) => true,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Array(left), Self::Array(right)) => left == right,
            (Self::Hash(left), Self::Hash(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => Rc::ptr_eq(left, right),
            (Self::Builtin(left), Self::Builtin(right)) => std::ptr::eq(*left, *right),
            (Self::Return(left), Self::Return(right)) => left == right,
            (Self::Error(left), Self::Error(right)) => left == right,
            (Self::Quote(left), Self::Quote(right)) => left == right,
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Array(Rc::new(values))
    }
}

impl fmt::Display for Value {
    /// Renders the value the way the language shows it to users.
    ///
    /// Strings render as their raw content without quotes; hash iteration
    /// order is unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::Str(value) => write!(f, "{value}"),
            Self::Array(values) => {
                write!(f, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            },
            Self::Hash(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.values().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Function(function) => {
                let parameters = function.parameters
                                         .iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "fn({parameters}) {{\n  {}\n}}", function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::Return(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
            Self::Quote(node) => write!(f, "QUOTE({node})"),
        }
    }
}
