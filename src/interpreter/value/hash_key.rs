use std::hash::Hasher;

use fnv::FnvHasher;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// The precomputed key of a hash entry.
///
/// A hash key pairs the type tag of the original value with a 64-bit
/// digest: booleans digest to 0 or 1, integers to their unsigned bit
/// pattern, and strings to the FNV-1a hash of their UTF-8 bytes. Keys of
/// different types never collide because the tag participates in
/// equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    type_tag: &'static str,
    digest:   u64,
}

impl HashKey {
    /// Computes the hash key of a value.
    ///
    /// Two equal values of a hashable type always produce the same key.
    /// Distinct strings may collide structurally; hash entries store the
    /// original key value so lookups can tell collisions apart.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnusableHashKey`] for any value that is
    /// not an `INT`, `BOOL`, or `STRING`.
    ///
    /// # Example
    /// ```
    /// use langur::interpreter::value::{core::Value, hash_key::HashKey};
    ///
    /// let one = HashKey::of(&Value::from("one")).unwrap();
    /// let again = HashKey::of(&Value::from("one")).unwrap();
    ///
    /// assert_eq!(one, again);
    /// assert!(HashKey::of(&Value::Null).is_err());
    /// ```
    pub fn of(value: &Value) -> Result<Self, RuntimeError> {
        let digest = match value {
            Value::Int(value) => *value as u64,
            Value::Bool(value) => u64::from(*value),
            Value::Str(text) => {
                let mut hasher = FnvHasher::default();
                hasher.write(text.as_bytes());
                hasher.finish()
            },
            other => return Err(RuntimeError::UnusableHashKey { kind: other.type_name() }),
        };

        Ok(Self { type_tag: value.type_name(),
                  digest })
    }
}
