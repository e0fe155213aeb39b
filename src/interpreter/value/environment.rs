use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment frame.
///
/// Closures hold one of these for their definition site, and nested
/// frames hold one for their outer frame, so a single frame can be
/// reachable from many places at once. Recursive bindings (`let f =
/// fn(x) { f(x) };`) make the graph cyclic; reference counting tolerates
/// the cycle for the lifetime of the interpreter.
pub type Env = Rc<RefCell<Environment>>;

/// A single environment frame: a name-to-value mapping plus an optional
/// link to the enclosing frame.
///
/// Lookups walk outward through the links; writes always land in the
/// frame they are made on, so `let` never rebinds an outer name.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

#[allow(clippy::new_ret_no_self)]
impl Environment {
    /// Creates a fresh, empty top-level environment.
    ///
    /// # Example
    /// ```
    /// use langur::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x", Value::Int(3));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Int(3)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None }))
    }

    /// Creates an empty frame enclosed by `outer`.
    ///
    /// Names not found in the new frame resolve through `outer`; names
    /// set on the new frame shadow it.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)) }))
    }

    /// Looks up a name, walking outward through enclosing frames.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this frame, overwriting any previous binding of
    /// the same name in this frame only.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}
