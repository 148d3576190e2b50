use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A flat mapping from names to runtime values.
///
/// Scopes are not linked to a parent. A function call copies the whole
/// environment of its caller and binds its parameters on top of the copy,
/// so nothing a call binds is visible to the caller once it returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Copies this environment and binds each parameter to its argument in
    /// the copy.
    ///
    /// # Example
    /// ```
    /// use lispwalk::interpreter::{evaluator::environment::Environment, value::core::Value};
    ///
    /// let mut caller = Environment::new();
    /// caller.define("x", Value::Integer(1));
    /// caller.define("y", Value::Integer(2));
    ///
    /// let params = vec!["y".to_string()];
    /// let call = caller.snapshot_with(&params, vec![Value::Integer(20)]);
    ///
    /// assert_eq!(call.get("x"), Some(&Value::Integer(1)));
    /// assert_eq!(call.get("y"), Some(&Value::Integer(20)));
    /// assert_eq!(caller.get("y"), Some(&Value::Integer(2)));
    /// ```
    #[must_use]
    pub fn snapshot_with(&self, params: &[String], args: Vec<Value>) -> Self {
        let mut env = self.clone();
        for (param, arg) in params.iter().zip(args) {
            env.define(param.as_str(), arg);
        }
        env
    }

    /// The number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
