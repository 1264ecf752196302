//! # Variable Scope
//!
//! Lexical scoping for the variables visible to argument expressions.
//!
//! ## OpenSCAD Scoping Rules
//!
//! - Variables are lexically scoped
//! - Inner scopes can shadow outer scope variables
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::scope::Scope;
//! use openscad_advanced::value::Value;
//!
//! let mut scope = Scope::new();
//! scope.define("x", Value::Number(10.0));
//! assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
//! ```

use crate::value::Value;
use std::collections::HashMap;

/// A single scope level containing variable bindings.
#[derive(Debug, Clone, Default)]
struct ScopeLevel {
    bindings: HashMap<String, Value>,
}

/// Lexical scope for variable resolution.
///
/// Variables are resolved from innermost to outermost level.
///
/// ## Example
///
/// ```rust
/// use openscad_advanced::scope::Scope;
/// use openscad_advanced::value::Value;
///
/// let mut scope = Scope::new();
/// scope.define("x", Value::Number(10.0));
///
/// scope.push(); // Enter new scope
/// scope.define("x", Value::Number(20.0)); // Shadows outer x
/// assert_eq!(scope.get("x"), Some(&Value::Number(20.0)));
///
/// scope.pop(); // Exit scope
/// assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
/// ```
#[derive(Debug, Clone)]
pub struct Scope {
    /// Stack of scope levels (innermost last).
    levels: Vec<ScopeLevel>,
}

impl Scope {
    /// Create a scope holding only the global level.
    pub fn new() -> Self {
        Self {
            levels: vec![ScopeLevel::default()],
        }
    }

    /// Push a new scope level.
    pub fn push(&mut self) {
        self.levels.push(ScopeLevel::default());
    }

    /// Pop the current scope level.
    ///
    /// The global level is never popped.
    pub fn pop(&mut self) {
        if self.levels.len() > 1 {
            self.levels.pop();
        }
    }

    /// Define a variable in the current scope.
    ///
    /// This will shadow any variable with the same name in outer scopes.
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(level) = self.levels.last_mut() {
            level.bindings.insert(name.to_string(), value);
        }
    }

    /// Get a variable value, searching from innermost to outermost scope.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.levels
            .iter()
            .rev()
            .find_map(|level| level.bindings.get(name))
    }

    /// Number of levels, the global level included.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_define_get() {
        let mut scope = Scope::new();
        scope.define("x", Value::Number(10.0));
        assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
    }

    #[test]
    fn test_scope_shadowing() {
        let mut scope = Scope::new();
        scope.define("x", Value::Number(10.0));

        scope.push();
        scope.define("x", Value::Number(20.0));
        assert_eq!(scope.get("x"), Some(&Value::Number(20.0)));

        scope.pop();
        assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
    }

    #[test]
    fn test_scope_inner_access_outer() {
        let mut scope = Scope::new();
        scope.define("x", Value::Number(10.0));

        scope.push();
        assert_eq!(scope.get("x"), Some(&Value::Number(10.0)));
        assert_eq!(scope.depth(), 2);
    }

    #[test]
    fn test_global_level_survives_pop() {
        let mut scope = Scope::new();
        scope.define("x", Value::Boolean(true));
        scope.pop();
        assert_eq!(scope.depth(), 1);
        assert_eq!(scope.get("x"), Some(&Value::Boolean(true)));
    }

    #[test]
    fn test_scope_undefined() {
        let scope = Scope::new();
        assert_eq!(scope.get("undefined_var"), None);
    }
}
