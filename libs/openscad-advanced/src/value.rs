//! # Dynamic Values
//!
//! The dynamically typed value produced by evaluating an OpenSCAD expression,
//! plus the total extractors the resolvers use to read it.
//!
//! Every extractor is defined for every tag. Reading a number out of a
//! string does not fail, it yields the documented fallback instead.
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::Value;
//!
//! assert_eq!(Value::Number(2.5).to_double(), 2.5);
//! assert_eq!(Value::from("loop").to_double(), 0.0);
//! assert!(Value::Vector(vec![Value::Undef]).to_bool());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a dynamic OpenSCAD value.
/// OpenSCAD is dynamically typed with these supported types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Undef,
    Boolean(bool),
    Number(f64),
    String(String),
    Vector(Vec<Value>),
    Range { start: f64, step: f64, end: f64 },
}

impl Value {
    /// Returns true for `undef`.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undef)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Value::Vector(_))
    }

    /// Name of the value's tag, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undefined",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Range { .. } => "range",
        }
    }

    /// Returns true if the value is "truthy" in OpenSCAD.
    /// - Boolean(b) -> b
    /// - Number != 0 -> true
    /// - String non-empty -> true
    /// - Vector non-empty -> true
    /// - Range -> true
    /// - Undef -> false
    pub fn to_bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Vector(v) => !v.is_empty(),
            Value::Range { .. } => true,
            Value::Undef => false,
        }
    }

    /// Numeric view of the value.
    ///
    /// Only `Number` carries a number; every other tag reads as `0.0`.
    pub fn to_double(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            _ => 0.0,
        }
    }

    /// Textual view of the value without string quoting.
    ///
    /// ```rust
    /// use openscad_advanced::Value;
    ///
    /// assert_eq!(Value::from("Loop").to_text(), "Loop");
    /// assert_eq!(Value::Number(3.0).to_text(), "3");
    /// ```
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Elements of a vector value, `None` for any other tag.
    pub fn as_vector(&self) -> Option<&[Value]> {
        match self {
            Value::Vector(items) => Some(items),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Range { start, step, end } => write!(f, "[{} : {} : {}]", start, step, end),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_double_falls_back_to_zero() {
        assert_eq!(Value::Number(-2.5).to_double(), -2.5);
        assert_eq!(Value::Undef.to_double(), 0.0);
        assert_eq!(Value::Boolean(true).to_double(), 0.0);
        assert_eq!(Value::from("12").to_double(), 0.0);
        assert_eq!(Value::Vector(vec![Value::Number(1.0)]).to_double(), 0.0);
    }

    #[test]
    fn test_to_bool_truthiness() {
        assert!(Value::Boolean(true).to_bool());
        assert!(!Value::Boolean(false).to_bool());
        assert!(Value::Number(0.5).to_bool());
        assert!(!Value::Number(0.0).to_bool());
        assert!(!Value::from("").to_bool());
        assert!(Value::from("x").to_bool());
        assert!(!Value::Vector(vec![]).to_bool());
        assert!(!Value::Undef.to_bool());
    }

    #[test]
    fn test_to_text_is_unquoted() {
        assert_eq!(Value::from("doo sabin").to_text(), "doo sabin");
        assert_eq!(Value::Boolean(false).to_text(), "false");
        assert_eq!(Value::Undef.to_text(), "undef");
    }

    #[test]
    fn test_as_vector_only_for_vectors() {
        let v = Value::Vector(vec![Value::Number(1.0), Value::Number(2.0)]);
        assert_eq!(v.as_vector().map(|items| items.len()), Some(2));
        assert!(Value::Number(1.0).as_vector().is_none());
    }

    #[test]
    fn test_display() {
        let v = Value::Vector(vec![Value::Number(1.0), Value::from("a"), Value::Undef]);
        assert_eq!(v.to_string(), "[1, \"a\", undef]");
        let r = Value::Range { start: 0.0, step: 1.0, end: 10.0 };
        assert_eq!(r.to_string(), "[0 : 1 : 10]");
    }

    #[test]
    fn test_predicates() {
        assert!(Value::default().is_undefined());
        assert!(Value::from(true).is_boolean());
        assert!(Value::from(1.0).is_number());
        assert!(Value::from("s").is_string());
        assert!(Value::from(vec![]).is_vector());
        assert_eq!(Value::from(1.0).type_name(), "number");
    }
}
