//! # Evaluation Context
//!
//! The capability the binder uses to turn call-site expressions into values.
//!
//! The real evaluator implements [`Context`] for its own expression type.
//! [`ScopeContext`] is a self-contained implementation over [`Expression`]
//! and a lexical [`Scope`], enough to drive the builtins without a parser.
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::context::{Context, Expression, ScopeContext};
//! use openscad_advanced::Value;
//!
//! let mut ctx = ScopeContext::new();
//! ctx.scope.define("n", Value::Number(3.0));
//! let value = ctx.evaluate(&Expression::variable("n")).unwrap();
//! assert_eq!(value, Value::Number(3.0));
//! ```

use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::error::EvalError;
use crate::scope::Scope;
use crate::value::Value;

/// Expression evaluation plus a diagnostics sink.
pub trait Context: DiagnosticSink {
    /// Call-site expression type.
    type Expr;

    /// Evaluate one argument expression in the caller's scope.
    fn evaluate(&mut self, expr: &Self::Expr) -> Result<Value, EvalError>;
}

/// Minimal expression tree understood by [`ScopeContext`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A constant value.
    Literal(Value),
    /// A variable reference resolved through the scope.
    Variable(String),
    /// A vector literal, `[a, b, c]`.
    Vector(Vec<Expression>),
}

impl Expression {
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    pub fn variable(name: &str) -> Self {
        Expression::Variable(name.to_string())
    }
}

impl From<Value> for Expression {
    fn from(value: Value) -> Self {
        Expression::Literal(value)
    }
}

/// Context backed by a lexical scope that collects warnings.
///
/// ## Fields
///
/// - `scope`: Variables visible to argument expressions
/// - `warnings`: Diagnostics reported during binding and resolution
#[derive(Debug, Clone, Default)]
pub struct ScopeContext {
    pub scope: Scope,
    pub warnings: Vec<Diagnostic>,
}

impl ScopeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the collected warnings, oldest first.
    pub fn warning_messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|d| d.message.as_str()).collect()
    }
}

impl DiagnosticSink for ScopeContext {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.warnings.push(diagnostic);
    }
}

impl Context for ScopeContext {
    type Expr = Expression;

    fn evaluate(&mut self, expr: &Expression) -> Result<Value, EvalError> {
        match expr {
            Expression::Literal(value) => Ok(value.clone()),
            Expression::Variable(name) => match self.scope.get(name) {
                Some(value) => Ok(value.clone()),
                None => {
                    self.warn(format!("Ignoring unknown variable '{}'", name));
                    Ok(Value::Undef)
                }
            },
            Expression::Vector(items) => {
                let values = items
                    .iter()
                    .map(|item| self.evaluate(item))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Vector(values))
            }
        }
    }
}
