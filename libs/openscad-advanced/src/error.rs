//! # Evaluation Errors
//!
//! Hard errors raised while instantiating an advanced operation.
//!
//! Recoverable coercion problems are not errors; they are reported as
//! [`Diagnostic`](crate::diagnostic::Diagnostic) warnings instead.

use thiserror::Error;

/// Errors that can occur while binding or instantiating a builtin call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A required parameter received no argument at the call site.
    #[error("Undefined variable '{name}' in call to {module}()")]
    UndefinedVariable { name: String, module: String },

    /// The builtin name is not registered.
    #[error("Unknown module: {0}")]
    UnknownModule(String),

    /// A builtin name was registered twice.
    #[error("Builtin already registered: {0}")]
    DuplicateBuiltin(String),

    /// The context failed to evaluate an argument expression.
    #[error("Expression error: {0}")]
    Expression(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::UndefinedVariable {
            name: "path".to_string(),
            module: "glide".to_string(),
        };
        assert_eq!(err.to_string(), "Undefined variable 'path' in call to glide()");
        assert!(EvalError::UnknownModule("cube".into()).to_string().contains("cube"));
    }
}
