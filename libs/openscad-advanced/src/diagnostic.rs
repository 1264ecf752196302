//! # Diagnostics
//!
//! Non-fatal messages produced while resolving arguments. The crate only
//! records them; presenting them is up to whoever owns the sink.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic message. Hard failures are [`EvalError`](crate::error::EvalError)s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
}

/// A diagnostic message with severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub hint: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: String) -> Self {
        Self {
            severity,
            message,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn warning(message: String) -> Self {
        Self::new(Severity::Warning, message)
    }
}

/// Destination for diagnostics emitted during resolution.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);

    /// Shorthand for reporting a warning.
    fn warn(&mut self, message: String) {
        self.report(Diagnostic::warning(message));
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.warn("first".to_string());
        sink.report(Diagnostic::warning("second".to_string()).with_hint("fix it".to_string()));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Warning);
        assert_eq!(sink[0].message, "first");
        assert_eq!(sink[0].hint, None);
        assert_eq!(sink[1].hint.as_deref(), Some("fix it"));
    }
}
