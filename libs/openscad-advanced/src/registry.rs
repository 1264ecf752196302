//! # Builtin Registry
//!
//! Process-wide table from builtin keyword to [`OperationVariant`].
//!
//! The table is built exactly once, on first access, and is read-only from
//! then on. There is no way to register a name after that point.
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::registry::builtins;
//! use openscad_advanced::OperationVariant;
//!
//! assert_eq!(builtins().lookup("subdiv"), Some(OperationVariant::Subdivision));
//! assert_eq!(builtins().lookup("cube"), None);
//! ```

use crate::error::EvalError;
use crate::variant::OperationVariant;
use std::collections::HashMap;
use std::sync::OnceLock;

static BUILTINS: OnceLock<Builtins> = OnceLock::new();

/// Keyword table consulted by the builtin-call dispatcher.
#[derive(Debug, Clone, Default)]
pub struct Builtins {
    modules: HashMap<&'static str, OperationVariant>,
}

impl Builtins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`; a name can only be registered once.
    pub fn init(&mut self, name: &'static str, variant: OperationVariant) -> Result<(), EvalError> {
        if self.modules.contains_key(name) {
            return Err(EvalError::DuplicateBuiltin(name.to_string()));
        }
        self.modules.insert(name, variant);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<OperationVariant> {
        self.modules.get(name).copied()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.modules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Registers `minkowski`, `glide`, `subdiv`, `hull` and `resize`.
pub fn register_builtin_advanced(builtins: &mut Builtins) -> Result<(), EvalError> {
    for variant in OperationVariant::ALL {
        builtins.init(variant.name(), variant)?;
    }
    Ok(())
}

/// The frozen process-wide registry.
pub fn builtins() -> &'static Builtins {
    BUILTINS.get_or_init(|| {
        let mut builtins = Builtins::new();
        if let Err(err) = register_builtin_advanced(&mut builtins) {
            tracing::error!(%err, "failed to register advanced builtins");
        }
        tracing::debug!(count = builtins.len(), "registered advanced builtins");
        builtins
    })
}
