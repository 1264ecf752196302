//! # Argument Binder
//!
//! Matches call-site arguments against a declared signature and evaluates
//! them through the [`Context`].
//!
//! ## Matching Rules
//!
//! 1. Named arguments bind to the parameter of the same name
//! 2. Positional arguments fill the remaining parameters left to right
//! 3. Unknown names and surplus positional arguments are ignored with a warning
//! 4. Unbound parameters read as `undef`; an unbound required parameter is an error
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::binder::{bind, CallArgument};
//! use openscad_advanced::context::{Expression, ScopeContext};
//! use openscad_advanced::variant::{signature_for, OperationVariant};
//! use openscad_advanced::Value;
//!
//! let mut ctx = ScopeContext::new();
//! let args = vec![
//!     CallArgument::named("type", Expression::literal("loop")),
//!     CallArgument::positional(Expression::literal(2.0)),
//! ];
//! let scope = bind("subdiv", signature_for(OperationVariant::Subdivision), &args, &mut ctx).unwrap();
//! assert_eq!(scope.get("level"), &Value::Number(2.0));
//! assert_eq!(scope.get("type"), &Value::from("loop"));
//! assert!(scope.get("convexity").is_undefined());
//! ```

use crate::context::Context;
use crate::diagnostic::DiagnosticSink;
use crate::error::EvalError;
use crate::value::Value;
use crate::variant::Parameter;

static UNDEF: Value = Value::Undef;

/// One argument exactly as written at the call site.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgument<E> {
    /// `Some` for `name = expr`, `None` for a positional argument.
    pub name: Option<String>,
    pub expr: E,
}

impl<E> CallArgument<E> {
    pub fn positional(expr: E) -> Self {
        Self { name: None, expr }
    }

    pub fn named(name: &str, expr: E) -> Self {
        Self {
            name: Some(name.to_string()),
            expr,
        }
    }
}

/// Evaluated value of every declared parameter, in signature order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedScope {
    bindings: Vec<(&'static str, Value)>,
}

impl ResolvedScope {
    /// Value bound to `name`; `undef` for names the signature does not declare.
    pub fn get(&self, name: &str) -> &Value {
        self.bindings
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, value)| value)
            .unwrap_or(&UNDEF)
    }

    /// Declared names, in signature order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Binds `arguments` against `signature`, evaluating each matched expression.
///
/// `module` is the builtin name used in warnings and errors.
pub fn bind<C: Context>(
    module: &str,
    signature: &[Parameter],
    arguments: &[CallArgument<C::Expr>],
    ctx: &mut C,
) -> Result<ResolvedScope, EvalError> {
    let declared = |name: &str| signature.iter().position(|param| param.name == name);

    // Positional arguments take the slots no named argument claims.
    let mut named = vec![false; signature.len()];
    for index in arguments.iter().filter_map(|arg| arg.name.as_deref().and_then(declared)) {
        named[index] = true;
    }
    let mut free = (0..signature.len()).filter(|&index| !named[index]);

    // Evaluation and warnings follow call-site order.
    let mut slots: Vec<Option<Value>> = vec![None; signature.len()];
    for arg in arguments {
        match &arg.name {
            Some(name) => match declared(name.as_str()) {
                Some(index) => {
                    let value = ctx.evaluate(&arg.expr)?;
                    if slots[index].replace(value).is_some() {
                        ctx.warn(format!("{}(): argument '{}' supplied more than once", module, name));
                    }
                }
                None => ctx.warn(format!("{}(): ignoring unknown argument '{}'", module, name)),
            },
            None => match free.next() {
                Some(index) => slots[index] = Some(ctx.evaluate(&arg.expr)?),
                None => ctx.warn(format!("{}(): ignoring extra positional argument", module)),
            },
        }
    }

    let mut bindings = Vec::with_capacity(signature.len());
    for (param, slot) in signature.iter().zip(slots) {
        match slot {
            Some(value) => bindings.push((param.name, value)),
            None if param.required => {
                return Err(EvalError::UndefinedVariable {
                    name: param.name.to_string(),
                    module: module.to_string(),
                });
            }
            None => bindings.push((param.name, Value::Undef)),
        }
    }

    tracing::trace!(module, bound = bindings.len(), "bound call arguments");
    Ok(ResolvedScope { bindings })
}

#[cfg(test)]
mod tests;
