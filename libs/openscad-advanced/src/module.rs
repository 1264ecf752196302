//! # Advanced Module Instantiation
//!
//! Builds an [`OperationNode`] for one call site:
//!
//! ```text
//! arguments → bind → resolve → children → OperationNode
//! ```
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::binder::CallArgument;
//! use openscad_advanced::context::{Expression, ScopeContext};
//! use openscad_advanced::module::{instantiate, ModuleInstantiation};
//!
//! let mut ctx = ScopeContext::new();
//! let inst = ModuleInstantiation::new(
//!     "minkowski",
//!     vec![CallArgument::named("convexity", Expression::literal(2.9))],
//!     Vec::new(),
//! );
//! let node = instantiate(&mut ctx, &inst).unwrap();
//! assert_eq!(node.canonical_representation(), "minkowski(convexity = 2)");
//! ```

use crate::binder::{bind, CallArgument};
use crate::context::Context;
use crate::error::EvalError;
use crate::node::{NodeRef, OperationNode};
use crate::registry::builtins;
use crate::resolver::resolve;
use crate::variant::OperationVariant;

/// A call site as seen by a builtin: its arguments plus a way to get its
/// evaluated children.
pub trait Instantiation {
    type Expr;

    /// Name written at the call site.
    fn name(&self) -> &str;

    fn arguments(&self) -> &[CallArgument<Self::Expr>];

    fn evaluate_children(&self) -> Result<Vec<NodeRef>, EvalError>;
}

/// Call site whose children were evaluated up front.
#[derive(Debug, Clone)]
pub struct ModuleInstantiation<E> {
    pub name: String,
    pub arguments: Vec<CallArgument<E>>,
    pub children: Vec<NodeRef>,
}

impl<E> ModuleInstantiation<E> {
    pub fn new(name: &str, arguments: Vec<CallArgument<E>>, children: Vec<NodeRef>) -> Self {
        Self {
            name: name.to_string(),
            arguments,
            children,
        }
    }
}

impl<E> Instantiation for ModuleInstantiation<E> {
    type Expr = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn arguments(&self) -> &[CallArgument<E>] {
        &self.arguments
    }

    fn evaluate_children(&self) -> Result<Vec<NodeRef>, EvalError> {
        Ok(self.children.clone())
    }
}

/// Builtin module for one advanced operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedModule {
    variant: OperationVariant,
}

impl AdvancedModule {
    pub fn new(variant: OperationVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> OperationVariant {
        self.variant
    }

    /// Evaluates one call site into a node.
    ///
    /// Binding errors propagate unchanged; coercion problems are reported to
    /// `ctx` as warnings.
    pub fn evaluate<C, I>(&self, ctx: &mut C, inst: &I) -> Result<OperationNode, EvalError>
    where
        C: Context,
        I: Instantiation<Expr = C::Expr>,
    {
        let name = self.variant.name();
        let scope = bind(name, self.variant.signature(), inst.arguments(), ctx)?;
        let parameters = resolve(self.variant, &scope, ctx);
        let children = inst.evaluate_children()?;
        tracing::trace!(module = name, children = children.len(), "instantiated advanced module");
        Ok(OperationNode::new(parameters, children))
    }
}

/// Dispatches a call site by name through the process-wide registry.
pub fn instantiate<C, I>(ctx: &mut C, inst: &I) -> Result<OperationNode, EvalError>
where
    C: Context,
    I: Instantiation<Expr = C::Expr>,
{
    let variant = builtins()
        .lookup(inst.name())
        .ok_or_else(|| EvalError::UnknownModule(inst.name().to_string()))?;
    AdvancedModule::new(variant).evaluate(ctx, inst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Expression, ScopeContext};
    use crate::node::{AbstractNode, OperationParameters};
    use std::rc::Rc;

    #[derive(Debug)]
    struct Sphere;

    impl AbstractNode for Sphere {
        fn name(&self) -> &str {
            "sphere"
        }

        fn canonical_representation(&self) -> String {
            "sphere($fn = 0, $fa = 12, $fs = 2, r = 1)".to_string()
        }
    }

    #[test]
    fn test_children_are_attached() {
        let mut ctx = ScopeContext::new();
        let child: NodeRef = Rc::new(Sphere);
        let inst = ModuleInstantiation::<Expression>::new("hull", Vec::new(), vec![child.clone(), child]);
        let node = AdvancedModule::new(OperationVariant::Hull).evaluate(&mut ctx, &inst).unwrap();
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[1].name(), "sphere");
    }

    #[test]
    fn test_unknown_module() {
        let mut ctx = ScopeContext::new();
        let inst = ModuleInstantiation::<Expression>::new("cube", Vec::new(), Vec::new());
        let err = instantiate(&mut ctx, &inst).unwrap_err();
        assert_eq!(err, EvalError::UnknownModule("cube".to_string()));
    }

    #[test]
    fn test_warnings_reach_context() {
        let mut ctx = ScopeContext::new();
        let inst = ModuleInstantiation::new(
            "subdiv",
            vec![CallArgument::named("level", Expression::literal(-1.0))],
            Vec::new(),
        );
        let node = instantiate(&mut ctx, &inst).unwrap();
        assert!(matches!(node.parameters(), OperationParameters::Subdivision { level: 0, .. }));
        assert_eq!(ctx.warning_messages(), ["Subdivision cannot be less than 0. Setting to 0."]);
    }

    #[test]
    fn test_binding_error_propagates() {
        let mut ctx = ScopeContext::new();
        let inst = ModuleInstantiation::<Expression>::new("glide", Vec::new(), Vec::new());
        let err = instantiate(&mut ctx, &inst).unwrap_err();
        assert!(matches!(err, EvalError::UndefinedVariable { ref name, .. } if name == "path"));
    }
}
