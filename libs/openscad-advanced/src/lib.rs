//! # OpenSCAD Advanced
//!
//! Evaluator side of the advanced builtins `minkowski`, `glide`, `subdiv`,
//! `hull` and `resize`.
//!
//! ## Architecture
//!
//! ```text
//! call site → binder (ResolvedScope) → resolver (OperationParameters) → OperationNode → mesh backend
//! ```
//!
//! Geometry is not computed here. A finished [`OperationNode`] is handed to a
//! [`GeometryEvaluator`] implemented by the mesh backend.
//!
//! ## Example
//!
//! ```rust
//! use openscad_advanced::binder::CallArgument;
//! use openscad_advanced::context::{Expression, ScopeContext};
//! use openscad_advanced::module::{instantiate, ModuleInstantiation};
//! use openscad_advanced::Value;
//!
//! let mut ctx = ScopeContext::new();
//! let newsize = Expression::Vector(vec![Expression::literal(5.0), Expression::literal(6.0)]);
//! let auto = Value::Vector(vec![Value::Boolean(false), Value::Boolean(false), Value::Boolean(true)]);
//! let inst = ModuleInstantiation::new(
//!     "resize",
//!     vec![CallArgument::positional(newsize), CallArgument::named("auto", auto.into())],
//!     Vec::new(),
//! );
//! let node = instantiate(&mut ctx, &inst).unwrap();
//! assert_eq!(node.canonical_representation(), "resize(newsize = [5,6,0], auto = [0,0,1])");
//! ```

pub mod binder;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod module;
pub mod node;
pub mod registry;
pub mod resolver;
pub mod scope;
pub mod value;
pub mod variant;

// Re-export public API
pub use binder::{bind, CallArgument, ResolvedScope};
pub use context::{Context, Expression, ScopeContext};
pub use diagnostic::{Diagnostic, DiagnosticSink, Severity};
pub use error::EvalError;
pub use module::{instantiate, AdvancedModule, Instantiation, ModuleInstantiation};
pub use node::{AbstractNode, GeometryEvaluator, NodeRef, OperationNode, OperationParameters, SurfaceKind};
pub use registry::{builtins, register_builtin_advanced, Builtins};
pub use resolver::resolve;
pub use scope::Scope;
pub use value::Value;
pub use variant::{OperationVariant, Parameter};
