//! # Operation Nodes
//!
//! Immutable nodes produced for each advanced operation call site.
//!
//! A node carries the resolved parameters of its variant and the already
//! evaluated children. The variant is derived from the parameter payload,
//! so a node can never pair one variant with another variant's parameters.
//!
//! ## Canonical Form
//!
//! ```text
//! minkowski(convexity = 2)
//! glide(path = [1, 2], convexity = 0)
//! subdiv(type = 1, level = 2, convexity = 0)
//! hull()
//! resize(newsize = [5,6,0], auto = [0,0,1])
//! ```

use crate::value::Value;
use crate::variant::OperationVariant;
use glam::{BVec3, DVec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Shared reference to a child node. Children may be reused across parents.
pub type NodeRef = Rc<dyn AbstractNode>;

/// Behaviour every node in the geometry tree exposes.
pub trait AbstractNode: fmt::Debug {
    /// Builtin name of the node, e.g. `"hull"`.
    fn name(&self) -> &str;

    /// Deterministic text form used for debugging and cache keys.
    fn canonical_representation(&self) -> String;

    fn children(&self) -> &[NodeRef] {
        &[]
    }
}

/// Subdivision surface scheme.
///
/// The discriminant is the value written in the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SurfaceKind {
    CatmullClark = 0,
    Loop = 1,
    DooSabin = 2,
    Sqrt3 = 3,
}

impl SurfaceKind {
    /// Matches a lowercase scheme name; spaced spellings are accepted.
    ///
    /// ```rust
    /// use openscad_advanced::SurfaceKind;
    ///
    /// assert_eq!(SurfaceKind::from_name("doo sabin"), Some(SurfaceKind::DooSabin));
    /// assert_eq!(SurfaceKind::from_name("butterfly"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "catmullclark" | "catmull clark" => Some(SurfaceKind::CatmullClark),
            "loop" => Some(SurfaceKind::Loop),
            "doosabin" | "doo sabin" => Some(SurfaceKind::DooSabin),
            "sqrt3" | "sqrt 3" => Some(SurfaceKind::Sqrt3),
            _ => None,
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// Resolved parameters, one payload per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OperationParameters {
    Minkowski {
        convexity: i32,
    },
    Glide {
        convexity: i32,
        /// Passed through untouched; interpreted by the geometry evaluator.
        path: Value,
    },
    Subdivision {
        convexity: i32,
        level: u32,
        kind: SurfaceKind,
    },
    Hull,
    Resize {
        new_size: DVec3,
        auto_axes: BVec3,
    },
}

impl OperationParameters {
    pub fn variant(&self) -> OperationVariant {
        match self {
            OperationParameters::Minkowski { .. } => OperationVariant::Minkowski,
            OperationParameters::Glide { .. } => OperationVariant::Glide,
            OperationParameters::Subdivision { .. } => OperationVariant::Subdivision,
            OperationParameters::Hull => OperationVariant::Hull,
            OperationParameters::Resize { .. } => OperationVariant::Resize,
        }
    }

    /// Convexity hint, for the variants that carry one.
    pub fn convexity(&self) -> Option<i32> {
        match self {
            OperationParameters::Minkowski { convexity }
            | OperationParameters::Glide { convexity, .. }
            | OperationParameters::Subdivision { convexity, .. } => Some(*convexity),
            OperationParameters::Hull | OperationParameters::Resize { .. } => None,
        }
    }
}

impl fmt::Display for OperationParameters {
    /// Writes `name(field = value, ...)` in the fixed field order of the variant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant().name())?;
        match self {
            OperationParameters::Minkowski { convexity } => {
                write!(f, "(convexity = {})", convexity)
            }
            OperationParameters::Glide { convexity, path } => {
                write!(f, "(path = {}, convexity = {})", path, convexity)
            }
            OperationParameters::Subdivision { convexity, level, kind } => {
                write!(f, "(type = {}, level = {}, convexity = {})", kind, level, convexity)
            }
            OperationParameters::Hull => f.write_str("()"),
            OperationParameters::Resize { new_size, auto_axes } => write!(
                f,
                "(newsize = [{},{},{}], auto = [{},{},{}])",
                new_size.x,
                new_size.y,
                new_size.z,
                u8::from(auto_axes.x),
                u8::from(auto_axes.y),
                u8::from(auto_axes.z),
            ),
        }
    }
}

/// Consumer of finished nodes, e.g. the mesh backend.
pub trait GeometryEvaluator {
    type Output;
    type Error;

    fn evaluate_operation(&mut self, node: &OperationNode) -> Result<Self::Output, Self::Error>;
}

/// An advanced operation with its resolved parameters and children.
#[derive(Debug, Clone)]
pub struct OperationNode {
    parameters: OperationParameters,
    children: Vec<NodeRef>,
}

impl OperationNode {
    pub fn new(parameters: OperationParameters, children: Vec<NodeRef>) -> Self {
        Self { parameters, children }
    }

    pub fn variant(&self) -> OperationVariant {
        self.parameters.variant()
    }

    pub fn parameters(&self) -> &OperationParameters {
        &self.parameters
    }

    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Builtin name: `minkowski`, `glide`, `subdiv`, `hull` or `resize`.
    pub fn name(&self) -> &'static str {
        self.variant().name()
    }

    pub fn canonical_representation(&self) -> String {
        self.parameters.to_string()
    }

    /// Hands the node to a geometry backend.
    pub fn evaluate_geometry<G: GeometryEvaluator>(&self, evaluator: &mut G) -> Result<G::Output, G::Error> {
        evaluator.evaluate_operation(self)
    }
}

impl AbstractNode for OperationNode {
    fn name(&self) -> &str {
        OperationNode::name(self)
    }

    fn canonical_representation(&self) -> String {
        OperationNode::canonical_representation(self)
    }

    fn children(&self) -> &[NodeRef] {
        &self.children
    }
}

impl fmt::Display for OperationNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parameters)
    }
}
