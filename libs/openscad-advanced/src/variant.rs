//! # Operation Variants
//!
//! The closed set of advanced operations and the parameter signature each
//! one declares.
//!
//! ## Signatures
//!
//! | Variant | Parameters (positional order) |
//! |---------|-------------------------------|
//! | `minkowski` | `convexity` |
//! | `glide` | `path` (required), `convexity` |
//! | `subdiv` | `level`, `type`, `convexity` |
//! | `hull` | none |
//! | `resize` | `newsize`, `auto` |

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five advanced operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationVariant {
    Minkowski,
    Glide,
    Subdivision,
    Hull,
    Resize,
}

impl OperationVariant {
    /// Every variant, in registration order.
    pub const ALL: [OperationVariant; 5] = [
        OperationVariant::Minkowski,
        OperationVariant::Glide,
        OperationVariant::Subdivision,
        OperationVariant::Hull,
        OperationVariant::Resize,
    ];

    /// Script-level keyword of the variant.
    pub fn name(self) -> &'static str {
        match self {
            OperationVariant::Minkowski => "minkowski",
            OperationVariant::Glide => "glide",
            OperationVariant::Subdivision => "subdiv",
            OperationVariant::Hull => "hull",
            OperationVariant::Resize => "resize",
        }
    }

    /// Declared parameters of the variant; see [`signature_for`].
    pub fn signature(self) -> &'static [Parameter] {
        signature_for(self)
    }
}

impl fmt::Display for OperationVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declared parameter: matched by name, or by position in the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    /// Binding fails when no argument reaches a required parameter.
    pub required: bool,
}

impl Parameter {
    const fn optional(name: &'static str) -> Self {
        Self { name, required: false }
    }

    const fn required(name: &'static str) -> Self {
        Self { name, required: true }
    }
}

const MINKOWSKI_PARAMS: [Parameter; 1] = [Parameter::optional("convexity")];
const GLIDE_PARAMS: [Parameter; 2] = [
    Parameter::required("path"),
    Parameter::optional("convexity"),
];
const SUBDIV_PARAMS: [Parameter; 3] = [
    Parameter::optional("level"),
    Parameter::optional("type"),
    Parameter::optional("convexity"),
];
const RESIZE_PARAMS: [Parameter; 2] = [
    Parameter::optional("newsize"),
    Parameter::optional("auto"),
];

/// Returns the ordered parameter list the variant declares.
///
/// # Example
///
/// ```rust
/// use openscad_advanced::variant::{signature_for, OperationVariant};
///
/// let names: Vec<_> = signature_for(OperationVariant::Subdivision)
///     .iter()
///     .map(|p| p.name)
///     .collect();
/// assert_eq!(names, ["level", "type", "convexity"]);
/// ```
pub fn signature_for(variant: OperationVariant) -> &'static [Parameter] {
    match variant {
        OperationVariant::Minkowski => &MINKOWSKI_PARAMS,
        OperationVariant::Glide => &GLIDE_PARAMS,
        OperationVariant::Subdivision => &SUBDIV_PARAMS,
        OperationVariant::Hull => &[],
        OperationVariant::Resize => &RESIZE_PARAMS,
    }
}
