//! # Parameter Resolver
//!
//! Turns a [`ResolvedScope`] into the typed [`OperationParameters`] of a
//! variant.
//!
//! Resolution never fails. A malformed optional value degrades to its
//! default, and the cases OpenSCAD warns about are reported to the sink.
//!
//! ## Rules
//!
//! | Parameter | Rule |
//! |-----------|------|
//! | `convexity` | number truncated toward zero, otherwise 0 |
//! | `path` | passed through unchanged |
//! | `level` | default 1, truncated, clamped to >= 0 |
//! | `type` | default `catmullclark`, case-insensitive scheme name |
//! | `newsize` | up to 3 numbers over `[0, 0, 0]` |
//! | `auto` | up to 3 flags over `[false, false, false]`, or `true` for all |

use crate::binder::ResolvedScope;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::node::{OperationParameters, SurfaceKind};
use crate::value::Value;
use crate::variant::OperationVariant;
use config::constants::{
    DEFAULT_RESIZE_AUTO, DEFAULT_RESIZE_NEWSIZE, DEFAULT_SUBDIV_LEVEL, DEFAULT_SUBDIV_TYPE,
    MIN_SUBDIV_LEVEL, RESIZE_AXES, UNDEFINED_CONVEXITY,
};
use glam::{BVec3, DVec3};

/// Resolves the parameters of `variant` from its bound arguments.
///
/// ## Example
///
/// ```rust
/// use openscad_advanced::binder::{bind, CallArgument};
/// use openscad_advanced::context::{Expression, ScopeContext};
/// use openscad_advanced::resolver::resolve;
/// use openscad_advanced::{OperationParameters, OperationVariant, SurfaceKind};
///
/// let mut ctx = ScopeContext::new();
/// let args = vec![CallArgument::named("type", Expression::literal("LOOP"))];
/// let scope = bind("subdiv", OperationVariant::Subdivision.signature(), &args, &mut ctx).unwrap();
/// let params = resolve(OperationVariant::Subdivision, &scope, &mut ctx);
/// assert_eq!(
///     params,
///     OperationParameters::Subdivision { convexity: 0, level: 1, kind: SurfaceKind::Loop }
/// );
/// ```
pub fn resolve<S>(variant: OperationVariant, scope: &ResolvedScope, sink: &mut S) -> OperationParameters
where
    S: DiagnosticSink + ?Sized,
{
    let parameters = match variant {
        OperationVariant::Minkowski => resolve_minkowski(scope),
        OperationVariant::Glide => resolve_glide(scope),
        OperationVariant::Subdivision => resolve_subdivision(scope, sink),
        OperationVariant::Hull => OperationParameters::Hull,
        OperationVariant::Resize => resolve_resize(scope),
    };
    tracing::debug!(operation = %parameters, "resolved advanced operation");
    parameters
}

fn resolve_minkowski(scope: &ResolvedScope) -> OperationParameters {
    OperationParameters::Minkowski {
        convexity: convexity(scope),
    }
}

fn resolve_glide(scope: &ResolvedScope) -> OperationParameters {
    OperationParameters::Glide {
        convexity: convexity(scope),
        path: scope.get("path").clone(),
    }
}

/// Accepts both `subdiv(1, "loop")` and `subdiv("loop", 1)`.
fn resolve_subdivision<S>(scope: &ResolvedScope, sink: &mut S) -> OperationParameters
where
    S: DiagnosticSink + ?Sized,
{
    let mut level = scope.get("level");
    let mut kind = scope.get("type");
    if level.is_string() && kind.is_number() {
        std::mem::swap(&mut level, &mut kind);
    }

    OperationParameters::Subdivision {
        convexity: convexity(scope),
        level: subdivision_level(level, sink),
        kind: surface_kind(kind, sink),
    }
}

fn subdivision_level<S>(value: &Value, sink: &mut S) -> u32
where
    S: DiagnosticSink + ?Sized,
{
    if value.is_undefined() {
        return DEFAULT_SUBDIV_LEVEL;
    }
    let level = value.to_double().trunc();
    if level < f64::from(MIN_SUBDIV_LEVEL) {
        sink.warn("Subdivision cannot be less than 0. Setting to 0.".to_string());
        return MIN_SUBDIV_LEVEL;
    }
    // `as` saturates at u32::MAX
    level as u32
}

fn surface_kind<S>(value: &Value, sink: &mut S) -> SurfaceKind
where
    S: DiagnosticSink + ?Sized,
{
    let name = if value.is_undefined() {
        DEFAULT_SUBDIV_TYPE.to_string()
    } else {
        value.to_text().to_lowercase()
    };
    SurfaceKind::from_name(&name).unwrap_or_else(|| {
        sink.report(
            Diagnostic::warning(format!("unknown subdivision type {}", name))
                .with_hint("expected catmullclark, loop, doosabin or sqrt3".to_string()),
        );
        sink.warn("setting to CatmullClark".to_string());
        SurfaceKind::CatmullClark
    })
}

fn resolve_resize(scope: &ResolvedScope) -> OperationParameters {
    let mut new_size = DVec3::from_array(DEFAULT_RESIZE_NEWSIZE);
    if let Some(items) = scope.get("newsize").as_vector() {
        for (axis, item) in items.iter().take(RESIZE_AXES).enumerate() {
            new_size[axis] = item.to_double();
        }
    }

    let mut auto_axes = DEFAULT_RESIZE_AUTO;
    match scope.get("auto") {
        Value::Vector(items) => {
            for (axis, item) in items.iter().take(RESIZE_AXES).enumerate() {
                auto_axes[axis] = item.to_bool();
            }
        }
        Value::Boolean(true) => auto_axes = [true; RESIZE_AXES],
        _ => {}
    }

    OperationParameters::Resize {
        new_size,
        auto_axes: BVec3::new(auto_axes[0], auto_axes[1], auto_axes[2]),
    }
}

/// Convexity is truncated, never clamped: negative input passes through.
fn convexity(scope: &ResolvedScope) -> i32 {
    let value = scope.get("convexity");
    if value.is_undefined() {
        return UNDEFINED_CONVEXITY;
    }
    value.to_double() as i32
}
