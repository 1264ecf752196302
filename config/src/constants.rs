//! # Configuration Constants
//!
//! Centralized constants for the advanced operation builtins (`minkowski`,
//! `glide`, `subdiv`, `hull`, `resize`). Every default a resolver falls back
//! to is defined here.
//!
//! ## Categories
//!
//! - **Convexity**: Value used when a call site leaves convexity unset
//! - **Subdivision**: Level bounds and the default surface scheme
//! - **Resize**: Axis count and per-axis defaults

// =============================================================================
// CONVEXITY CONSTANTS
// =============================================================================

/// Convexity recorded when the call site supplies no numeric value.
///
/// Non-numeric values coerce to zero before truncation, so an unset
/// convexity ends up here as well.
///
/// # Example
///
/// ```rust
/// use config::constants::UNDEFINED_CONVEXITY;
///
/// let user_convexity: Option<i32> = None;
/// assert_eq!(user_convexity.unwrap_or(UNDEFINED_CONVEXITY), 0);
/// ```
pub const UNDEFINED_CONVEXITY: i32 = 0;

// =============================================================================
// SUBDIVISION CONSTANTS
// =============================================================================

/// Subdivision level used when `level` is not given.
pub const DEFAULT_SUBDIV_LEVEL: u32 = 1;

/// Lowest accepted subdivision level.
///
/// Negative levels are clamped to this value with a warning.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_SUBDIV_LEVEL;
///
/// let requested: i64 = -5;
/// let level = requested.max(MIN_SUBDIV_LEVEL as i64);
/// assert_eq!(level, 0);
/// ```
pub const MIN_SUBDIV_LEVEL: u32 = 0;

/// Subdivision scheme name used when `type` is not given.
pub const DEFAULT_SUBDIV_TYPE: &str = "catmullclark";

// =============================================================================
// RESIZE CONSTANTS
// =============================================================================

/// Number of axes a resize vector carries.
pub const RESIZE_AXES: usize = 3;

/// Target size used when `newsize` is not given.
///
/// Zero on an axis means "leave this axis alone" to the geometry evaluator.
pub const DEFAULT_RESIZE_NEWSIZE: [f64; RESIZE_AXES] = [0.0, 0.0, 0.0];

/// Per-axis auto-scaling flags used when `auto` is not given.
pub const DEFAULT_RESIZE_AUTO: [bool; RESIZE_AXES] = [false, false, false];
