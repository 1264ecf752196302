//! # Config Crate
//!
//! Centralized configuration constants for the advanced OpenSCAD operations.
//! All defaults applied during argument resolution are defined here so the
//! resolvers and their tests agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SUBDIV_LEVEL, DEFAULT_SUBDIV_TYPE};
//!
//! let level: Option<u32> = None;
//! assert_eq!(level.unwrap_or(DEFAULT_SUBDIV_LEVEL), 1);
//! assert_eq!(DEFAULT_SUBDIV_TYPE, "catmullclark");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **OpenSCAD Compatible**: Defaults match OpenSCAD behavior

pub mod constants;
