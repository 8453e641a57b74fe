//! # Config Crate
//!
//! Centralized configuration constants for the OpenGeometry engine.
//! All magic numbers and tunable parameters are defined here so the
//! tessellators, the C boundary and the WASM boundary agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GlobalConfig, DEFAULT_SEGMENTS, EPSILON_TOLERANCE};
//!
//! let cfg = GlobalConfig::default();
//! assert_eq!(cfg.default_segments, DEFAULT_SEGMENTS);
//! assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Boundary-Safe**: No platform-specific values
//! - **Validated**: Runtime configuration is checked on construction

pub mod constants;

#[cfg(test)]
mod tests;
