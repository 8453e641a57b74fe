//! Centralized configuration values shared across the OpenGeometry engine.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry validation.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// One full revolution in radians.
///
/// Upper bound for the angular span of circle sectors.
///
/// # Examples
/// ```
/// use config::constants::FULL_TURN;
/// assert!((FULL_TURN - 2.0 * std::f64::consts::PI).abs() < 1.0e-12);
/// ```
pub const FULL_TURN: f64 = std::f64::consts::TAU;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default tessellation segment count for primitives that require angular
/// resolution such as circles.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SEGMENTS;
/// assert!(DEFAULT_SEGMENTS >= 12);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Smallest segment count a circular primitive accepts.
///
/// # Examples
/// ```
/// use config::constants::{MIN_SEGMENTS, DEFAULT_SEGMENTS};
/// assert!(MIN_SEGMENTS <= DEFAULT_SEGMENTS);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Largest segment count a circular primitive accepts.
///
/// Keeps a single disc well below `u32` index overflow.
///
/// # Examples
/// ```
/// use config::constants::{MAX_SEGMENTS, DEFAULT_SEGMENTS};
/// assert!(MAX_SEGMENTS >= DEFAULT_SEGMENTS);
/// ```
pub const MAX_SEGMENTS: u32 = 65_536;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into geometry validation.
    pub tolerance: f64,
    /// Segment count used when a circular primitive requests the default.
    pub default_segments: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default segments.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.default_segments, 24);
    /// ```
    pub fn new(tolerance: f64, default_segments: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&default_segments) {
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        Ok(Self {
            tolerance,
            default_segments,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_segments: DEFAULT_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    #[error("tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),
    /// Raised when the requested segment count is outside the accepted range.
    #[error("default_segments must be within {MIN_SEGMENTS}..={MAX_SEGMENTS}: {0}")]
    InvalidSegments(u32),
}
