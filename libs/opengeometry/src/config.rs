//! Engine-level configuration building on the shared `config` crate.
//!
//! Primitives carry a copy of this so validation and circle resolution never
//! reach for global state.

use config::constants::{ConfigError, GlobalConfig};

/// Geometry engine configuration wrapper.
///
/// # Examples
/// ```
/// use opengeometry::config::GeometryConfig;
/// let cfg = GeometryConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Tolerance for angular span checks.
    pub tolerance: f64,
    /// Segment count used when a circle is configured with `segments == 0`.
    pub default_segments: u32,
}

impl GeometryConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use opengeometry::config::GeometryConfig;
    /// let cfg = GeometryConfig::new(1.0e-8, 48).unwrap();
    /// assert_eq!(cfg.default_segments, 48);
    /// assert!(GeometryConfig::new(1.0e-8, 1).is_err());
    /// ```
    pub fn new(tolerance: f64, default_segments: u32) -> Result<Self, ConfigError> {
        GlobalConfig::new(tolerance, default_segments).map(Self::from)
    }
}

impl From<GlobalConfig> for GeometryConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            default_segments: cfg.default_segments,
        }
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GlobalConfig::default().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{DEFAULT_SEGMENTS, EPSILON_TOLERANCE};

    #[test]
    fn default_matches_global_constants() {
        let cfg = GeometryConfig::default();
        assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
        assert_eq!(cfg.default_segments, DEFAULT_SEGMENTS);
    }

    #[test]
    fn new_forwards_validation_errors() {
        assert_eq!(
            GeometryConfig::new(-1.0, 16).unwrap_err(),
            ConfigError::InvalidTolerance(-1.0)
        );
    }
}
