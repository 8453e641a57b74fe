//! # Geometry Errors
//!
//! Error types for primitive configuration, geometry generation and mesh
//! construction.
//!
//! ## Error Policy
//!
//! - Invalid input is rejected, never clamped
//! - A failed call leaves the primitive exactly as it was
//! - Every variant maps to one status code at the C boundary

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while configuring a primitive or building a mesh.
///
/// ## Example
///
/// ```rust
/// use opengeometry::{GeometryError, Primitive};
///
/// let mut rect = Primitive::new("r1");
/// match rect.generate_geometry() {
///     Err(GeometryError::NotConfigured) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A numeric parameter is non-finite or outside its domain.
    #[error("Invalid parameter '{parameter}' ({value}): {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Rejected value
        value: f64,
        /// Which rule the value broke
        reason: &'static str,
    },

    /// Geometry generation was requested before any configuration.
    #[error("Primitive has not been configured")]
    NotConfigured,

    /// Mesh conversion was requested before geometry generation, or after a
    /// reconfiguration discarded the generated geometry.
    #[error("Geometry has not been generated for the current configuration")]
    GeometryNotGenerated,

    /// Raw buffers violate the mesh invariants.
    #[error("Invalid mesh: {message}")]
    InvalidMesh {
        /// Which invariant failed
        message: String,
    },
}

impl GeometryError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value,
            reason,
        }
    }

    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::invalid_parameter("width", -1.0, "must be non-negative");
        let text = err.to_string();
        assert!(text.contains("width"));
        assert!(text.contains("-1"));
        assert!(text.contains("non-negative"));

        let err = GeometryError::invalid_mesh("index 7 out of range");
        assert!(err.to_string().contains("index 7"));
    }

    /// Errors cross thread boundaries together with the handles they describe.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeometryError>();
    }
}
