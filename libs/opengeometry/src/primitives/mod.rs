//! # Primitives
//!
//! Parametric shape descriptions (rectangle, circle, cuboid) and the closed
//! [`Shape`] variant that carries whichever one a primitive is configured as.
//!
//! Each kind validates its own parameters and knows how to lay out its
//! tessellation-ready [`PreparedGeometry`]; the tessellators never see the
//! raw parameters.

pub mod circle;
pub mod cuboid;
pub mod rectangle;

pub use circle::Circle;
pub use cuboid::Cuboid;
pub use rectangle::Rectangle;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::error::{GeometryError, GeometryResult};
use crate::tessellate::PreparedGeometry;

/// Configuration of a primitive, tagged by kind.
///
/// Serializes as `{"kind": "rectangle", "center": [..], ...}`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use opengeometry::primitives::{Rectangle, Shape};
///
/// let shape = Shape::Rectangle(Rectangle::new(DVec3::ZERO, 2.0, 4.0));
/// assert_eq!(shape.kind_name(), "rectangle");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle in the XY plane.
    Rectangle(Rectangle),
    /// Disc or disc sector in the XY plane.
    Circle(Circle),
    /// Axis-aligned box.
    Cuboid(Cuboid),
}

impl Shape {
    /// Returns the lowercase kind name used in logs and JSON.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Cuboid(_) => "cuboid",
        }
    }

    /// Checks every parameter of the shape.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] naming the first
    /// offending parameter.
    pub fn validate(&self, config: &GeometryConfig) -> GeometryResult<()> {
        match self {
            Shape::Rectangle(rect) => rect.validate(),
            Shape::Circle(circle) => circle.validate(config),
            Shape::Cuboid(cuboid) => cuboid.validate(),
        }
    }

    /// Lays out the tessellation-ready representation of a validated shape.
    pub(crate) fn prepare(&self, config: &GeometryConfig) -> PreparedGeometry {
        match self {
            Shape::Rectangle(rect) => PreparedGeometry::Quad(rect.corners()),
            Shape::Circle(circle) => circle.fan(config),
            Shape::Cuboid(cuboid) => PreparedGeometry::Faces(cuboid.faces().to_vec()),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Cuboid> for Shape {
    fn from(cuboid: Cuboid) -> Self {
        Shape::Cuboid(cuboid)
    }
}

// =============================================================================
// VALIDATION HELPERS
// =============================================================================

pub(crate) fn ensure_finite_point(parameter: &'static str, point: DVec3) -> GeometryResult<()> {
    match point.to_array().into_iter().find(|c| !c.is_finite()) {
        Some(bad) => Err(GeometryError::invalid_parameter(
            parameter,
            bad,
            "coordinates must be finite",
        )),
        None => Ok(()),
    }
}

pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> GeometryResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::invalid_parameter(parameter, value, "must be finite"))
    }
}

/// Extents may be zero (degenerate geometry) but never negative.
pub(crate) fn ensure_extent(parameter: &'static str, value: f64) -> GeometryResult<()> {
    ensure_finite(parameter, value)?;
    if value < 0.0 {
        return Err(GeometryError::invalid_parameter(
            parameter,
            value,
            "must be non-negative",
        ));
    }
    Ok(())
}

/// Largest coordinate magnitude that survives narrowing to `f32`.
pub(crate) const MAX_COORDINATE: f64 = f32::MAX as f64;

/// Rejects a point with any component outside the `f32` range.
pub(crate) fn ensure_point_in_range(parameter: &'static str, point: DVec3) -> GeometryResult<()> {
    match point.to_array().into_iter().find(|c| c.abs() > MAX_COORDINATE) {
        Some(bad) => Err(GeometryError::invalid_parameter(
            parameter,
            bad,
            "coordinates must fit in single precision",
        )),
        None => Ok(()),
    }
}

/// Rejects an extent whose generated coordinates (`|center| + reach`) leave
/// the `f32` range.
pub(crate) fn ensure_reach_in_range(
    parameter: &'static str,
    value: f64,
    center: f64,
    reach: f64,
) -> GeometryResult<()> {
    if center.abs() + reach > MAX_COORDINATE {
        return Err(GeometryError::invalid_parameter(
            parameter,
            value,
            "generated coordinates must fit in single precision",
        ));
    }
    Ok(())
}
