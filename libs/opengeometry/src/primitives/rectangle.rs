//! # Rectangle Primitive
//!
//! Axis-aligned rectangle centered on a point, lying in the XY plane.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{ensure_extent, ensure_finite_point, ensure_point_in_range, ensure_reach_in_range};
use crate::error::GeometryResult;

/// Rectangle of `width` along X and `height` along Y.
///
/// Zero extents are allowed and produce a zero-area rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Center of the rectangle
    pub center: DVec3,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle description. Validation happens when it is
    /// applied to a primitive.
    pub fn new(center: DVec3, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Checks the center is finite and both extents are finite and `>= 0`,
    /// and that every corner fits in `f32`.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite_point("center", self.center)?;
        ensure_extent("width", self.width)?;
        ensure_extent("height", self.height)?;

        let c = self.center;
        ensure_point_in_range("center", c)?;
        ensure_reach_in_range("width", self.width, c.x, self.width / 2.0)?;
        ensure_reach_in_range("height", self.height, c.y, self.height / 2.0)
    }

    /// Returns the four corners in counter-clockwise order seen from +Z,
    /// starting at the (−X, −Y) corner.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use opengeometry::primitives::Rectangle;
    ///
    /// let corners = Rectangle::new(DVec3::ZERO, 2.0, 4.0).corners();
    /// assert_eq!(corners[0], DVec3::new(-1.0, -2.0, 0.0));
    /// assert_eq!(corners[2], DVec3::new(1.0, 2.0, 0.0));
    /// ```
    pub fn corners(&self) -> [DVec3; 4] {
        let half_width = self.width / 2.0;
        let half_height = self.height / 2.0;
        let c = self.center;

        [
            DVec3::new(c.x - half_width, c.y - half_height, c.z),
            DVec3::new(c.x + half_width, c.y - half_height, c.z),
            DVec3::new(c.x + half_width, c.y + half_height, c.z),
            DVec3::new(c.x - half_width, c.y + half_height, c.z),
        ]
    }
}
