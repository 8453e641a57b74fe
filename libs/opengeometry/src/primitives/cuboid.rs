//! # Cuboid Primitive
//!
//! Axis-aligned box centered on a point.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{ensure_extent, ensure_finite_point, ensure_point_in_range, ensure_reach_in_range};
use crate::error::GeometryResult;

/// Box of `width` along X, `height` along Y and `depth` along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Center of the box
    pub center: DVec3,
    /// Extent along X
    pub width: f64,
    /// Extent along Y
    pub height: f64,
    /// Extent along Z
    pub depth: f64,
}

impl Cuboid {
    /// Creates a cuboid description.
    pub fn new(center: DVec3, width: f64, height: f64, depth: f64) -> Self {
        Self {
            center,
            width,
            height,
            depth,
        }
    }

    /// Checks the center is finite, every extent is finite and `>= 0`, and
    /// every corner fits in `f32`.
    pub fn validate(&self) -> GeometryResult<()> {
        ensure_finite_point("center", self.center)?;
        ensure_extent("width", self.width)?;
        ensure_extent("height", self.height)?;
        ensure_extent("depth", self.depth)?;

        let c = self.center;
        ensure_point_in_range("center", c)?;
        ensure_reach_in_range("width", self.width, c.x, self.width / 2.0)?;
        ensure_reach_in_range("height", self.height, c.y, self.height / 2.0)?;
        ensure_reach_in_range("depth", self.depth, c.z, self.depth / 2.0)
    }

    /// Returns the six faces as corner quads in the order −Z, +Z, −Y, +Y,
    /// −X, +X.
    ///
    /// Corners run counter-clockwise seen from outside the box, so each
    /// face's edge cross product points outward.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use opengeometry::primitives::Cuboid;
    ///
    /// let faces = Cuboid::new(DVec3::ZERO, 2.0, 2.0, 2.0).faces();
    /// assert_eq!(faces.len(), 6);
    /// assert!(faces[1].iter().all(|c| c.z == 1.0)); // top face
    /// ```
    pub fn faces(&self) -> [[DVec3; 4]; 6] {
        let half = DVec3::new(self.width, self.height, self.depth) / 2.0;
        let min = self.center - half;
        let max = self.center + half;

        let v0 = DVec3::new(min.x, min.y, min.z); // left-front-bottom
        let v1 = DVec3::new(max.x, min.y, min.z); // right-front-bottom
        let v2 = DVec3::new(max.x, max.y, min.z); // right-back-bottom
        let v3 = DVec3::new(min.x, max.y, min.z); // left-back-bottom
        let v4 = DVec3::new(min.x, min.y, max.z); // left-front-top
        let v5 = DVec3::new(max.x, min.y, max.z); // right-front-top
        let v6 = DVec3::new(max.x, max.y, max.z); // right-back-top
        let v7 = DVec3::new(min.x, max.y, max.z); // left-back-top

        [
            [v0, v3, v2, v1], // bottom (−Z), seen from below
            [v4, v5, v6, v7], // top (+Z)
            [v0, v1, v5, v4], // front (−Y)
            [v3, v7, v6, v2], // back (+Y)
            [v0, v4, v7, v3], // left (−X)
            [v1, v2, v6, v5], // right (+X)
        ]
    }
}
