//! # Circle Primitive
//!
//! Disc, or disc sector, in the XY plane around a center point.

use config::constants::{FULL_TURN, MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::{
    ensure_extent, ensure_finite, ensure_finite_point, ensure_point_in_range, ensure_reach_in_range,
};
use crate::config::GeometryConfig;
use crate::error::{GeometryError, GeometryResult};
use crate::tessellate::PreparedGeometry;

fn default_end_angle() -> f64 {
    FULL_TURN
}

/// Disc sector from `start_angle` to `end_angle` (radians, measured from +X
/// towards +Y), split into `segments` fan slices.
///
/// `segments == 0` selects [`GeometryConfig::default_segments`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the disc
    pub center: DVec3,
    /// Radius; zero yields a degenerate disc
    pub radius: f64,
    /// Number of fan slices, or 0 for the configured default
    #[serde(default)]
    pub segments: u32,
    /// Start of the sector in radians
    #[serde(default)]
    pub start_angle: f64,
    /// End of the sector in radians
    #[serde(default = "default_end_angle")]
    pub end_angle: f64,
}

impl Circle {
    /// Creates a full disc with the default segment count.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius,
            segments: 0,
            start_angle: 0.0,
            end_angle: FULL_TURN,
        }
    }

    /// Sets the number of fan slices.
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Restricts the disc to the sector between two angles.
    pub fn with_sector(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    /// Checks center, radius, angular span and segment count.
    ///
    /// The span must be positive and at most one full turn (within
    /// `config.tolerance`).
    pub fn validate(&self, config: &GeometryConfig) -> GeometryResult<()> {
        ensure_finite_point("center", self.center)?;
        ensure_extent("radius", self.radius)?;
        ensure_point_in_range("center", self.center)?;
        let widest = self.center.x.abs().max(self.center.y.abs());
        ensure_reach_in_range("radius", self.radius, widest, self.radius)?;
        ensure_finite("start_angle", self.start_angle)?;
        ensure_finite("end_angle", self.end_angle)?;

        let span = self.end_angle - self.start_angle;
        if span <= 0.0 {
            return Err(GeometryError::invalid_parameter(
                "end_angle",
                self.end_angle,
                "must be greater than start_angle",
            ));
        }
        if span > FULL_TURN + config.tolerance {
            return Err(GeometryError::invalid_parameter(
                "end_angle",
                self.end_angle,
                "sector must not exceed a full turn",
            ));
        }

        if self.segments != 0 && !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.segments) {
            return Err(GeometryError::invalid_parameter(
                "segments",
                f64::from(self.segments),
                "must be 0 (default) or within the supported segment range",
            ));
        }
        Ok(())
    }

    /// Segment count after substituting the configured default for 0.
    pub fn resolved_segments(&self, config: &GeometryConfig) -> u32 {
        if self.segments == 0 {
            config.default_segments
        } else {
            self.segments
        }
    }

    /// Center plus `segments + 1` rim points; the last rim point closes the
    /// sector. A span within tolerance of a full turn marks the fan closed.
    pub(crate) fn fan(&self, config: &GeometryConfig) -> PreparedGeometry {
        let segments = self.resolved_segments(config);
        let step = (self.end_angle - self.start_angle) / f64::from(segments);

        let rim = (0..=segments)
            .map(|i| {
                let angle = self.start_angle + step * f64::from(i);
                self.center + DVec3::new(angle.cos(), angle.sin(), 0.0) * self.radius
            })
            .collect();

        PreparedGeometry::Fan {
            center: self.center,
            rim,
            closed: self.end_angle - self.start_angle >= FULL_TURN - config.tolerance,
        }
    }
}
