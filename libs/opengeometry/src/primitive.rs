//! # Primitive Lifecycle
//!
//! A [`Primitive`] moves through three states:
//!
//! ```text
//! Unconfigured ──set_*──▶ Configured ──generate_geometry──▶ GeometryGenerated
//!                            ▲                                      │
//!                            └───────────────set_*──────────────────┘
//! ```
//!
//! Reconfiguring always drops the cached geometry, so [`Primitive::to_mesh`]
//! can only ever tessellate geometry that matches the current configuration.

use glam::DVec3;

use crate::config::GeometryConfig;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use crate::primitives::{Circle, Cuboid, Rectangle, Shape};
use crate::tessellate::PreparedGeometry;

/// Where a primitive is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveState {
    /// Created, no configuration applied yet.
    Unconfigured,
    /// Holds a validated configuration, no geometry.
    Configured,
    /// Geometry has been generated for the current configuration.
    GeometryGenerated,
}

/// A parametric shape awaiting tessellation.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use opengeometry::Primitive;
///
/// let mut rect = Primitive::new("r1");
/// rect.set_rectangle(DVec3::ZERO, 2.0, 4.0).unwrap();
/// rect.generate_geometry().unwrap();
/// let mesh = rect.to_mesh().unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Primitive {
    id: String,
    config: GeometryConfig,
    shape: Option<Shape>,
    prepared: Option<PreparedGeometry>,
}

impl Primitive {
    /// Creates an unconfigured primitive with the default engine config.
    ///
    /// The identity is for diagnostics only; it need not be unique.
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_config(id, GeometryConfig::default())
    }

    /// Creates an unconfigured primitive with an explicit engine config.
    pub fn with_config(id: impl Into<String>, config: GeometryConfig) -> Self {
        let id = id.into();
        log::debug!("primitive '{id}' created");
        Self {
            id,
            config,
            shape: None,
            prepared: None,
        }
    }

    /// Diagnostic identity supplied at creation.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Engine configuration this primitive validates against.
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Current configuration, if any.
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Geometry cached by the last successful [`Primitive::generate_geometry`].
    pub fn prepared(&self) -> Option<&PreparedGeometry> {
        self.prepared.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PrimitiveState {
        match (&self.shape, &self.prepared) {
            (None, _) => PrimitiveState::Unconfigured,
            (Some(_), None) => PrimitiveState::Configured,
            (Some(_), Some(_)) => PrimitiveState::GeometryGenerated,
        }
    }

    /// Applies a configuration of any kind.
    ///
    /// On success the primitive is `Configured` and any generated geometry
    /// is discarded. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if the shape does not
    /// validate.
    pub fn set_shape(&mut self, shape: impl Into<Shape>) -> GeometryResult<()> {
        let shape = shape.into();
        if let Err(err) = shape.validate(&self.config) {
            log::warn!("primitive '{}': rejected {} configuration: {err}", self.id, shape.kind_name());
            return Err(err);
        }

        log::debug!("primitive '{}' configured as {}", self.id, shape.kind_name());
        self.shape = Some(shape);
        self.prepared = None;
        Ok(())
    }

    /// Configures the primitive as a rectangle in the XY plane.
    pub fn set_rectangle(&mut self, center: DVec3, width: f64, height: f64) -> GeometryResult<()> {
        self.set_shape(Rectangle::new(center, width, height))
    }

    /// Configures the primitive as a disc sector in the XY plane.
    ///
    /// `segments == 0` selects the configured default.
    pub fn set_circle(
        &mut self,
        center: DVec3,
        radius: f64,
        segments: u32,
        start_angle: f64,
        end_angle: f64,
    ) -> GeometryResult<()> {
        self.set_shape(
            Circle::new(center, radius)
                .with_segments(segments)
                .with_sector(start_angle, end_angle),
        )
    }

    /// Configures the primitive as an axis-aligned box.
    pub fn set_cuboid(
        &mut self,
        center: DVec3,
        width: f64,
        height: f64,
        depth: f64,
    ) -> GeometryResult<()> {
        self.set_shape(Cuboid::new(center, width, height, depth))
    }

    /// Computes and caches the tessellation-ready geometry.
    ///
    /// Calling it again without reconfiguring produces identical geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotConfigured`] if no configuration was
    /// applied; the primitive is left untouched.
    pub fn generate_geometry(&mut self) -> GeometryResult<()> {
        let shape = self.shape.as_ref().ok_or(GeometryError::NotConfigured)?;
        self.prepared = Some(shape.prepare(&self.config));
        log::debug!("primitive '{}' generated {} geometry", self.id, shape.kind_name());
        Ok(())
    }

    /// Tessellates the generated geometry into a new, independent mesh.
    ///
    /// Reads cached data only; the primitive is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::GeometryNotGenerated`] unless the primitive
    /// is in the `GeometryGenerated` state.
    pub fn to_mesh(&self) -> GeometryResult<Mesh> {
        let prepared = self
            .prepared
            .as_ref()
            .ok_or(GeometryError::GeometryNotGenerated)?;
        let mesh = prepared.tessellate()?;
        log::debug!(
            "primitive '{}' converted to mesh ({} vertices, {} triangles)",
            self.id,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Edges of the generated geometry as line segments.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::GeometryNotGenerated`] unless the primitive
    /// is in the `GeometryGenerated` state.
    pub fn outline(&self) -> GeometryResult<Vec<[DVec3; 2]>> {
        self.prepared
            .as_ref()
            .map(PreparedGeometry::outline)
            .ok_or(GeometryError::GeometryNotGenerated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn generated_rectangle(width: f64, height: f64) -> Primitive {
        let mut rect = Primitive::new("r1");
        rect.set_rectangle(DVec3::ZERO, width, height).unwrap();
        rect.generate_geometry().unwrap();
        rect
    }

    #[test]
    fn test_new_primitive_is_unconfigured() {
        let prim = Primitive::new("r1");
        assert_eq!(prim.id(), "r1");
        assert_eq!(prim.state(), PrimitiveState::Unconfigured);
        assert!(prim.shape().is_none());
    }

    #[test]
    fn test_state_transitions() {
        init_logging();
        let mut prim = Primitive::new("r1");
        prim.set_rectangle(DVec3::ZERO, 1.0, 1.0).unwrap();
        assert_eq!(prim.state(), PrimitiveState::Configured);
        prim.generate_geometry().unwrap();
        assert_eq!(prim.state(), PrimitiveState::GeometryGenerated);
        prim.set_rectangle(DVec3::ZERO, 3.0, 1.0).unwrap();
        assert_eq!(prim.state(), PrimitiveState::Configured);
        assert!(prim.prepared().is_none());
    }

    #[test]
    fn test_generate_requires_configuration() {
        let mut prim = Primitive::new("r1");
        assert_eq!(prim.generate_geometry(), Err(GeometryError::NotConfigured));
        assert_eq!(prim.state(), PrimitiveState::Unconfigured);
    }

    #[test]
    fn test_to_mesh_requires_generation() {
        let mut prim = Primitive::new("r1");
        assert_eq!(prim.to_mesh(), Err(GeometryError::GeometryNotGenerated));
        prim.set_rectangle(DVec3::ZERO, 1.0, 1.0).unwrap();
        assert_eq!(prim.to_mesh(), Err(GeometryError::GeometryNotGenerated));
    }

    #[test]
    fn test_reconfigure_invalidates_generated_geometry() {
        let mut prim = generated_rectangle(2.0, 4.0);
        prim.set_rectangle(DVec3::ZERO, 5.0, 5.0).unwrap();
        assert_eq!(prim.to_mesh(), Err(GeometryError::GeometryNotGenerated));

        prim.generate_geometry().unwrap();
        let (min, max) = prim.to_mesh().unwrap().bounding_box();
        assert_eq!(min, Vec3::new(-2.5, -2.5, 0.0));
        assert_eq!(max, Vec3::new(2.5, 2.5, 0.0));
    }

    #[test]
    fn test_invalid_configuration_leaves_state_unchanged() {
        init_logging();
        let mut prim = generated_rectangle(2.0, 4.0);
        let before = prim.to_mesh().unwrap();

        let err = prim.set_rectangle(DVec3::ZERO, -1.0, 4.0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { parameter: "width", .. }));
        assert_eq!(prim.state(), PrimitiveState::GeometryGenerated);
        assert_eq!(prim.to_mesh().unwrap(), before);
    }

    #[test]
    fn test_invalid_first_configuration_stays_unconfigured() {
        let mut prim = Primitive::new("r1");
        assert!(prim.set_rectangle(DVec3::new(f64::NAN, 0.0, 0.0), 1.0, 1.0).is_err());
        assert_eq!(prim.state(), PrimitiveState::Unconfigured);
    }

    #[test]
    fn test_extent_beyond_single_precision_is_rejected() {
        init_logging();
        let mut prim = Primitive::new("huge");
        let err = prim.set_rectangle(DVec3::ZERO, 1.0e39, 1.0).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { parameter: "width", .. }));
        assert_eq!(prim.state(), PrimitiveState::Unconfigured);

        let err = prim.set_cuboid(DVec3::new(0.0, 0.0, 3.0e38), 1.0, 1.0, 1.0e38).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameter { parameter: "depth", .. }));
        let err = prim.set_circle(DVec3::new(f64::from(f32::MAX), 0.0, 0.0), 1.0e33, 0, 0.0, 1.0);
        assert!(matches!(err, Err(GeometryError::InvalidParameter { parameter: "radius", .. })));
    }

    /// Accepted input always exports finite buffers, even at the edge of the
    /// single-precision range.
    #[test]
    fn test_largest_accepted_extent_exports_finite_buffers() {
        let width = 2.0 * f64::from(f32::MAX);
        let mut prim = Primitive::new("edge");
        prim.set_rectangle(DVec3::ZERO, width, 1.0).unwrap();
        prim.generate_geometry().unwrap();
        let mesh = prim.to_mesh().unwrap();
        assert!(mesh.vertices().iter().all(|v| v.is_finite()));
        assert_eq!(mesh.position(1).x, f32::MAX);
    }

    #[test]
    fn test_generate_geometry_is_idempotent() {
        let mut once = generated_rectangle(2.0, 4.0);
        let mut twice = generated_rectangle(2.0, 4.0);
        twice.generate_geometry().unwrap();
        assert_eq!(once.prepared(), twice.prepared());

        let a = once.to_mesh().unwrap();
        let b = twice.to_mesh().unwrap();
        let bits = |m: &Mesh| m.vertices().iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(a.indices(), b.indices());
        once.generate_geometry().unwrap();
        assert_eq!(once.to_mesh().unwrap(), a);
    }

    #[test]
    fn test_reference_rectangle_mesh() {
        let mesh = generated_rectangle(2.0, 4.0).to_mesh().unwrap();
        assert_eq!(
            mesh.vertices(),
            &[-1.0f32, -2.0, 0.0, 1.0, -2.0, 0.0, 1.0, 2.0, 0.0, -1.0, 2.0, 0.0]
        );
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.normals(), &[0.0f32, 0.0, 1.0].repeat(4)[..]);
    }

    #[test]
    fn test_degenerate_rectangle_mesh() {
        let mesh = generated_rectangle(0.0, 5.0).to_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.normals().iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_rectangle_counts_for_many_sizes() {
        for &(w, h) in &[(0.0, 0.0), (1.0, 0.0), (0.5, 3.0), (1.0e6, 2.0e-6), (7.0, 7.0)] {
            let mesh = generated_rectangle(w, h).to_mesh().unwrap();
            assert_eq!(mesh.vertex_count(), 4);
            assert_eq!(mesh.indices().len(), 6);
            assert!(mesh.indices().iter().all(|&i| i < 4));
            assert_eq!(mesh.normals().len(), mesh.vertices().len());
        }
    }

    #[test]
    fn test_mesh_outlives_primitive() {
        let prim = generated_rectangle(2.0, 4.0);
        let mesh = prim.to_mesh().unwrap();
        drop(prim);
        assert_eq!(mesh.position(2), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_reconfigure_to_another_kind() {
        let mut prim = generated_rectangle(2.0, 4.0);
        prim.set_cuboid(DVec3::ZERO, 1.0, 1.0, 1.0).unwrap();
        prim.generate_geometry().unwrap();
        assert_eq!(prim.to_mesh().unwrap().vertex_count(), 24);
        assert_eq!(prim.shape().map(Shape::kind_name), Some("cuboid"));
    }

    #[test]
    fn test_circle_uses_configured_default_segments() {
        let config = GeometryConfig::new(1.0e-9, 8).unwrap();
        let mut prim = Primitive::with_config("c1", config);
        prim.set_circle(DVec3::ZERO, 1.0, 0, 0.0, std::f64::consts::TAU).unwrap();
        prim.generate_geometry().unwrap();
        let mesh = prim.to_mesh().unwrap();
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertex_count(), 10);
    }

    #[test]
    fn test_outline_follows_lifecycle() {
        let mut prim = Primitive::new("r1");
        assert_eq!(prim.outline(), Err(GeometryError::GeometryNotGenerated));

        prim.set_rectangle(DVec3::ZERO, 2.0, 4.0).unwrap();
        assert_eq!(prim.outline(), Err(GeometryError::GeometryNotGenerated));
        prim.generate_geometry().unwrap();
        let edges = prim.outline().unwrap();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], [DVec3::new(-1.0, -2.0, 0.0), DVec3::new(1.0, -2.0, 0.0)]);

        prim.set_cuboid(DVec3::ZERO, 1.0, 1.0, 1.0).unwrap();
        prim.generate_geometry().unwrap();
        assert_eq!(prim.outline().unwrap().len(), 12);
    }

    #[test]
    fn test_primitive_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Primitive>();
    }
}
