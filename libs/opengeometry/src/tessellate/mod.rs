//! # Tessellation
//!
//! Pure conversion of prepared primitive geometry into a [`Mesh`].
//!
//! Every strategy follows the same contract:
//!
//! - vertices are emitted in a fixed order for a given input
//! - triangles wind counter-clockwise seen from the side the normal points to
//! - normals are computed from edge cross products, one per vertex
//! - degenerate (zero-area) input yields zero-vector normals instead of NaN
//!
//! ## Strategies
//!
//! - **Quad**: two triangles `(0,1,2)`, `(0,2,3)` over four corners
//! - **Fan**: center vertex plus rim, triangles `(0, i, i+1)`
//! - **Faces**: independent quads with flat normals (cuboids)
//!
//! [`PreparedGeometry::outline`] extracts the same geometry as line segments.

mod fan;
mod outline;
mod quad;

use glam::DVec3;

use crate::error::GeometryResult;
use crate::mesh::{Mesh, MeshBuilder};

/// Tessellation-ready representation cached by a primitive after geometry
/// generation.
///
/// Building it validates nothing; it is only produced from a shape that
/// already passed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedGeometry {
    /// Four corners in counter-clockwise order.
    Quad([DVec3; 4]),
    /// Fan around `center`; `rim` holds consecutive boundary points.
    Fan {
        /// Shared apex of every triangle
        center: DVec3,
        /// Boundary points, in winding order
        rim: Vec<DVec3>,
        /// The rim spans a full turn; a sector otherwise
        closed: bool,
    },
    /// Independent planar quads, each with its own flat normal.
    Faces(Vec<[DVec3; 4]>),
}

impl PreparedGeometry {
    /// Runs the matching tessellation strategy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use opengeometry::tessellate::PreparedGeometry;
    ///
    /// let quad = PreparedGeometry::Quad([
    ///     DVec3::new(0.0, 0.0, 0.0),
    ///     DVec3::new(1.0, 0.0, 0.0),
    ///     DVec3::new(1.0, 1.0, 0.0),
    ///     DVec3::new(0.0, 1.0, 0.0),
    /// ]);
    /// let mesh = quad.tessellate().unwrap();
    /// assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
    /// ```
    pub fn tessellate(&self) -> GeometryResult<Mesh> {
        let mesh = match self {
            PreparedGeometry::Quad(corners) => {
                let mut builder = MeshBuilder::with_capacity(4, 2);
                quad::append_quad(&mut builder, corners);
                builder.build()?
            }
            PreparedGeometry::Fan { center, rim, .. } => fan::tessellate_fan(*center, rim)?,
            PreparedGeometry::Faces(faces) => {
                let mut builder = MeshBuilder::with_capacity(faces.len() * 4, faces.len() * 2);
                for corners in faces {
                    quad::append_quad(&mut builder, corners);
                }
                builder.build()?
            }
        };

        log::trace!(
            "tessellated {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Edges of the geometry as line segments, for line rendering.
    ///
    /// Quads give their four sides, fans their rim arc (plus both radii for a
    /// sector) and face sets every distinct edge once. Zero-length segments
    /// are dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use opengeometry::tessellate::PreparedGeometry;
    ///
    /// let quad = PreparedGeometry::Quad([DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y]);
    /// let edges = quad.outline();
    /// assert_eq!(edges.len(), 4);
    /// assert_eq!(edges[3], [DVec3::Y, DVec3::ZERO]);
    /// ```
    pub fn outline(&self) -> Vec<[DVec3; 2]> {
        match self {
            PreparedGeometry::Quad(corners) => outline::closed_loop(corners),
            PreparedGeometry::Fan {
                center,
                rim,
                closed,
            } => outline::fan_outline(*center, rim, *closed),
            PreparedGeometry::Faces(faces) => outline::face_edges(faces),
        }
    }
}

/// Normalized cross product of two edges sharing a vertex.
///
/// Collinear or zero-length edges give `DVec3::ZERO`.
pub fn face_normal(first_edge: DVec3, second_edge: DVec3) -> DVec3 {
    first_edge.cross(second_edge).normalize_or_zero()
}

#[cfg(test)]
mod tests;
