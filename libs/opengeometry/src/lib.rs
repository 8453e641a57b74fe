//! # OpenGeometry
//!
//! Deterministic tessellation of parametric primitives into GPU-ready
//! triangle meshes.
//!
//! ## Architecture
//!
//! ```text
//! Primitive ──set_*──▶ Shape ──generate_geometry──▶ PreparedGeometry ──to_mesh──▶ Mesh
//! ```
//!
//! - [`primitives`]: parameter types and validation per kind
//! - [`tessellate`]: pure triangulation strategies (quad, fan, faces)
//! - [`mesh`]: immutable vertex / index / normal buffers
//! - [`primitive`]: the configure → generate → convert lifecycle
//!
//! All geometry is computed in `f64`; buffers are stored in `f32` once the
//! mesh is built, so they can be handed to a graphics API without copying.
//!
//! ## Conventions
//!
//! Triangles wind counter-clockwise seen from the side their normal points
//! to. Planar primitives lie in the XY plane facing +Z.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use opengeometry::Primitive;
//!
//! let mut disc = Primitive::new("disc");
//! disc.set_circle(DVec3::ZERO, 1.0, 16, 0.0, std::f64::consts::TAU)?;
//! disc.generate_geometry()?;
//! let mesh = disc.to_mesh()?;
//! assert_eq!(mesh.triangle_count(), 16);
//! # Ok::<(), opengeometry::GeometryError>(())
//! ```

pub mod config;
pub mod error;
pub mod mesh;
pub mod primitive;
pub mod primitives;
pub mod tessellate;

pub use config::GeometryConfig;
pub use error::{GeometryError, GeometryResult};
pub use mesh::{Mesh, MeshBuilder};
pub use primitive::{Primitive, PrimitiveState};
pub use primitives::Shape;
