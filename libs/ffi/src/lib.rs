//! # OpenGeometry C API
//!
//! Opaque-handle boundary over [`opengeometry`] for C and C++ callers.
//!
//! ## Lifecycle
//!
//! ```text
//! og_primitive_create ─▶ og_*_set_config ─▶ og_primitive_generate_geometry
//!        │                                              │
//!        ▼                                              ▼
//! og_primitive_destroy                       og_primitive_to_mesh ─▶ og_mesh_get_*
//!                                                       │
//!                                                       ▼
//!                                                og_mesh_destroy
//! ```
//!
//! ## Ownership Pairs
//!
//! | Allocating call          | Release with           |
//! |--------------------------|------------------------|
//! | `og_primitive_create`    | `og_primitive_destroy` |
//! | `og_primitive_to_mesh`   | `og_mesh_destroy`      |
//! | `og_get_version`         | `og_free_string`       |
//! | `og_primitive_identity`  | `og_free_string`       |
//!
//! Nothing else allocates. Buffer pointers from `og_mesh_get_*` and strings
//! from `og_status_message` are borrows and must not be freed.
//!
//! ## Errors
//!
//! Fallible calls return [`OgStatus`]. Null handles are reported as
//! `OG_STATUS_INVALID_HANDLE`; a dangling non-null handle is undefined
//! behavior. Panics are caught at the boundary and reported as
//! `OG_STATUS_INTERNAL_ERROR`.
//!
//! ## Threads
//!
//! Calls on different handles may run in parallel. Calls on the same handle
//! must be serialized by the caller.

mod handle;
mod mesh;
mod primitive;
mod status;
mod strings;

pub use handle::{OgMesh, OgPrimitive};
pub use mesh::{
    og_mesh_destroy, og_mesh_get_indices, og_mesh_get_normals, og_mesh_get_vertices,
    og_mesh_triangle_count, og_mesh_vertex_count,
};
pub use primitive::{
    og_circle_set_config, og_cuboid_set_config, og_primitive_create, og_primitive_destroy,
    og_primitive_generate_geometry, og_primitive_identity, og_primitive_state,
    og_primitive_to_mesh, og_rectangle_set_config, OgPrimitiveState,
};
pub use status::{og_status_message, OgStatus};
pub use strings::{og_free_string, og_get_version, VERSION};
