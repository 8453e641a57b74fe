//! Mesh export entry points.
//!
//! The `og_mesh_get_*` functions hand out pointers into the mesh's own
//! buffers. They are read-only and stay valid until `og_mesh_destroy` is
//! called on the same handle; nothing is copied.

use crate::handle::{borrow, guard, guard_status, release, OgMesh};
use crate::status::OgStatus;

/// Destroys a mesh and its three buffers at once.
///
/// Returns `OG_STATUS_INVALID_HANDLE` for null.
///
/// # Safety
///
/// `mesh` must be null or a live handle from `og_primitive_to_mesh`; it and
/// every buffer pointer obtained from it must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn og_mesh_destroy(mesh: *mut OgMesh) -> OgStatus {
    guard(OgStatus::InternalError, || release(mesh))
}

/// Writes a borrowed view of a buffer to the two out-parameters.
///
/// # Safety
///
/// `data` and `count` must each be null or valid for writes.
unsafe fn export<T>(buffer: &[T], data: *mut *const T, count: *mut usize) -> Result<(), OgStatus> {
    let data = data.as_mut().ok_or(OgStatus::InvalidParameter)?;
    let count = count.as_mut().ok_or(OgStatus::InvalidParameter)?;
    *data = buffer.as_ptr();
    *count = buffer.len();
    Ok(())
}

/// Exposes the vertex positions as `[x, y, z, ...]`.
///
/// `count` receives the number of floats (three per vertex).
///
/// # Safety
///
/// `mesh` must be null or a live handle; `data` and `count` must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn og_mesh_get_vertices(
    mesh: *const OgMesh,
    data: *mut *const f32,
    count: *mut usize,
) -> OgStatus {
    guard_status(|| export(borrow(mesh)?.inner.vertices(), data, count))
}

/// Exposes the triangle indices as `[i0, i1, i2, ...]`.
///
/// `count` receives the number of indices (three per triangle).
///
/// # Safety
///
/// Same as [`og_mesh_get_vertices`].
#[no_mangle]
pub unsafe extern "C" fn og_mesh_get_indices(
    mesh: *const OgMesh,
    data: *mut *const u32,
    count: *mut usize,
) -> OgStatus {
    guard_status(|| export(borrow(mesh)?.inner.indices(), data, count))
}

/// Exposes the vertex normals as `[nx, ny, nz, ...]`, one per vertex in the
/// same order as the positions.
///
/// `count` receives the number of floats. Degenerate faces carry zero
/// normals.
///
/// # Safety
///
/// Same as [`og_mesh_get_vertices`].
#[no_mangle]
pub unsafe extern "C" fn og_mesh_get_normals(
    mesh: *const OgMesh,
    data: *mut *const f32,
    count: *mut usize,
) -> OgStatus {
    guard_status(|| export(borrow(mesh)?.inner.normals(), data, count))
}

/// Number of vertices, or 0 for a null handle.
///
/// # Safety
///
/// `mesh` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_mesh_vertex_count(mesh: *const OgMesh) -> usize {
    guard(0, || borrow(mesh).map_or(0, |handle| handle.inner.vertex_count()))
}

/// Number of triangles, or 0 for a null handle.
///
/// # Safety
///
/// `mesh` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_mesh_triangle_count(mesh: *const OgMesh) -> usize {
    guard(0, || borrow(mesh).map_or(0, |handle| handle.inner.triangle_count()))
}
