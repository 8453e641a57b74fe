//! Primitive lifecycle entry points: create, configure, generate, convert,
//! destroy.

use std::ffi::{c_char, CStr};
use std::ptr;

use glam::DVec3;
use opengeometry::{Primitive, PrimitiveState};

use crate::handle::{borrow, borrow_mut, guard, guard_status, into_handle, release, OgMesh, OgPrimitive};
use crate::status::{check, OgStatus};
use crate::strings::into_c_string;

/// Lifecycle state reported by [`og_primitive_state`].
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgPrimitiveState {
    /// No configuration applied yet.
    Unconfigured = 0,
    /// Configured, geometry not generated.
    Configured = 1,
    /// Geometry generated; `og_primitive_to_mesh` will succeed.
    GeometryGenerated = 2,
}

impl From<PrimitiveState> for OgPrimitiveState {
    fn from(state: PrimitiveState) -> Self {
        match state {
            PrimitiveState::Unconfigured => OgPrimitiveState::Unconfigured,
            PrimitiveState::Configured => OgPrimitiveState::Configured,
            PrimitiveState::GeometryGenerated => OgPrimitiveState::GeometryGenerated,
        }
    }
}

/// Creates an unconfigured primitive.
///
/// `id` is a diagnostic label copied into the primitive; null gives an empty
/// label and invalid UTF-8 is replaced lossily.
///
/// Ownership: the returned handle belongs to the caller and must be released
/// with exactly one call to [`og_primitive_destroy`].
///
/// # Safety
///
/// `id` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_create(id: *const c_char) -> *mut OgPrimitive {
    guard(ptr::null_mut(), || {
        let id = if id.is_null() {
            String::new()
        } else {
            CStr::from_ptr(id).to_string_lossy().into_owned()
        };
        into_handle(OgPrimitive {
            inner: Primitive::new(id),
        })
    })
}

/// Destroys a primitive. Meshes produced from it stay valid.
///
/// Returns `OG_STATUS_INVALID_HANDLE` for null.
///
/// # Safety
///
/// `primitive` must be null or a live handle from [`og_primitive_create`];
/// it must not be used again afterwards.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_destroy(primitive: *mut OgPrimitive) -> OgStatus {
    guard(OgStatus::InternalError, || release(primitive))
}

/// Configures the primitive as a rectangle in the XY plane.
///
/// `width` and `height` must be finite and `>= 0`; the center must be
/// finite. On failure the primitive is unchanged.
///
/// # Safety
///
/// `primitive` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_rectangle_set_config(
    primitive: *mut OgPrimitive,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    width: f64,
    height: f64,
) -> OgStatus {
    guard_status(|| {
        let handle = borrow_mut(primitive)?;
        let center = DVec3::new(center_x, center_y, center_z);
        check(handle.inner.set_rectangle(center, width, height))
    })
}

/// Configures the primitive as a disc sector in the XY plane.
///
/// `segments == 0` selects the default segment count. Angles are radians;
/// `start_angle < end_angle` and the span may not exceed a full turn.
///
/// # Safety
///
/// `primitive` must be null or a live handle.
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn og_circle_set_config(
    primitive: *mut OgPrimitive,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    radius: f64,
    segments: u32,
    start_angle: f64,
    end_angle: f64,
) -> OgStatus {
    guard_status(|| {
        let handle = borrow_mut(primitive)?;
        let center = DVec3::new(center_x, center_y, center_z);
        check(
            handle
                .inner
                .set_circle(center, radius, segments, start_angle, end_angle),
        )
    })
}

/// Configures the primitive as an axis-aligned box.
///
/// # Safety
///
/// `primitive` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_cuboid_set_config(
    primitive: *mut OgPrimitive,
    center_x: f64,
    center_y: f64,
    center_z: f64,
    width: f64,
    height: f64,
    depth: f64,
) -> OgStatus {
    guard_status(|| {
        let handle = borrow_mut(primitive)?;
        let center = DVec3::new(center_x, center_y, center_z);
        check(handle.inner.set_cuboid(center, width, height, depth))
    })
}

/// Prepares the configured geometry for mesh conversion.
///
/// Returns `OG_STATUS_NOT_CONFIGURED` if no configuration was applied.
///
/// # Safety
///
/// `primitive` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_generate_geometry(primitive: *mut OgPrimitive) -> OgStatus {
    guard_status(|| {
        let handle = borrow_mut(primitive)?;
        check(handle.inner.generate_geometry())
    })
}

/// Writes the primitive's lifecycle state to `out_state`.
///
/// # Safety
///
/// `primitive` must be null or a live handle; `out_state` must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_state(
    primitive: *const OgPrimitive,
    out_state: *mut OgPrimitiveState,
) -> OgStatus {
    guard_status(|| {
        let handle = borrow(primitive)?;
        let out_state = out_state.as_mut().ok_or(OgStatus::InvalidParameter)?;
        *out_state = handle.inner.state().into();
        Ok(())
    })
}

/// Returns a copy of the primitive's identity.
///
/// Ownership: the string belongs to the caller and must be released with
/// `og_free_string`. Returns null for a null handle.
///
/// # Safety
///
/// `primitive` must be null or a live handle.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_identity(primitive: *const OgPrimitive) -> *mut c_char {
    guard(ptr::null_mut(), || match borrow(primitive) {
        Ok(handle) => into_c_string(handle.inner.id()),
        Err(_) => ptr::null_mut(),
    })
}

/// Tessellates the primitive into a new mesh and writes its handle to
/// `out_mesh`.
///
/// Returns `OG_STATUS_GEOMETRY_NOT_GENERATED` unless
/// [`og_primitive_generate_geometry`] succeeded since the last
/// configuration. `out_mesh` is written only on success.
///
/// Ownership: the mesh belongs to the caller and must be released with
/// exactly one call to `og_mesh_destroy`. It does not depend on the
/// primitive.
///
/// # Safety
///
/// `primitive` must be null or a live handle; `out_mesh` must be null or
/// valid for writes.
#[no_mangle]
pub unsafe extern "C" fn og_primitive_to_mesh(
    primitive: *const OgPrimitive,
    out_mesh: *mut *mut OgMesh,
) -> OgStatus {
    guard_status(|| {
        let handle = borrow(primitive)?;
        let out_mesh = out_mesh.as_mut().ok_or(OgStatus::InvalidParameter)?;
        let mesh = check(handle.inner.to_mesh())?;
        *out_mesh = into_handle(OgMesh { inner: mesh });
        Ok(())
    })
}
