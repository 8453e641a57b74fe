//! # Opaque Handles
//!
//! A handle is a `Box`-allocated wrapper whose raw pointer is given to the
//! caller. Creation functions call [`into_handle`]; destroy functions call
//! [`release`], which drops the box and everything it owns before returning.
//!
//! Only null is detected. A dangling non-null pointer (use after destroy,
//! double destroy) is a contract violation with undefined behavior: no
//! liveness registry is kept.

use std::panic::{self, AssertUnwindSafe};

use opengeometry::{Mesh, Primitive};

use crate::status::OgStatus;

/// Opaque primitive handle. The layout is not part of the ABI.
#[derive(Debug)]
pub struct OgPrimitive {
    pub(crate) inner: Primitive,
}

/// Opaque mesh handle. The layout is not part of the ABI.
///
/// Owns the vertex, index and normal buffers; pointers returned by the
/// `og_mesh_get_*` functions point into them.
#[derive(Debug)]
pub struct OgMesh {
    pub(crate) inner: Mesh,
}

/// Transfers ownership of `value` to the caller.
pub(crate) fn into_handle<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Takes ownership back from the caller and drops it.
///
/// # Safety
///
/// `handle` must be null or a pointer from [`into_handle`] that has not been
/// released yet.
pub(crate) unsafe fn release<T>(handle: *mut T) -> OgStatus {
    if handle.is_null() {
        log::warn!("destroy called with a null handle");
        return OgStatus::InvalidHandle;
    }
    drop(Box::from_raw(handle));
    OgStatus::Ok
}

/// Borrows the object behind a handle, rejecting null.
///
/// # Safety
///
/// `handle` must be null or a live handle not used concurrently by another
/// thread.
pub(crate) unsafe fn borrow<'a, T>(handle: *const T) -> Result<&'a T, OgStatus> {
    handle.as_ref().ok_or_else(|| {
        log::warn!("null handle passed to the C API");
        OgStatus::InvalidHandle
    })
}

/// Mutable counterpart of [`borrow`].
///
/// # Safety
///
/// Same as [`borrow`], and no other reference to the object may exist.
pub(crate) unsafe fn borrow_mut<'a, T>(handle: *mut T) -> Result<&'a mut T, OgStatus> {
    handle.as_mut().ok_or_else(|| {
        log::warn!("null handle passed to the C API");
        OgStatus::InvalidHandle
    })
}

/// Runs a boundary body, turning a panic into `fallback` so no unwind ever
/// reaches the caller.
pub(crate) fn guard<T>(fallback: T, body: impl FnOnce() -> T) -> T {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => value,
        Err(_) => {
            log::error!("panic caught at the C boundary");
            fallback
        }
    }
}

/// Like [`guard`] for bodies that report through `Result<(), OgStatus>`.
pub(crate) fn guard_status(body: impl FnOnce() -> Result<(), OgStatus>) -> OgStatus {
    guard(OgStatus::InternalError, || match body() {
        Ok(()) => OgStatus::Ok,
        Err(status) => status,
    })
}
