//! # Status Codes
//!
//! Every fallible `og_*` function returns an [`OgStatus`]. Each
//! [`GeometryError`] maps to exactly one code.

use std::ffi::c_char;

use opengeometry::{GeometryError, GeometryResult};

/// Result of a boundary call.
///
/// Mirrors `OgStatus` in `opengeometry.h`; the discriminants are part of the
/// ABI and never change.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OgStatus {
    /// The call succeeded.
    Ok = 0,
    /// A numeric argument was non-finite or out of its domain, or a required
    /// out-pointer was null.
    InvalidParameter = 1,
    /// Geometry generation was requested before configuration.
    NotConfigured = 2,
    /// Mesh conversion was requested before geometry generation.
    GeometryNotGenerated = 3,
    /// The handle argument was null.
    InvalidHandle = 4,
    /// The engine failed internally; no state was changed.
    InternalError = 5,
}

impl OgStatus {
    /// Static description of the status, NUL-terminated.
    pub fn message(self) -> &'static str {
        match self {
            OgStatus::Ok => "ok\0",
            OgStatus::InvalidParameter => "invalid parameter\0",
            OgStatus::NotConfigured => "primitive is not configured\0",
            OgStatus::GeometryNotGenerated => "geometry has not been generated\0",
            OgStatus::InvalidHandle => "null handle\0",
            OgStatus::InternalError => "internal error\0",
        }
    }

    fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => OgStatus::Ok,
            1 => OgStatus::InvalidParameter,
            2 => OgStatus::NotConfigured,
            3 => OgStatus::GeometryNotGenerated,
            4 => OgStatus::InvalidHandle,
            5 => OgStatus::InternalError,
            _ => return None,
        })
    }
}

impl From<&GeometryError> for OgStatus {
    fn from(err: &GeometryError) -> Self {
        match err {
            GeometryError::InvalidParameter { .. } => OgStatus::InvalidParameter,
            GeometryError::NotConfigured => OgStatus::NotConfigured,
            GeometryError::GeometryNotGenerated => OgStatus::GeometryNotGenerated,
            GeometryError::InvalidMesh { .. } => OgStatus::InternalError,
        }
    }
}

/// Maps an engine error to its status, logging the detail that the code
/// alone cannot carry.
pub(crate) fn check<T>(result: GeometryResult<T>) -> Result<T, OgStatus> {
    result.map_err(|err| {
        log::debug!("boundary call failed: {err}");
        OgStatus::from(&err)
    })
}

/// Returns a static, NUL-terminated description of a status code.
///
/// The string is owned by the library and must not be freed. Unknown codes
/// yield `"unknown status"`.
#[no_mangle]
pub extern "C" fn og_status_message(status: i32) -> *const c_char {
    let text = match OgStatus::from_code(status) {
        Some(status) => status.message(),
        None => "unknown status\0",
    };
    text.as_ptr().cast()
}
