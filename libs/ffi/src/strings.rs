//! Strings handed to the caller.
//!
//! Every `char*` returned by this library (other than `og_status_message`)
//! is allocated here and must be released with [`og_free_string`].

use std::ffi::{c_char, CString};
use std::ptr;

use crate::handle::guard;

/// Version string reported by [`og_get_version`].
pub const VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Copies `text` into a new caller-owned C string. Interior NUL bytes are
/// dropped.
pub(crate) fn into_c_string(text: &str) -> *mut c_char {
    let bytes: Vec<u8> = text.bytes().filter(|&b| b != 0).collect();
    CString::new(bytes).map_or(ptr::null_mut(), CString::into_raw)
}

/// Returns the library name and version.
///
/// Ownership: the string belongs to the caller and must be released with
/// [`og_free_string`].
#[no_mangle]
pub extern "C" fn og_get_version() -> *mut c_char {
    guard(ptr::null_mut(), || into_c_string(VERSION))
}

/// Releases a string returned by `og_get_version` or
/// `og_primitive_identity`. Null is ignored.
///
/// # Safety
///
/// `text` must be null or a string from one of those functions that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn og_free_string(text: *mut c_char) {
    if text.is_null() {
        return;
    }
    guard((), || drop(CString::from_raw(text)));
}
