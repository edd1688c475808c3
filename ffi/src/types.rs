//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Requests go out as plain C data. Bodies are a byte pointer plus length
//! because multipart bodies carry raw image bytes. Parsed entities come back
//! as JSON text in `FfiResult::data_json`, so one result type covers every
//! call.

use std::ffi::CString;
use std::os::raw::c_char;
use std::sync::Arc;

use studing_core::{HttpMethod, HttpRequest, MemoryTokenStore, NetworkError, StudingClient};

/// Opaque handle to a `StudingClient` and the in-memory token store it reads.
pub struct FfiStudingClient {
    pub(crate) inner: StudingClient,
    pub(crate) store: Arc<MemoryTokenStore>,
}

/// Copy `s` into a C string. Interior NULs yield an empty string.
pub(crate) fn c_string(s: impl Into<Vec<u8>>) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Delete = 2,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// `url` is absolute. `body` is null with `body_len` 0 when there is no body.
/// The content type is already among the headers.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut u8,
    pub body_len: usize,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: HttpRequest) -> *mut Self {
        let (body, body_len) = match req.body {
            Some(body) => {
                let bytes = body.to_bytes().into_boxed_slice();
                let len = bytes.len();
                (Box::into_raw(bytes) as *mut u8, len)
            }
            None => (std::ptr::null_mut(), 0),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            url: c_string(req.url),
            headers,
            headers_len,
            body,
            body_len,
        }))
    }

    /// Release everything `from_core` allocated.
    ///
    /// # Safety
    /// `ptr` must come from `from_core` and not have been freed.
    pub(crate) unsafe fn free(ptr: *mut Self) {
        let req = unsafe { Box::from_raw(ptr) };
        unsafe { free_string(req.url) };
        if !req.headers.is_null() {
            let slice = std::ptr::slice_from_raw_parts_mut(req.headers, req.headers_len as usize);
            let headers = unsafe { Box::from_raw(slice) };
            for header in headers.iter() {
                unsafe {
                    free_string(header.key);
                    free_string(header.value);
                }
            }
        }
        if !req.body.is_null() {
            let slice = std::ptr::slice_from_raw_parts_mut(req.body, req.body_len);
            drop(unsafe { Box::from_raw(slice) });
        }
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response the host executed. The FFI layer reads but never frees it.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    /// The request payload could not be encoded.
    UrlEncoding = 1,
    /// Transport, status or decoding failure.
    Unknown = 2,
    /// The call JSON did not name a known call.
    InvalidCall = 3,
    Panic = 4,
    NullArg = 5,
}

impl From<&NetworkError> for FfiErrorCode {
    fn from(err: &NetworkError) -> Self {
        match err {
            NetworkError::UrlEncoding(_) => FfiErrorCode::UrlEncoding,
            NetworkError::Unknown(_) => FfiErrorCode::Unknown,
        }
    }
}

/// Result envelope for parse operations.
///
/// On success `error_message` is null and `data_json` holds the entity as
/// JSON (`null` for acknowledgements). On failure `data_json` is null.
#[repr(C)]
pub struct FfiResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub data_json: *mut c_char,
}

impl FfiResult {
    pub(crate) fn ok(json: String) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            data_json: c_string(json),
        }))
    }

    pub(crate) fn error(code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiResult {
            error_code: code,
            error_message: c_string(msg),
            data_json: std::ptr::null_mut(),
        }))
    }

    pub(crate) fn from_network(err: &NetworkError) -> *mut Self {
        Self::error(err.into(), &err.to_string())
    }

    /// # Safety
    /// `ptr` must come from one of the constructors above.
    pub(crate) unsafe fn free(ptr: *mut Self) {
        let result = unsafe { Box::from_raw(ptr) };
        unsafe {
            free_string(result.error_message);
            free_string(result.data_json);
        }
    }
}

/// # Safety
/// `s` must be null or come from `c_string`.
pub(crate) unsafe fn free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}
