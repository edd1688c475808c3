//! C-ABI wrapper around `studing-core`.
//!
//! # Overview
//! Lets a mobile host build Studing requests, execute them with its own
//! HTTP stack, and hand the responses back for envelope parsing and entity
//! mapping, without linking an async runtime.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Calls are named with JSON (`{"area": ..., "call": {"name": ..., "payload": ...}}`)
//!   rather than one symbol per endpoint; see [`call::ApiCall`].
//! - The handle owns an in-memory token store. The host mirrors its keychain
//!   into it with `studing_token_save` before building authorized requests.
//! - The C caller owns all returned pointers and must call the matching
//!   `studing_free_*` function to release them.

pub mod call;
pub mod types;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use studing_core::{
    ClientConfig, HttpResponse, MemoryTokenStore, StudingClient, TokenKey, TokenStore,
};

use call::ApiCall;
use types::*;

/// Borrow a C string as UTF-8. `None` for null or invalid UTF-8.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that outlives `'a`.
unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

fn parse_call(json: &str) -> Result<ApiCall, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid call: {e}"))
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a client bound to `base_url`.
///
/// Returns null if `base_url` is null, not UTF-8, or not an http(s) URL.
/// The caller must free the returned pointer with `studing_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn studing_client_new(base_url: *const c_char) -> *mut FfiStudingClient {
    catch_unwind(|| {
        let Some(url) = (unsafe { str_arg(base_url) }) else {
            return std::ptr::null_mut();
        };
        let Ok(config) = ClientConfig::new(url) else {
            return std::ptr::null_mut();
        };
        let store = Arc::new(MemoryTokenStore::new());
        let shared: Arc<dyn TokenStore> = store.clone();
        let inner = StudingClient::from_config(&config, shared);
        Box::into_raw(Box::new(FfiStudingClient { inner, store }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `studing_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn studing_client_free(client: *mut FfiStudingClient) {
    if !client.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(client) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Token slots
// ---------------------------------------------------------------------------

/// Store `value` in the slot named `slot` (`accessToken`, `refreshToken`,
/// `fcmToken`, `userAuthState`, `signupDraft`).
#[unsafe(no_mangle)]
pub extern "C" fn studing_token_save(
    client: *const FfiStudingClient,
    slot: *const c_char,
    value: *const c_char,
) -> FfiErrorCode {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiErrorCode::NullArg;
        }
        let client = unsafe { &*client };
        let (Some(slot), Some(value)) = (unsafe { str_arg(slot) }, unsafe { str_arg(value) })
        else {
            return FfiErrorCode::NullArg;
        };
        let Some(key) = TokenKey::from_slot(slot) else {
            return FfiErrorCode::InvalidCall;
        };
        match client.store.save(key, value) {
            Ok(()) => FfiErrorCode::Ok,
            Err(_) => FfiErrorCode::Unknown,
        }
    }))
    .unwrap_or(FfiErrorCode::Panic)
}

/// Read the slot named `slot`. Returns null when it is empty or unknown.
/// The caller must free the returned string with `studing_free_string`.
#[unsafe(no_mangle)]
pub extern "C" fn studing_token_load(
    client: *const FfiStudingClient,
    slot: *const c_char,
) -> *mut c_char {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        unsafe { str_arg(slot) }
            .and_then(TokenKey::from_slot)
            .and_then(|key| client.store.load(key))
            .map_or(std::ptr::null_mut(), c_string)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Clear the slot named `slot`.
#[unsafe(no_mangle)]
pub extern "C" fn studing_token_delete(
    client: *const FfiStudingClient,
    slot: *const c_char,
) -> FfiErrorCode {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiErrorCode::NullArg;
        }
        let client = unsafe { &*client };
        let Some(slot) = (unsafe { str_arg(slot) }) else {
            return FfiErrorCode::NullArg;
        };
        match TokenKey::from_slot(slot) {
            Some(key) => {
                client.store.delete(key);
                FfiErrorCode::Ok
            }
            None => FfiErrorCode::InvalidCall,
        }
    }))
    .unwrap_or(FfiErrorCode::Panic)
}

// ---------------------------------------------------------------------------
// Request building and response parsing
// ---------------------------------------------------------------------------

/// Build the HTTP request for `call_json`.
///
/// Returns null on failure; when `error` is non-null the reason is written
/// there (`InvalidCall`, `UrlEncoding`, `NullArg` or `Panic`).
/// The caller must free the returned pointer with `studing_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn studing_build_request(
    client: *const FfiStudingClient,
    call_json: *const c_char,
    error: *mut FfiErrorCode,
) -> *mut FfiHttpRequest {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return Err(FfiErrorCode::NullArg);
        }
        let client = unsafe { &*client };
        let json = unsafe { str_arg(call_json) }.ok_or(FfiErrorCode::NullArg)?;
        let call = parse_call(json).map_err(|_| FfiErrorCode::InvalidCall)?;
        let req = client
            .inner
            .build_request(call.endpoint())
            .map_err(|e| FfiErrorCode::from(&e))?;
        Ok(FfiHttpRequest::from_core(req))
    }))
    .unwrap_or(Err(FfiErrorCode::Panic));

    let (ptr, code) = match outcome {
        Ok(ptr) => (ptr, FfiErrorCode::Ok),
        Err(code) => (std::ptr::null_mut(), code),
    };
    if !error.is_null() {
        unsafe { *error = code };
    }
    ptr
}

/// Parse the host's response to `call_json` into the call's entity.
///
/// On success `data_json` holds the entity as JSON. Every failure, including
/// null arguments, is reported through the returned result.
/// The caller must free the returned pointer with `studing_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn studing_parse_response(
    client: *const FfiStudingClient,
    call_json: *const c_char,
    response: *const FfiHttpResponse,
) -> *mut FfiResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() || response.is_null() {
            return FfiResult::error(FfiErrorCode::NullArg, "null argument");
        }
        let client = unsafe { &*client };
        let response = unsafe { &*response };
        let Some(json) = (unsafe { str_arg(call_json) }) else {
            return FfiResult::error(FfiErrorCode::NullArg, "null call");
        };
        let call = match parse_call(json) {
            Ok(call) => call,
            Err(msg) => return FfiResult::error(FfiErrorCode::InvalidCall, &msg),
        };
        let body = if response.body.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(response.body) }
                .to_string_lossy()
                .into_owned()
        };
        let response = HttpResponse {
            status: response.status,
            headers: Vec::new(),
            body,
        };
        match call.parse(&client.inner, response) {
            Ok(value) => FfiResult::ok(value.to_string()),
            Err(e) => FfiResult::from_network(&e),
        }
    }))
    .unwrap_or_else(|_| FfiResult::error(FfiErrorCode::Panic, "panic in studing_parse_response"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a request returned by `studing_build_request`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn studing_free_request(req: *mut FfiHttpRequest) {
    if !req.is_null() {
        let _ = catch_unwind(|| unsafe { FfiHttpRequest::free(req) });
    }
}

/// Free a result returned by `studing_parse_response`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn studing_free_result(result: *mut FfiResult) {
    if !result.is_null() {
        let _ = catch_unwind(|| unsafe { FfiResult::free(result) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn studing_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| unsafe { free_string(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
