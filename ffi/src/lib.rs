//! C-ABI wrapper around `notas-core`.
//!
//! # Overview
//! Lets a mobile host keep its own HTTP stack: the host asks for the list
//! request, executes it, and hands the response back for parsing. The result
//! also says which screen state to show, computed by `UiState::from_fetch`
//! under the same failure policies `NotasViewModel` offers. A host whose own
//! request failed reports it with `notas_transport_failed` to get the same
//! envelope.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - The C caller owns all returned pointers and must release them with the
//!   matching `notas_free_*` function.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use notas_core::{ApiError, FailurePolicy, HttpResponse};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a client bound to `base_url`.
///
/// Returns null if `base_url` is null or not UTF-8. Free with
/// `notas_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn notas_client_new(base_url: *const c_char) -> *mut FfiNotasClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        let client = notas_core::NotasClient::new(url);
        Box::into_raw(Box::new(FfiNotasClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `notas_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn notas_client_free(client: *mut FfiNotasClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build / parse
// ---------------------------------------------------------------------------

/// Build the `GET /api/NotasTareas` request. Returns null if `client` is
/// null. Free with `notas_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn notas_build_list(client: *const FfiNotasClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_notas())
    })
    .unwrap_or(std::ptr::null_mut())
}

fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        Vec::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }.to_bytes().to_vec()
    };
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body,
    }
}

/// Parse the host's response to the list request under the default
/// policy, where every failure maps to the error screen.
///
/// Never returns null. Free with `notas_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn notas_parse_list(
    client: *const FfiNotasClient,
    response: *const FfiHttpResponse,
) -> *mut FfiNotasResult {
    notas_parse_list_with_policy(client, response, FfiFailurePolicy::RecoverAll)
}

/// Parse the host's response to the list request under `policy`.
///
/// With `RecoverIoOnly` a body that does not decode leaves `ui_state` at
/// `Loading`: the failure is reported but the screen does not change.
/// Never returns null. Free with `notas_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn notas_parse_list_with_policy(
    client: *const FfiNotasClient,
    response: *const FfiHttpResponse,
    policy: FfiFailurePolicy,
) -> *mut FfiNotasResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiNotasResult::null_arg("client");
        }
        if response.is_null() {
            return FfiNotasResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let result = client.inner.parse_list_notas(ffi_response_to_core(resp));
        FfiNotasResult::from_fetch(result, FailurePolicy::from(policy))
    })
    .unwrap_or_else(|_| FfiNotasResult::panic("panic in notas_parse_list"))
}

/// Report that the host could not execute the request at all (refused,
/// DNS, timeout). `message` may be null.
///
/// Yields `error_code = Transport` and the error screen under any policy.
/// Never returns null. Free with `notas_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn notas_transport_failed(message: *const c_char) -> *mut FfiNotasResult {
    catch_unwind(|| {
        let message = if message.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned()
        };
        FfiNotasResult::from_fetch(Err(ApiError::Transport(message)), FailurePolicy::RecoverAll)
    })
    .unwrap_or_else(|_| FfiNotasResult::panic("panic in notas_transport_failed"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free a request returned by `notas_build_list`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn notas_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free a result returned by `notas_parse_list`, `notas_parse_list_with_policy`
/// or `notas_transport_failed`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn notas_free_result(result: *mut FfiNotasResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if !result.items.is_null() && result.len > 0 {
            let items = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    result.items,
                    result.len as usize,
                ))
            };
            for item in items.iter() {
                free_nota_fields(item);
            }
        }
    });
}

/// Free the C-string fields of an `FfiNotaTarea` (but not the struct itself).
fn free_nota_fields(nota: &FfiNotaTarea) {
    free_c_string(nota.titulo);
    free_c_string(nota.contenido);
    free_c_string(nota.fecha);
    free_c_string(nota.fecha_modi);
    free_c_string(nota.fecha_cum);
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
