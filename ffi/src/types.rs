//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type with C-compatible fields: `*mut c_char` for
//! strings (null for `None`), raw pointer + length for lists, explicit
//! discriminants for enums. Conversions live here so `lib.rs` stays focused
//! on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use notas_core::{ApiError, FailurePolicy, HttpMethod, NotaTarea, UiState};

/// Opaque handle to a `NotasClient`.
pub struct FfiNotasClient {
    pub(crate) inner: notas_core::NotasClient,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request for the host to execute. Free with `notas_free_request`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

/// Owned C string, or null for `None`. Interior NULs are stripped rather
/// than failing the whole conversion.
pub(crate) fn to_c_string(s: String) -> *mut c_char {
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

fn to_c_string_opt(s: Option<String>) -> *mut c_char {
    s.map(to_c_string).unwrap_or(std::ptr::null_mut())
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: notas_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: to_c_string(k),
                    value: to_c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: to_c_string(req.path),
            headers,
            headers_len,
            body: to_c_string_opt(req.body),
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// Filled in by the host after executing the request. Read, never freed, by
/// this library.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Http = 1,
    Deserialization = 2,
    Transport = 3,
    Panic = 4,
    NullArg = 5,
}

/// The screen state a parse result maps to.
#[repr(C)]
#[derive(Debug, PartialEq, Eq)]
pub enum FfiUiState {
    Loading = 0,
    Success = 1,
    Error = 2,
}

impl From<&UiState> for FfiUiState {
    fn from(state: &UiState) -> Self {
        match state {
            UiState::Loading => FfiUiState::Loading,
            UiState::Success(_) => FfiUiState::Success,
            UiState::Error => FfiUiState::Error,
        }
    }
}

/// Which parse failures map to the error screen. See `FailurePolicy`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiFailurePolicy {
    RecoverAll = 0,
    RecoverIoOnly = 1,
}

impl From<FfiFailurePolicy> for FailurePolicy {
    fn from(p: FfiFailurePolicy) -> Self {
        match p {
            FfiFailurePolicy::RecoverAll => FailurePolicy::RecoverAll,
            FfiFailurePolicy::RecoverIoOnly => FailurePolicy::RecoverIoOnly,
        }
    }
}

/// One record. Nullable strings are null pointers; `estatus` is only
/// meaningful when `has_estatus` is true.
#[repr(C)]
pub struct FfiNotaTarea {
    pub id: u64,
    pub titulo: *mut c_char,
    pub contenido: *mut c_char,
    pub has_estatus: bool,
    pub estatus: i32,
    pub tipo: i32,
    pub fecha: *mut c_char,
    pub fecha_modi: *mut c_char,
    pub fecha_cum: *mut c_char,
}

impl From<NotaTarea> for FfiNotaTarea {
    fn from(nota: NotaTarea) -> Self {
        FfiNotaTarea {
            id: nota.id,
            titulo: to_c_string(nota.titulo),
            contenido: to_c_string_opt(nota.contenido),
            has_estatus: nota.estatus.is_some(),
            estatus: nota.estatus.unwrap_or_default(),
            tipo: nota.tipo,
            fecha: to_c_string(nota.fecha),
            fecha_modi: to_c_string(nota.fecha_modi),
            fecha_cum: to_c_string_opt(nota.fecha_cum),
        }
    }
}

/// Result envelope for `notas_parse_list` and `notas_transport_failed`.
///
/// On success `error_code` is `Ok`, `error_message` is null and
/// `items`/`len` hold the records (`items` is null when `len` is 0).
/// On failure `error_code` gives the category and `error_message` a
/// human-readable C string. `ui_state` is what the screen should show.
#[repr(C)]
pub struct FfiNotasResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub ui_state: FfiUiState,
    pub items: *mut FfiNotaTarea,
    pub len: u32,
}

impl FfiNotasResult {
    pub(crate) fn ok_list(notas: Vec<NotaTarea>) -> *mut Self {
        let len = notas.len() as u32;
        let items = if notas.is_empty() {
            std::ptr::null_mut()
        } else {
            let items: Box<[FfiNotaTarea]> = notas.into_iter().map(FfiNotaTarea::from).collect();
            Box::into_raw(items) as *mut FfiNotaTarea
        };
        Box::into_raw(Box::new(FfiNotasResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 200,
            ui_state: FfiUiState::Success,
            items,
            len,
        }))
    }

    /// Envelope for a finished fetch. `ui_state` comes from
    /// `UiState::from_fetch`; a failure the policy does not recover keeps
    /// the screen at `Loading`.
    pub(crate) fn from_fetch(
        result: Result<Vec<NotaTarea>, ApiError>,
        policy: FailurePolicy,
    ) -> *mut Self {
        match result {
            Ok(notas) => Self::ok_list(notas),
            Err(err) => {
                let (error_code, http_status) = classify(&err);
                let message = err.to_string();
                let ui_state = match UiState::from_fetch(Err(err), policy) {
                    Ok(state) => FfiUiState::from(&state),
                    Err(_) => FfiUiState::Loading,
                };
                Self::failure(error_code, http_status, ui_state, message)
            }
        }
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(
            FfiErrorCode::NullArg,
            0,
            FfiUiState::Error,
            format!("null argument: {name}"),
        )
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, 0, FfiUiState::Error, msg.to_string())
    }

    fn failure(
        error_code: FfiErrorCode,
        http_status: u16,
        ui_state: FfiUiState,
        msg: String,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiNotasResult {
            error_code,
            error_message: to_c_string(msg),
            http_status,
            ui_state,
            items: std::ptr::null_mut(),
            len: 0,
        }))
    }
}

fn classify(err: &ApiError) -> (FfiErrorCode, u16) {
    match err {
        ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
        ApiError::HttpError { status, .. } => (FfiErrorCode::Http, *status),
        ApiError::DeserializationError(_) => (FfiErrorCode::Deserialization, 0),
    }
}
