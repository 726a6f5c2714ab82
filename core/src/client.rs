//! Stateless HTTP request builder and response parser for the NotasTareas API.
//!
//! # Design
//! `NotasClient` holds only a `base_url`. The list operation is split into
//! `build_list_notas`, which produces an `HttpRequest`, and
//! `parse_list_notas`, which consumes an `HttpResponse`. The caller executes
//! the round-trip in between.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::NotaTarea;

/// Path of the list endpoint, relative to the base URL.
pub const LIST_PATH: &str = "/api/NotasTareas";

/// Synchronous, stateless client for the NotasTareas API.
#[derive(Debug, Clone)]
pub struct NotasClient {
    base_url: String,
}

impl NotasClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_notas(&self) -> HttpRequest {
        let path = format!("{}{LIST_PATH}", self.base_url);
        debug!(%path, "built list request");
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Records come back in server order, untouched.
    pub fn parse_list_notas(&self, response: HttpResponse) -> Result<Vec<NotaTarea>, ApiError> {
        check_status(&response, 200)?;
        // Invalid UTF-8 is a JSON syntax error here, not a transport failure.
        serde_json::from_slice(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NotasClient {
        NotasClient::new("http://localhost:3000")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn build_list_notas_produces_correct_request() {
        let req = client().build_list_notas();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/api/NotasTareas");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = NotasClient::new("https://example.ngrok-free.app/");
        let req = client.build_list_notas();
        assert_eq!(req.path, "https://example.ngrok-free.app/api/NotasTareas");
    }

    #[test]
    fn parse_list_notas_success() {
        let notas = client()
            .parse_list_notas(ok(
                r#"[{"id":1,"titulo":"A","tipo":0,"fecha":"2024-01-01","fechaModi":"2024-01-01"}]"#,
            ))
            .unwrap();
        assert_eq!(notas.len(), 1);
        assert_eq!(notas[0].titulo, "A");
    }

    #[test]
    fn parse_list_notas_keeps_server_order() {
        let notas = client()
            .parse_list_notas(ok(r#"[
                {"id":9,"titulo":"Z","tipo":0,"fecha":"2024-01-01","fechaModi":"2024-01-01"},
                {"id":3,"titulo":"C","tipo":0,"fecha":"2024-01-01","fechaModi":"2024-01-01"},
                {"id":3,"titulo":"C","tipo":0,"fecha":"2024-01-01","fechaModi":"2024-01-01"}
            ]"#))
            .unwrap();
        let ids: Vec<u64> = notas.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![9, 3, 3]);
    }

    #[test]
    fn parse_list_notas_empty_array() {
        let notas = client().parse_list_notas(ok("[]")).unwrap();
        assert!(notas.is_empty());
    }

    #[test]
    fn parse_list_notas_wrong_status() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: b"internal error".to_vec(),
        };
        let err = client().parse_list_notas(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert!(err.is_io());
    }

    #[test]
    fn parse_list_notas_bad_json() {
        let err = client().parse_list_notas(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
        assert!(!err.is_io());
    }

    #[test]
    fn parse_list_notas_object_instead_of_array() {
        let err = client()
            .parse_list_notas(ok(r#"{"id":1,"titulo":"A"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_notas_invalid_utf8_is_deserialization_error() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: vec![0xff, 0xfe, b'['],
        };
        let err = client().parse_list_notas(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)), "got {err:?}");
        assert!(!err.is_io());
    }

    #[test]
    fn wrong_status_keeps_lossy_body_text() {
        let response = HttpResponse {
            status: 502,
            headers: Vec::new(),
            body: vec![b'b', b'a', b'd', 0xff],
        };
        let err = client().parse_list_notas(response).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 502: bad\u{fffd}");
    }
}
