//! Error types for the NotasTareas client.
//!
//! # Design
//! Failures split into two classes. Transport failures and unexpected status
//! codes are I/O class: the screen can offer a retry. A body that does not
//! decode is a schema problem; whether it reaches the error screen is decided
//! by `FailurePolicy` in the view model.

use thiserror::Error;

/// Errors produced while fetching and parsing the record list.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (refused, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into records.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    /// True for failures of the I/O class (transport and status errors).
    pub fn is_io(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::HttpError { .. })
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ApiError::HttpError {
                status,
                body: String::new(),
            },
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_and_status_are_io_class() {
        assert!(ApiError::Transport("connection refused".to_string()).is_io());
        assert!(ApiError::HttpError {
            status: 503,
            body: String::new()
        }
        .is_io());
    }

    #[test]
    fn deserialization_is_not_io_class() {
        assert!(!ApiError::DeserializationError("expected array".to_string()).is_io());
    }

    #[test]
    fn display_includes_status() {
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn status_code_error_maps_to_http_error() {
        let err: ApiError = ureq::Error::StatusCode(404).into();
        assert!(matches!(err, ApiError::HttpError { status: 404, .. }));
    }
}
