//! Domain DTOs for the NotasTareas API.
//!
//! # Design
//! `NotaTarea` mirrors the server's JSON object field for field. Dates stay
//! as the server's strings; the client never interprets them. The mock-server
//! crate defines its own copy so integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A single task-like record returned by `GET /api/NotasTareas`.
///
/// Nullable fields accept either JSON `null` or an absent key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotaTarea {
    pub id: u64,
    pub titulo: String,
    pub contenido: Option<String>,
    pub estatus: Option<i32>,
    pub tipo: i32,
    pub fecha: String,
    #[serde(rename = "fechaModi")]
    pub fecha_modi: String,
    #[serde(rename = "fechaCum")]
    pub fecha_cum: Option<String>,
}
