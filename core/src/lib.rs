//! Client core for the NotasTareas list screen.
//!
//! # Overview
//! Fetches the record list from `GET <base>/api/NotasTareas` and exposes it
//! to a presentation layer as an observable `UiState`
//! (`Loading | Success | Error`) with a retry entry point.
//!
//! # Design
//! - `NotasClient` is stateless and sans-IO: `build_list_notas` produces a
//!   request, `parse_list_notas` consumes a response.
//! - `Transport` executes requests; `UreqTransport` is the bundled one.
//!   Mobile hosts can do their own HTTP through the `notas-ffi` crate.
//! - `Repository` is the one-method facade the state machine depends on.
//! - `NotasViewModel` owns the state in a watch channel and spawns one tokio
//!   task per fetch.
//! - `render` maps state to a `View`; it never touches the view model.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod repository;
pub mod state;
pub mod transport;
pub mod types;
pub mod view_model;

pub use client::{NotasClient, LIST_PATH};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{render, Card, GridLayout, Presenter, View};
pub use repository::{NetworkRepository, Repository};
pub use state::{FailurePolicy, UiState};
pub use transport::{Transport, UreqTransport};
pub use types::NotaTarea;
pub use view_model::NotasViewModel;
