//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the seam between the sans-IO client and real I/O. Mobile
//! hosts skip it and drive `NotasClient` through the C ABI; Rust hosts use
//! `UreqTransport`, which runs ureq's blocking call on tokio's blocking pool
//! so `retry()` callers are never blocked.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform the round-trip. Any status code is a response, not an error;
    /// only a failure to get a response at all is `Err`.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking ureq agent driven from async code.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        // Status interpretation belongs to NotasClient.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        debug!(method = request.method.as_str(), path = %request.path, "executing request");
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(format!("transport task failed: {e}")))?
    }
}

fn execute_blocking(agent: &ureq::Agent, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = match request.method {
        HttpMethod::Get => agent.get(&request.path),
    };
    for (key, value) in &request.headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    let mut response = builder.call()?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    // No size cap: the whole collection arrives in one response.
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_vec()?;
    trace!(status, bytes = body.len(), "response received");

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
