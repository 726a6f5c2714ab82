//! Repository facade over the fetch path.

use async_trait::async_trait;
use tracing::instrument;

use crate::client::NotasClient;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::NotaTarea;

/// Source of the full record collection.
///
/// Failures propagate unhandled: no retry, no cache, no validation beyond
/// what deserialization enforces.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    async fn fetch_all(&self) -> Result<Vec<NotaTarea>, ApiError>;
}

/// Repository backed by `NotasClient` and a `Transport`.
#[derive(Debug, Clone)]
pub struct NetworkRepository<T> {
    client: NotasClient,
    transport: T,
}

impl<T: Transport> NetworkRepository<T> {
    pub fn new(client: NotasClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &NotasClient {
        &self.client
    }
}

#[async_trait]
impl<T: Transport + 'static> Repository for NetworkRepository<T> {
    #[instrument(skip(self), fields(base_url = %self.client.base_url()))]
    async fn fetch_all(&self) -> Result<Vec<NotaTarea>, ApiError> {
        let request = self.client.build_list_notas();
        let response = self.transport.execute(request).await?;
        self.client.parse_list_notas(response)
    }
}
