//! HTTP implementation of the content store.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{outcome_from_body, ContentStore, LoadOutcome, StoreError};

/// Talks to the backend content endpoint.
///
/// Deliberately bare: no timeout, no retry, no cancellation. A single
/// outstanding request per call; overlapping saves are last-response-wins.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    endpoint: String,
}

impl HttpStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContentStore for HttpStore {
    async fn load(&self) -> Result<LoadOutcome, StoreError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }
        let body: Value = response.json().await?;
        debug!(endpoint = %self.endpoint, "content loaded");
        Ok(outcome_from_body(body))
    }

    async fn save(&self, doc: &Value) -> Result<(), StoreError> {
        let response = self.client.post(&self.endpoint).json(doc).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status));
        }
        debug!(endpoint = %self.endpoint, "content saved");
        Ok(())
    }
}
