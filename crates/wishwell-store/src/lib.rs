//! Content store client for wishwell.
//!
//! The backend persists the campaign document as a single JSON blob:
//! one GET endpoint that returns either the document or a
//! `{"status": "no_content"}` sentinel, and one POST endpoint that
//! accepts the whole document. No partial updates, no store-side schema
//! validation; shape integrity is the caller's job.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod http;
pub mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

/// Sentinel `status` value the backend returns when nothing has been
/// saved yet.
pub const NO_CONTENT_STATUS: &str = "no_content";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    #[error("store unavailable")]
    Unavailable,
}

/// Result of a load: either the backend has never been written to, or
/// it returns an arbitrary JSON document of unknown shape.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    NoContent,
    Document(Value),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetches the stored document, if any.
    async fn load(&self) -> Result<LoadOutcome, StoreError>;

    /// Persists the whole document, replacing whatever was stored.
    async fn save(&self, doc: &Value) -> Result<(), StoreError>;
}

/// Maps a raw response body to a load outcome, honoring the sentinel.
pub(crate) fn outcome_from_body(body: Value) -> LoadOutcome {
    let is_sentinel = body
        .get("status")
        .and_then(Value::as_str)
        .map(|s| s == NO_CONTENT_STATUS)
        .unwrap_or(false);
    if is_sentinel {
        LoadOutcome::NoContent
    } else {
        LoadOutcome::Document(body)
    }
}
