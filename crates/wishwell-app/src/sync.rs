//! Load/save orchestration against the content store.
//!
//! Loading never fails: every failure mode degrades to the default
//! document so the page always renders. Saving reports its failure to
//! the caller, who keeps the in-memory document either way — edits are
//! never lost locally just because persistence failed.

use thiserror::Error;
use tracing::{debug, warn};

use wishwell_content::{CampaignContent, ContentError};
use wishwell_store::{ContentStore, LoadOutcome, StoreError};

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("encode: {0}")]
    Encode(#[from] ContentError),
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

/// Fetches and reconciles the campaign content.
///
/// Transport failure, an empty store, and a document too malformed to
/// decode all yield the defaults verbatim. No automatic retry.
pub async fn load_content<S: ContentStore + ?Sized>(store: &S) -> CampaignContent {
    match store.load().await {
        Err(err) => {
            warn!(error = %err, "content load failed, using defaults");
            CampaignContent::default()
        }
        Ok(LoadOutcome::NoContent) => {
            debug!("store has no content yet, using defaults");
            CampaignContent::default()
        }
        Ok(LoadOutcome::Document(doc)) => match CampaignContent::from_stored(&doc) {
            Ok(content) => content,
            Err(err) => {
                warn!(error = %err, "stored document did not decode, using defaults");
                CampaignContent::default()
            }
        },
    }
}

/// Persists the whole document. The caller surfaces a failure to the
/// operator and retains its in-memory state; there is no retry and no
/// refetch after success — the in-memory document is the new baseline.
pub async fn save_content<S: ContentStore + ?Sized>(
    store: &S,
    content: &CampaignContent,
) -> Result<(), SaveError> {
    let doc = content.to_document()?;
    store.save(&doc).await?;
    debug!("content saved");
    Ok(())
}
