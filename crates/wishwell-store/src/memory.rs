//! In-memory implementation of the content store.
//!
//! Backs tests and demos. Holds at most one document, like the real
//! backend, and can be told to fail loads or saves so orchestration
//! error paths are reachable without a network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::{outcome_from_body, ContentStore, LoadOutcome, StoreError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<Option<Value>>,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    /// An empty store; loads report `NoContent`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a document.
    pub fn with_document(doc: Value) -> Self {
        let store = Self::new();
        *store.lock() = Some(doc);
        store
    }

    /// Makes every subsequent `load` fail.
    pub fn fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `save` fail.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// The currently stored document, if any.
    pub fn document(&self) -> Option<Value> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Value>> {
        self.doc.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn load(&self) -> Result<LoadOutcome, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        match self.lock().clone() {
            None => Ok(LoadOutcome::NoContent),
            Some(doc) => Ok(outcome_from_body(doc)),
        }
    }

    async fn save(&self, doc: &Value) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable);
        }
        *self.lock() = Some(doc.clone());
        Ok(())
    }
}
