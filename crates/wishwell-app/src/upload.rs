//! Upload slot bookkeeping.
//!
//! Each upload control processes one file at a time and has to remember
//! which item the in-flight file is for. The slot holds that target and
//! is cleared on completion or failure, so a stale reference can never
//! redirect a later upload.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadSlot<T> {
    target: Option<T>,
}

impl<T> UploadSlot<T> {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Claims the slot for `target`. Returns `false` when an upload is
    /// already in flight; the new request is ignored, not queued.
    pub fn begin(&mut self, target: T) -> bool {
        if self.target.is_some() {
            return false;
        }
        self.target = Some(target);
        true
    }

    pub fn active(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Takes the target out, clearing the slot. Called on completion and
    /// on failure alike.
    pub fn take(&mut self) -> Option<T> {
        self.target.take()
    }
}
