//! Application layer for wishwell.
//!
//! Ties the content model to the store: loading with degrade-to-defaults
//! semantics, saving on leaving edit mode, the app-state container, and
//! the small derived behaviors the page needs (countdown breakdown,
//! image intake, upload slot bookkeeping).

pub mod countdown;
pub mod intake;
pub mod session;
pub mod state;
pub mod sync;
pub mod upload;

pub use countdown::TimeLeft;
pub use intake::{scaled_dimensions, shrink_to_width, IntakeError, IntakeProfile};
pub use session::{EditSession, Effect, Mode};
pub use state::AppState;
pub use sync::{load_content, save_content, SaveError};
pub use upload::UploadSlot;
