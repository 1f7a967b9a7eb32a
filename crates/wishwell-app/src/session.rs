//! Edit session state machine.
//!
//! Two states, one effectful transition: leaving edit mode always
//! carries a save of the current document. Entering edit mode has no
//! side effect. There is no other transition, so illegal ones cannot be
//! expressed.

use wishwell_content::CampaignContent;

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Viewing,
    Editing,
}

/// What the caller must do after a toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Persist this snapshot. On failure the caller alerts the operator
    /// and keeps its in-memory state; the session is back in `Viewing`
    /// regardless.
    Save(CampaignContent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditSession {
    mode: Mode,
}

impl EditSession {
    pub fn new() -> Self {
        Self { mode: Mode::Viewing }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    /// Flips the mode, returning the effect the transition carries.
    pub fn toggle(&mut self, state: &AppState) -> Effect {
        match self.mode {
            Mode::Viewing => {
                self.mode = Mode::Editing;
                Effect::None
            }
            Mode::Editing => {
                self.mode = Mode::Viewing;
                Effect::Save(state.content().clone())
            }
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
