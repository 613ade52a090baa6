//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers
//! - `navigation`: Route activation and history
//! - `tree`: Tree navigation, selection and loading
//! - `domain`: Domain detail fetch results
//! - `process`: Process detail fetch, start/stop and ordering

pub(crate) mod domain;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod process;
pub(crate) mod tree;
pub(crate) mod update;


use maestro_core::ProcessPatch;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Remote work for the event loop to run after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// `GET /domains/` and rebuild the tree
    LoadTree,

    /// `GET /domains/{key}`
    FetchDomain { key: String },

    /// `GET /processes/{key}`, tagged with the request's sequence number
    FetchProcess { key: String, seq: u64 },

    /// `PATCH /processes/{key}` with a partial state
    PatchProcess {
        key: String,
        seq: u64,
        patch: ProcessPatch,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
