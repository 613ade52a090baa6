//! maestro-app - Application state and orchestration for the maestro console
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a
//! [`Message`] goes through [`handler::update`], which mutates the
//! [`AppState`] and may return an [`UpdateAction`]. Actions are remote calls
//! run on background tasks that report back with new messages.
//!
//! The views it models:
//! - the navigation tree and its selection output ([`tree_model`])
//! - domain, process and agent detail, one per [`Route`]

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod router;
pub mod signals;
pub mod snapshot;
pub mod state;
pub mod tree_model;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, TreeNav};
pub use router::{Navigation, Route};
pub use snapshot::ViewSnapshot;
pub use state::{AppState, ProcessPhase, ViewError};
pub use tree_model::TreeModel;
