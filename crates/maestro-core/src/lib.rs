//! # maestro-core - Core Domain Types
//!
//! Foundation crate for the maestro console. Provides the records served by
//! the maestro API, the navigation tree and its selection rule, node keys,
//! error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, base64).
//!
//! ## Public API
//!
//! ### Records (`records`)
//! - [`DomainRecord`], [`AgentRecord`], [`ProcessRecord`] - the maestro hierarchy
//! - [`RunState`] - `AdminState` / `OperState` values
//! - [`ProcessPatch`] - typed merge-patch body for start/stop
//!
//! ### Tree (`tree`)
//! - [`TreeNode`] - immutable navigation node
//! - [`OnSelect`] - default label rule or custom handler
//! - [`select()`] - derive the [`DisplayState`] for a chosen node
//!
//! ### Error Handling (`error`)
//! - [`Error`] - transport / HTTP status / parse failures plus infrastructure errors
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use maestro_core::prelude::*;
//! ```

pub mod error;
pub mod key;
pub mod logging;
pub mod records;
pub mod tree;

/// Prelude for common imports used throughout all maestro crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use key::{decode_key_path, encode_path_key};
pub use records::{
    AgentRecord, DomainRecord, ProcessPatch, ProcessRecord, RunState, RuntimeConfig, StaticConfig,
};
pub use tree::{default_label, node_at, select, DisplayState, OnSelect, SelectHandler, TreeNode};
