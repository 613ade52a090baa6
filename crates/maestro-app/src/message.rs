//! Message types for the application (TEA pattern)

use maestro_core::{DomainRecord, ProcessRecord};

use crate::input_key::InputKey;
use crate::state::ViewError;

/// Movement within the tree panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeNav {
    Up,
    Down,
    /// Expand the selected node (no-op on leaves)
    Expand,
    /// Collapse the selected node, or move to its parent when already collapsed
    Collapse,
    First,
    Last,
    /// Move up by [`TREE_PAGE_ROWS`]
    PageUp,
    /// Move down by [`TREE_PAGE_ROWS`]
    PageDown,
}

/// Rows moved by one PageUp / PageDown in the tree.
pub const TREE_PAGE_ROWS: usize = 10;

/// All possible messages/events in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Request to quit the application
    Quit,

    /// First message of a session: load the tree and open `initial_path`.
    Init { initial_path: String },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Open a navigation path (`/`, `/domains/<key>`, ...)
    Navigate(String),
    /// Return to the previous route
    NavigateBack,
    /// Re-run the active view's fetch
    Refresh,

    // ─────────────────────────────────────────────────────────
    // Tree
    // ─────────────────────────────────────────────────────────
    TreeNavigate(TreeNav),
    /// Choose the highlighted node
    SelectNode,
    TreeLoaded {
        domains: Vec<DomainRecord>,
    },
    TreeLoadFailed {
        error: ViewError,
    },

    // ─────────────────────────────────────────────────────────
    // Domain detail
    // ─────────────────────────────────────────────────────────
    DomainLoaded {
        key: String,
        domain: Box<DomainRecord>,
    },
    DomainLoadFailed {
        key: String,
        error: ViewError,
    },

    // ─────────────────────────────────────────────────────────
    // Process detail
    // ─────────────────────────────────────────────────────────
    /// `AdminState: on` for the active process
    StartProcess,
    /// `AdminState: off` for the active process
    StopProcess,
    /// A GET or PATCH for a process returned a record.
    ProcessReceived {
        key: String,
        seq: u64,
        record: Box<ProcessRecord>,
    },
    ProcessRequestFailed {
        key: String,
        seq: u64,
        error: ViewError,
    },
}
