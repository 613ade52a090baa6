//! Application state (Model in TEA pattern)

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use maestro_core::{AgentRecord, DisplayState, DomainRecord, Error, ProcessRecord, TreeNode};

use crate::config::{OrderingPolicy, Settings};
use crate::router::{Navigation, Route};
use crate::tree_model::TreeModel;

// ─────────────────────────────────────────────────────────────────────────────
// Errors shown in views
// ─────────────────────────────────────────────────────────────────────────────

/// A failed remote call, as shown in the view that issued it.
///
/// `kind` keeps transport, HTTP status and parse failures apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewError {
    pub kind: String,
    pub message: String,
}

impl ViewError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl From<&Error> for ViewError {
    fn from(err: &Error) -> Self {
        Self::new(err.kind_label(), err.to_string())
    }
}

impl From<Error> for ViewError {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tree view
// ─────────────────────────────────────────────────────────────────────────────

/// A node as it appears in the flattened, scrollable tree list.
#[derive(Debug, Clone)]
pub struct VisibleNode<'a> {
    /// Child-index path from the roots.
    pub path: Vec<usize>,
    pub depth: usize,
    pub node: &'a TreeNode,
}

/// Expansion, highlight and output of the tree panel.
#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    /// Expanded nodes by index path. Collapsed by default.
    pub expanded: HashSet<Vec<usize>>,

    /// Index of the highlighted visible node (0-based flat list position).
    pub selected_index: usize,

    /// Output of the last selection.
    pub output: DisplayState,
}

impl TreeViewState {
    pub fn is_expanded(&self, path: &[usize]) -> bool {
        self.expanded.contains(path)
    }

    /// Flatten `roots` according to the expanded set, in pre-order.
    pub fn visible_nodes<'a>(&self, roots: &'a [TreeNode]) -> Vec<VisibleNode<'a>> {
        let mut result = Vec::new();
        for (index, root) in roots.iter().enumerate() {
            self.collect_visible(root, vec![index], &mut result);
        }
        result
    }

    fn collect_visible<'a>(
        &self,
        node: &'a TreeNode,
        path: Vec<usize>,
        result: &mut Vec<VisibleNode<'a>>,
    ) {
        let expanded = self.is_expanded(&path);
        result.push(VisibleNode {
            path: path.clone(),
            depth: path.len() - 1,
            node,
        });
        if expanded {
            for (index, child) in node.children.iter().enumerate() {
                let mut child_path = path.clone();
                child_path.push(index);
                self.collect_visible(child, child_path, result);
            }
        }
    }

    /// Index path of the highlighted node.
    pub fn selected_path(&self, roots: &[TreeNode]) -> Option<Vec<usize>> {
        self.visible_nodes(roots)
            .into_iter()
            .nth(self.selected_index)
            .map(|v| v.path)
    }

    /// Forget expansion and highlight (the tree was replaced).
    pub fn reset(&mut self) {
        self.expanded.clear();
        self.selected_index = 0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain detail
// ─────────────────────────────────────────────────────────────────────────────

/// View model of the domain detail view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DomainDetailState {
    pub key: Option<String>,
    pub record: Option<DomainRecord>,
    pub loading: bool,
    pub error: Option<ViewError>,
}

impl DomainDetailState {
    /// Point the view at `key`. A different key drops the old record.
    pub fn activate(&mut self, key: &str) {
        if self.key.as_deref() != Some(key) {
            self.key = Some(key.to_string());
            self.record = None;
            self.error = None;
        }
        self.loading = true;
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Process detail
// ─────────────────────────────────────────────────────────────────────────────

/// Lifecycle of the process detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessPhase {
    /// No process opened yet
    #[default]
    Idle,
    /// GET in flight with nothing to show yet
    Loading,
    Loaded,
    /// PATCH in flight; the previous record is still shown
    Updating,
    /// Last response was a failure; the previous record (if any) is kept
    Failed,
}

/// View model of the process detail view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessDetailState {
    pub key: Option<String>,
    pub record: Option<ProcessRecord>,
    pub phase: ProcessPhase,
    pub error: Option<ViewError>,

    #[serde(skip)]
    pub ordering: OrderingPolicy,

    /// Sequence number of the most recently issued request.
    #[serde(skip)]
    latest_seq: u64,

    /// Requests issued for the active key with no response yet.
    #[serde(skip)]
    pending: usize,
}

impl ProcessDetailState {
    pub fn new(ordering: OrderingPolicy) -> Self {
        Self {
            ordering,
            ..Default::default()
        }
    }

    /// Point the view at `key`. A different key drops the old record and
    /// forgets requests issued for it.
    pub fn activate(&mut self, key: &str) {
        if self.key.as_deref() != Some(key) {
            self.key = Some(key.to_string());
            self.record = None;
            self.error = None;
            self.pending = 0;
            self.phase = ProcessPhase::Idle;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Register a new request and return its sequence number.
    ///
    /// `patch` selects `Updating` over `Loading`.
    pub fn issue_request(&mut self, patch: bool) -> u64 {
        self.latest_seq += 1;
        self.pending += 1;
        self.phase = if patch || self.phase == ProcessPhase::Updating {
            ProcessPhase::Updating
        } else {
            ProcessPhase::Loading
        };
        self.latest_seq
    }

    /// Whether a response for `key` tagged `seq` may be applied.
    ///
    /// Always counts the response against the in-flight total when it
    /// belongs to the active key.
    pub fn accept_response(&mut self, key: &str, seq: u64) -> bool {
        if !self.is_active(key) {
            return false;
        }
        self.pending = self.pending.saturating_sub(1);
        match self.ordering {
            OrderingPolicy::LastResponse => true,
            OrderingPolicy::LastRequest => seq >= self.latest_seq,
        }
    }

    /// Replace the record with a server response.
    pub fn apply_record(&mut self, record: ProcessRecord) {
        self.record = Some(record);
        self.error = None;
        self.settle(ProcessPhase::Loaded);
    }

    /// Show a failure and keep the last good record.
    pub fn apply_failure(&mut self, error: ViewError) {
        self.error = Some(error);
        self.settle(ProcessPhase::Failed);
    }

    /// Leave the in-flight phase once nothing is outstanding.
    fn settle(&mut self, done: ProcessPhase) {
        if self.pending == 0 {
            self.phase = done;
        }
    }

    /// Called when a response was discarded, so the phase does not hang.
    pub fn settle_discarded(&mut self) {
        if self.pending == 0 && matches!(self.phase, ProcessPhase::Loading | ProcessPhase::Updating)
        {
            self.phase = if self.error.is_some() {
                ProcessPhase::Failed
            } else if self.record.is_some() {
                ProcessPhase::Loaded
            } else {
                ProcessPhase::Idle
            };
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Agent detail
// ─────────────────────────────────────────────────────────────────────────────

/// View model of the agent detail view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentDetailState {
    pub key: Option<String>,
    pub record: Option<AgentRecord>,
    /// The record is the built-in sample agent, not a loaded one.
    pub from_fixture: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// AppState
// ─────────────────────────────────────────────────────────────────────────────

/// Current application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub nav: Navigation,
    pub tree: TreeModel,
    pub tree_view: TreeViewState,
    pub domain: DomainDetailState,
    pub process: ProcessDetailState,
    pub agent: AgentDetailState,
    /// Where the data comes from, shown in the header.
    pub source_label: String,
    /// Animation frame counter for loading indicators.
    pub tick: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        let tree = TreeModel::new(settings.tree.source);
        let process = ProcessDetailState::new(settings.process.ordering);
        Self {
            phase: AppPhase::Running,
            nav: Navigation::default(),
            tree,
            tree_view: TreeViewState::default(),
            domain: DomainDetailState::default(),
            process,
            agent: AgentDetailState::default(),
            source_label: String::new(),
            tick: 0,
            settings,
        }
    }

    pub fn route(&self) -> &Route {
        &self.nav.current
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Whether any remote call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.tree.loading || self.domain.loading || self.process.is_busy()
    }

    /// Visible tree nodes for the current roots.
    pub fn visible_nodes(&self) -> Vec<VisibleNode<'_>> {
        self.tree_view.visible_nodes(&self.tree.roots)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree_model::demo_tree;

    #[test]
    fn test_visible_nodes_collapsed_by_default() {
        let roots = demo_tree();
        let view = TreeViewState::default();
        let visible = view.visible_nodes(&roots);
        let labels: Vec<_> = visible.iter().map(|v| v.node.label.as_str()).collect();
        assert_eq!(labels, ["Animal", "Vegetable"]);
    }

    #[test]
    fn test_visible_nodes_follow_expansion() {
        let roots = demo_tree();
        let mut view = TreeViewState::default();
        view.expanded.insert(vec![0]);
        let visible = view.visible_nodes(&roots);
        let labels: Vec<_> = visible.iter().map(|v| v.node.label.as_str()).collect();
        assert_eq!(labels, ["Animal", "Dog", "Cat", "Fish", "Vegetable"]);
        assert_eq!(visible[1].depth, 1);
        assert_eq!(visible[3].path, vec![0, 2]);

        view.selected_index = 4;
        assert_eq!(view.selected_path(&roots), Some(vec![1]));
    }

    #[test]
    fn test_view_error_from_error_keeps_kind() {
        let err = ViewError::from(&Error::http_status(500, "boom"));
        assert_eq!(err.kind, "http");
        assert!(err.message.contains("500"));
        assert_eq!(
            err.to_string(),
            "[http] maestro API returned HTTP 500: boom"
        );
    }

    #[test]
    fn test_process_state_last_response_applies_all() {
        let mut process = ProcessDetailState::new(OrderingPolicy::LastResponse);
        process.activate("k");
        let first = process.issue_request(true);
        let second = process.issue_request(true);

        assert!(process.accept_response("k", second));
        assert!(process.accept_response("k", first));
        assert_eq!(process.pending(), 0);
    }

    #[test]
    fn test_process_state_last_request_discards_stale() {
        let mut process = ProcessDetailState::new(OrderingPolicy::LastRequest);
        process.activate("k");
        let first = process.issue_request(true);
        let second = process.issue_request(true);

        assert!(process.accept_response("k", second));
        assert!(!process.accept_response("k", first));
        assert_eq!(process.pending(), 0);
    }

    #[test]
    fn test_process_state_ignores_other_keys() {
        let mut process = ProcessDetailState::default();
        process.activate("k");
        let seq = process.issue_request(false);
        assert_eq!(process.phase, ProcessPhase::Loading);

        assert!(!process.accept_response("other", seq));
        assert_eq!(process.pending(), 1);
    }

    #[test]
    fn test_process_failure_keeps_record() {
        let mut process = ProcessDetailState::default();
        process.activate("k");
        process.issue_request(false);
        assert!(process.accept_response("k", 1));
        process.apply_record(ProcessRecord {
            pid: 6116,
            ..Default::default()
        });
        assert_eq!(process.phase, ProcessPhase::Loaded);

        let seq = process.issue_request(true);
        assert_eq!(process.phase, ProcessPhase::Updating);
        assert!(process.accept_response("k", seq));
        process.apply_failure(ViewError::new("transport", "refused"));

        assert_eq!(process.phase, ProcessPhase::Failed);
        assert_eq!(process.record.as_ref().unwrap().pid, 6116);
        assert!(process.error.is_some());
    }
}
