//! Tree panel handlers.
//!
//! Navigation mirrors a file tree: Up/Down move the highlight, Expand opens
//! the highlighted node, Collapse closes it or jumps to its parent. Choosing
//! a node writes its selection output and, for live nodes, opens the node's
//! detail route.

use maestro_core::prelude::*;
use maestro_core::{node_at, select, DomainRecord};

use crate::handler::{UpdateAction, UpdateResult};
use crate::message::{Message, TreeNav, TREE_PAGE_ROWS};
use crate::router::Route;
use crate::state::{AppState, ViewError};

use super::navigation::resolve_agent;

/// Begin loading the tree. Returns the fetch to run, or `None` for the demo
/// tree or when a load is already in flight.
pub fn start_load(state: &mut AppState) -> Option<UpdateAction> {
    if !state.tree.is_live() || state.tree.loading {
        return None;
    }
    state.tree.start_loading();
    Some(UpdateAction::LoadTree)
}

/// Handle tree navigation (Up/Down/Expand/Collapse/First/Last/paging).
pub fn handle_tree_navigate(state: &mut AppState, nav: TreeNav) -> UpdateResult {
    let visible: Vec<(Vec<usize>, bool)> = state
        .visible_nodes()
        .into_iter()
        .map(|v| (v.path, v.node.has_children()))
        .collect();
    let count = visible.len();
    if count == 0 {
        return UpdateResult::none();
    }

    let view = &mut state.tree_view;
    view.selected_index = view.selected_index.min(count - 1);
    let (path, has_children) = visible[view.selected_index].clone();

    match nav {
        TreeNav::Up => {
            view.selected_index = view.selected_index.saturating_sub(1);
        }
        TreeNav::Down => {
            if view.selected_index < count - 1 {
                view.selected_index += 1;
            }
        }
        TreeNav::First => view.selected_index = 0,
        TreeNav::Last => view.selected_index = count - 1,
        TreeNav::PageUp => {
            view.selected_index = view.selected_index.saturating_sub(TREE_PAGE_ROWS);
        }
        TreeNav::PageDown => {
            view.selected_index = (view.selected_index + TREE_PAGE_ROWS).min(count - 1);
        }
        TreeNav::Expand => {
            if has_children {
                view.expanded.insert(path);
            }
        }
        TreeNav::Collapse => {
            if view.expanded.remove(&path) {
                return UpdateResult::none();
            }
            // Already collapsed: move to the parent.
            if path.len() > 1 {
                let parent = &path[..path.len() - 1];
                if let Some(index) = visible.iter().position(|(p, _)| p.as_slice() == parent) {
                    view.selected_index = index;
                }
            }
        }
    }

    UpdateResult::none()
}

/// Choose the highlighted node.
pub fn handle_select_node(state: &mut AppState) -> UpdateResult {
    let Some(path) = state.tree_view.selected_path(&state.tree.roots) else {
        return UpdateResult::none();
    };
    let Some(node) = node_at(&state.tree.roots, &path) else {
        return UpdateResult::none();
    };

    let selection = select(node);
    debug!("Selected {:?}: {}", path, selection.output);
    let target = node.target.clone();
    state.tree_view.output = selection;

    match target {
        Some(target) => UpdateResult::message(Message::Navigate(target)),
        None => UpdateResult::none(),
    }
}

/// Handle a successful `/domains/` fetch.
pub fn handle_tree_loaded(state: &mut AppState, domains: Vec<DomainRecord>) -> UpdateResult {
    info!("Loaded {} domain(s)", domains.len());
    state.tree.apply_domains(domains);
    state.tree_view.reset();

    // The agent view may have fallen back to the sample agent before the
    // domains arrived.
    if let Route::AgentDetail { key } = state.route().clone() {
        resolve_agent(state, &key);
    }

    UpdateResult::none()
}

/// Handle a failed `/domains/` fetch. The previous tree stays visible.
pub fn handle_tree_load_failed(state: &mut AppState, error: ViewError) -> UpdateResult {
    warn!("Failed to load domains: {}", error);
    state.tree.apply_failure(error);
    UpdateResult::none()
}
