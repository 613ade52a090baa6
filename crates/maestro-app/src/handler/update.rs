//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{domain, keys::handle_key, navigation, process, tree, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_busy() {
                state.tick = state.tick.wrapping_add(1);
            }
            UpdateResult::none()
        }

        Message::Init { initial_path } => {
            let load = tree::start_load(state);
            let open = Message::Navigate(initial_path);
            match load {
                Some(action) => UpdateResult::action(action).with_message(open),
                None => UpdateResult::message(open),
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(path) => navigation::handle_navigate(state, &path),
        Message::NavigateBack => navigation::handle_back(state),
        Message::Refresh => navigation::handle_refresh(state),

        // ─────────────────────────────────────────────────────────
        // Tree
        // ─────────────────────────────────────────────────────────
        Message::TreeNavigate(nav) => tree::handle_tree_navigate(state, nav),
        Message::SelectNode => tree::handle_select_node(state),
        Message::TreeLoaded { domains } => tree::handle_tree_loaded(state, domains),
        Message::TreeLoadFailed { error } => tree::handle_tree_load_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Domain detail
        // ─────────────────────────────────────────────────────────
        Message::DomainLoaded { key, domain } => domain::handle_domain_loaded(state, &key, *domain),
        Message::DomainLoadFailed { key, error } => {
            domain::handle_domain_load_failed(state, &key, error)
        }

        // ─────────────────────────────────────────────────────────
        // Process detail
        // ─────────────────────────────────────────────────────────
        Message::StartProcess => process::handle_start(state),
        Message::StopProcess => process::handle_stop(state),
        Message::ProcessReceived { key, seq, record } => {
            process::handle_process_received(state, &key, seq, *record)
        }
        Message::ProcessRequestFailed { key, seq, error } => {
            process::handle_process_failed(state, &key, seq, error)
        }
    }
}

/// Run a message and its follow-ups, collecting the actions produced.
#[cfg(test)]
pub(crate) fn update_all(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}
