//! Route changes.
//!
//! Entering a route activates the view that owns it. Domain and process
//! views fetch on activation; the agent view resolves from loaded data.

use maestro_client::demo_agent;
use maestro_core::prelude::*;

use crate::handler::{UpdateAction, UpdateResult};
use crate::router::Route;
use crate::state::AppState;

use super::{process, tree};

/// Open a navigation path. Unmatched paths redirect to `/`.
pub fn handle_navigate(state: &mut AppState, path: &str) -> UpdateResult {
    let route = match Route::matched(path) {
        Some(route) => route,
        None => {
            warn!("No route for {:?}, redirecting to /", path);
            Route::Splash
        }
    };

    if !state.nav.push(route) {
        return UpdateResult::none();
    }
    debug!("Navigated to {}", state.route());
    activate(state)
}

/// Return to the previous route.
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    if state.nav.back().is_none() {
        return UpdateResult::none();
    }
    debug!("Back to {}", state.route());
    activate(state)
}

/// Re-run the current view's data load.
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    if *state.route() != Route::Splash {
        return activate(state);
    }
    match tree::start_load(state) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}

/// Activate the view for the current route.
fn activate(state: &mut AppState) -> UpdateResult {
    match state.route().clone() {
        Route::Splash => UpdateResult::none(),
        Route::DomainDetail { key } => {
            state.domain.activate(&key);
            UpdateResult::action(UpdateAction::FetchDomain { key })
        }
        Route::ProcessDetail { key } => {
            state.process.activate(&key);
            process::get_process_data(state)
        }
        Route::AgentDetail { key } => {
            resolve_agent(state, &key);
            UpdateResult::none()
        }
    }
}

/// Fill the agent view from the loaded domains, falling back to the sample
/// agent when no domain has `key`.
pub(crate) fn resolve_agent(state: &mut AppState, key: &str) {
    let found = state.tree.find_agent(key).cloned();
    state.agent.from_fixture = found.is_none();
    if found.is_none() {
        debug!("Agent {} not in loaded domains, showing sample agent", key);
    }
    state.agent.record = Some(found.unwrap_or_else(demo_agent));
    state.agent.key = Some(key.to_string());
}
