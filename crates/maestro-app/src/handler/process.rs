//! Process detail handlers.
//!
//! Every request for the active process carries a sequence number. Whether
//! a late response may overwrite a newer one depends on
//! [`OrderingPolicy`](crate::config::OrderingPolicy); the record shown is
//! always a server response, never computed locally.

use maestro_core::prelude::*;
use maestro_core::{ProcessPatch, ProcessRecord};

use crate::handler::{UpdateAction, UpdateResult};
use crate::router::Route;
use crate::state::{AppState, ViewError};

/// `GET /processes/{key}` for the active process.
pub fn get_process_data(state: &mut AppState) -> UpdateResult {
    let Some(key) = state.process.key.clone() else {
        return UpdateResult::none();
    };
    let seq = state.process.issue_request(false);
    UpdateResult::action(UpdateAction::FetchProcess { key, seq })
}

pub fn handle_start(state: &mut AppState) -> UpdateResult {
    send_patch(state, ProcessPatch::start())
}

pub fn handle_stop(state: &mut AppState) -> UpdateResult {
    send_patch(state, ProcessPatch::stop())
}

/// Issue exactly one PATCH for the process shown by the current route.
fn send_patch(state: &mut AppState, patch: ProcessPatch) -> UpdateResult {
    let Route::ProcessDetail { key } = state.route().clone() else {
        return UpdateResult::none();
    };
    if !state.process.is_active(&key) {
        return UpdateResult::none();
    }
    info!("Setting AdminState={} for process {}", patch.admin_state, key);
    let seq = state.process.issue_request(true);
    UpdateResult::action(UpdateAction::PatchProcess { key, seq, patch })
}

/// Apply a record returned by a GET or PATCH.
pub fn handle_process_received(
    state: &mut AppState,
    key: &str,
    seq: u64,
    record: ProcessRecord,
) -> UpdateResult {
    if !state.process.accept_response(key, seq) {
        debug!(
            "Discarding process response #{} for {} (latest #{})",
            seq,
            key,
            state.process.latest_seq()
        );
        state.process.settle_discarded();
        return UpdateResult::none();
    }
    state.process.apply_record(record);
    UpdateResult::none()
}

/// Show a failed GET or PATCH. The last good record is kept.
pub fn handle_process_failed(
    state: &mut AppState,
    key: &str,
    seq: u64,
    error: ViewError,
) -> UpdateResult {
    if !state.process.accept_response(key, seq) {
        debug!("Discarding process failure #{} for {}", seq, key);
        state.process.settle_discarded();
        return UpdateResult::none();
    }
    warn!("Process request #{} for {} failed: {}", seq, key, error);
    state.process.apply_failure(error);
    UpdateResult::none()
}
