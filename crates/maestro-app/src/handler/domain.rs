//! Domain detail handlers.

use maestro_core::prelude::*;
use maestro_core::DomainRecord;

use crate::handler::UpdateResult;
use crate::state::{AppState, ViewError};

/// Replace the domain view model with a fetched record.
///
/// Responses for a key the view no longer shows are dropped.
pub fn handle_domain_loaded(state: &mut AppState, key: &str, domain: DomainRecord) -> UpdateResult {
    if !state.domain.is_active(key) {
        debug!("Dropping domain response for inactive key {}", key);
        return UpdateResult::none();
    }
    state.domain.record = Some(domain);
    state.domain.loading = false;
    state.domain.error = None;
    UpdateResult::none()
}

/// Show a failed domain fetch. The last good record is kept.
pub fn handle_domain_load_failed(
    state: &mut AppState,
    key: &str,
    error: ViewError,
) -> UpdateResult {
    if !state.domain.is_active(key) {
        return UpdateResult::none();
    }
    warn!("Failed to load domain {}: {}", key, error);
    state.domain.loading = false;
    state.domain.error = Some(error);
    UpdateResult::none()
}
