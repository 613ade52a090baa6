//! Headless mode runner - drive one route to a settled state

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{info, warn};

use maestro_app::config::Settings;
use maestro_app::process::process_message;
use maestro_app::{AppState, Message, ViewSnapshot};
use maestro_client::{ApiClient, ResourceClient};
use maestro_core::prelude::*;

use super::HeadlessEvent;

/// Upper bound on waiting for outstanding calls when no API timeout is set.
const SETTLE_LIMIT: Duration = Duration::from_secs(60);

/// Run in headless mode - print the settled view of `initial_path`
pub async fn run_headless(
    settings: Settings,
    client: ApiClient,
    initial_path: String,
) -> Result<()> {
    info!("Headless mode: route={}, source={}", initial_path, client.describe());

    match capture_view(settings, Arc::new(client), initial_path).await {
        Ok(view) => {
            HeadlessEvent::view(view).emit();
            Ok(())
        }
        Err(e) => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            Err(e)
        }
    }
}

/// Resolve `initial_path`, wait for its remote calls, and return the view as
/// JSON.
///
/// Remote failures are part of the view (its `error` fields); only a stalled
/// or closed message channel is an error here.
pub async fn capture_view<C>(
    settings: Settings,
    client: Arc<C>,
    initial_path: String,
) -> Result<Value>
where
    C: ResourceClient + Send + Sync + 'static,
{
    let limit = settings
        .api
        .timeout()
        .map(|t| t + Duration::from_secs(1))
        .unwrap_or(SETTLE_LIMIT);

    let mut state = AppState::with_settings(settings);
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(64);

    process_message(&mut state, Message::Init { initial_path }, &msg_tx, &client);

    while state.is_busy() {
        match tokio::time::timeout(limit, msg_rx.recv()).await {
            Ok(Some(msg)) => process_message(&mut state, msg, &msg_tx, &client),
            Ok(None) => return Err(Error::ChannelClosed),
            Err(_) => {
                warn!("Gave up waiting for responses after {:?}", limit);
                return Err(Error::transport(format!(
                    "no response within {}s",
                    limit.as_secs()
                )));
            }
        }
    }

    serde_json::to_value(ViewSnapshot::capture(&state))
        .context("Failed to serialize view snapshot")
}
