//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Each action is one remote call on its own tokio task. The task reports
//! back with exactly one success or failure message.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use maestro_client::{fetch_domain, fetch_domains, fetch_process, patch_process, ResourceClient};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::state::ViewError;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: ResourceClient + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = execute_action(action, client.as_ref()).await;
        if msg_tx.send(message).await.is_err() {
            // Receiver gone: the session is shutting down.
            debug!("Dropping action result, message channel closed");
        }
    });
}

/// Run an action to completion and turn its outcome into a message.
pub async fn execute_action<C>(action: UpdateAction, client: &C) -> Message
where
    C: ResourceClient + Sync,
{
    match action {
        UpdateAction::LoadTree => match fetch_domains(client).await {
            Ok(domains) => Message::TreeLoaded { domains },
            Err(e) => {
                warn!("GET /domains/ failed: {}", e);
                Message::TreeLoadFailed {
                    error: ViewError::from(e),
                }
            }
        },

        UpdateAction::FetchDomain { key } => match fetch_domain(client, &key).await {
            Ok(domain) => Message::DomainLoaded {
                key,
                domain: Box::new(domain),
            },
            Err(e) => Message::DomainLoadFailed {
                key,
                error: ViewError::from(e),
            },
        },

        UpdateAction::FetchProcess { key, seq } => match fetch_process(client, &key).await {
            Ok(record) => Message::ProcessReceived {
                key,
                seq,
                record: Box::new(record),
            },
            Err(e) => Message::ProcessRequestFailed {
                key,
                seq,
                error: ViewError::from(e),
            },
        },

        UpdateAction::PatchProcess { key, seq, patch } => {
            match patch_process(client, &key, &patch).await {
                Ok(record) => Message::ProcessReceived {
                    key,
                    seq,
                    record: Box::new(record),
                },
                Err(e) => Message::ProcessRequestFailed {
                    key,
                    seq,
                    error: ViewError::from(e),
                },
            }
        }
    }
}
