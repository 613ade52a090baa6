//! Message processing: run a message through update and dispatch the
//! resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use maestro_client::ResourceClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are spawned and
/// report back through `msg_tx`.
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: ResourceClient + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, TreeSource};
    use maestro_client::{FixtureResourceClient, Method};

    #[tokio::test]
    async fn test_init_loads_tree_through_client() {
        let client = Arc::new(FixtureResourceClient::demo());
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::with_settings(Settings::default());
        assert_eq!(state.tree.source, TreeSource::Live);

        process_message(
            &mut state,
            Message::Init {
                initial_path: "/".into(),
            },
            &tx,
            &client,
        );
        assert!(state.tree.loading);

        let reply = rx.recv().await.unwrap();
        assert!(matches!(reply, Message::TreeLoaded { .. }));
        process_message(&mut state, reply, &tx, &client);

        assert!(!state.tree.loading);
        assert_eq!(state.tree.roots.len(), 1);
        assert_eq!(client.requests_with(Method::Get).len(), 1);
    }
}
