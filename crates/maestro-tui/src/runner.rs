//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use maestro_app::config::Settings;
use maestro_app::process::process_message;
use maestro_app::signals;
use maestro_app::{AppState, Message};
use maestro_client::{ApiClient, ResourceClient};
use maestro_core::prelude::*;

use super::{event, render, terminal};

/// Capacity of the message channel shared by signals and remote calls.
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the console until the user quits.
///
/// `initial_path` is resolved by the router once the tree starts loading.
pub async fn run(settings: Settings, client: ApiClient, initial_path: String) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings);
    state.source_label = client.describe();
    info!(
        "Starting console: source={}, tree={}, route={}",
        state.source_label, state.tree.source, initial_path
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    let client = Arc::new(client);
    process_message(&mut state, Message::Init { initial_path }, &msg_tx, &client);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);

    ratatui::restore();
    info!("Console stopped");
    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<C>,
) -> Result<()>
where
    C: ResourceClient + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Replies from remote calls and the signal handler
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &client);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(format!("draw failed: {e}")))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &client);
        }
    }

    Ok(())
}
