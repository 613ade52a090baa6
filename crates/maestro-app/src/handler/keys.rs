//! Key event handlers

use crate::input_key::InputKey;
use crate::message::{Message, TreeNav};
use crate::router::Route;
use crate::state::AppState;

/// Convert key events to messages based on the current route
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_force_quit() {
        return Some(Message::Quit);
    }

    if let Some(msg) = handle_key_tree(key) {
        return Some(msg);
    }

    match state.route() {
        Route::ProcessDetail { .. } => handle_key_process(key),
        _ => None,
    }
    .or_else(|| handle_key_global(state, key))
}

/// Tree panel keys, active in every view.
fn handle_key_tree(key: InputKey) -> Option<Message> {
    let nav = match key {
        InputKey::Up | InputKey::Char('k') => TreeNav::Up,
        InputKey::Down | InputKey::Char('j') => TreeNav::Down,
        InputKey::Right | InputKey::Char('l') => TreeNav::Expand,
        InputKey::Left | InputKey::Char('h') => TreeNav::Collapse,
        InputKey::Home | InputKey::Char('g') => TreeNav::First,
        InputKey::End | InputKey::Char('G') => TreeNav::Last,
        InputKey::PageUp => TreeNav::PageUp,
        InputKey::PageDown => TreeNav::PageDown,
        InputKey::Enter => return Some(Message::SelectNode),
        _ => return None,
    };
    Some(Message::TreeNavigate(nav))
}

/// Process detail actions
fn handle_key_process(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('s') => Some(Message::StartProcess),
        InputKey::Char('x') => Some(Message::StopProcess),
        _ => None,
    }
}

fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('r') => Some(Message::Refresh),
        InputKey::Backspace => Some(Message::NavigateBack),
        InputKey::Char('q') => Some(Message::Quit),
        // Esc leaves a detail view first, then quits from the tree.
        InputKey::Esc => match state.route() {
            Route::Splash => Some(Message::Quit),
            _ => Some(Message::Navigate(Route::Splash.path())),
        },
        _ => None,
    }
}
