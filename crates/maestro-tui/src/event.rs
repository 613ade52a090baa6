//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use maestro_app::{InputKey, Message};
use maestro_core::prelude::*;
use std::time::Duration;

/// Poll timeout, also the tick period of the loading spinner.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None,
    }
}

/// Poll for terminal events with timeout
///
/// A timeout yields [`Message::Tick`].
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('s')));
    }

    #[test]
    fn test_ctrl_c_is_force_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let input = key_event_to_input(key).unwrap();
        assert_eq!(input, InputKey::CharCtrl('c'));
        assert!(input.is_force_quit());
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            Some(InputKey::Up)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)),
            Some(InputKey::Down)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            Some(InputKey::Left)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            Some(InputKey::Right)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputKey::Backspace)
        );
    }

    #[test]
    fn test_uppercase_letters() {
        let key = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char('G')));
    }

    #[test]
    fn test_unsupported_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Insert, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
        let key = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_paging_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)),
            Some(InputKey::PageUp)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE)),
            Some(InputKey::PageDown)
        );
    }
}
