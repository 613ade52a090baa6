//! Semantic style builders.

use maestro_app::ProcessPhase;
use maestro_core::RunState;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY_HINT)
}

/// Style of the error line shown under a detail panel.
pub fn error_line() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

/// Rounded panel container; `focused` brightens the border.
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}

/// Color for an `AdminState` / `OperState` value.
pub fn run_state(state: &RunState) -> Style {
    match state {
        RunState::On => Style::default().fg(palette::STATUS_GREEN),
        RunState::Off => Style::default().fg(palette::STATUS_RED),
        RunState::Unset => text_muted(),
        RunState::Other(_) => Style::default().fg(palette::STATUS_YELLOW),
    }
}

/// Icon, label and style for the process view phase.
pub fn phase_indicator(phase: ProcessPhase) -> (&'static str, &'static str, Style) {
    match phase {
        ProcessPhase::Idle => ("○", "Idle", text_muted()),
        ProcessPhase::Loading => ("↻", "Loading", Style::default().fg(palette::STATUS_YELLOW)),
        ProcessPhase::Loaded => ("●", "Loaded", Style::default().fg(palette::STATUS_GREEN)),
        ProcessPhase::Updating => ("↻", "Updating", Style::default().fg(palette::STATUS_BLUE)),
        ProcessPhase::Failed => ("✗", "Failed", Style::default().fg(palette::STATUS_RED)),
    }
}
