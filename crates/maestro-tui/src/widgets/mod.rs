//! Widget components for the maestro console

mod agent_panel;
mod domain_panel;
mod header;
mod process_panel;
mod splash_panel;
mod status_bar;
mod tree_panel;

pub use agent_panel::AgentPanel;
pub use domain_panel::DomainPanel;
pub use header::MainHeader;
pub use process_panel::ProcessPanel;
pub use splash_panel::SplashPanel;
pub use status_bar::StatusBar;
pub use tree_panel::TreePanel;

use maestro_app::ViewError;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Spinner frame for the current tick.
pub(crate) fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick as usize / 2) % SPINNER_FRAMES.len()]
}

/// Cut `s` to at most `max_width` terminal columns.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}

/// A `Name = value` row using the record's wire field name.
pub(crate) fn field_line(
    name: &'static str,
    value: impl Into<String>,
    style: Style,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<13}"), styles::text_secondary()),
        Span::styled("= ", styles::text_muted()),
        Span::styled(value.into(), style),
    ])
}

/// The error row shown under a detail view.
pub(crate) fn error_line(error: &ViewError) -> Line<'static> {
    Line::from(vec![
        Span::styled("✗ ", styles::error_line()),
        Span::styled(error.to_string(), styles::error_line()),
    ])
}
