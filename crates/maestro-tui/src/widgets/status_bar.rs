//! Status bar: busy indicator, route-specific key hints and history depth.

use maestro_app::{AppState, Route};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::spinner;
use crate::theme::{palette, styles};

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn state_indicator(&self) -> Span<'static> {
        if self.state.is_busy() {
            Span::styled(
                format!("{} Working", spinner(self.state.tick)),
                Style::default().fg(palette::STATUS_YELLOW),
            )
        } else {
            Span::styled("● Ready", Style::default().fg(palette::STATUS_GREEN))
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.route() {
            Route::Splash => "Enter select  r reload  q quit",
            Route::ProcessDetail { .. } => "s start  x stop  r refresh  Esc tree  ⌫ back",
            Route::DomainDetail { .. } => "r refresh  Esc tree  ⌫ back",
            Route::AgentDetail { .. } => "Esc tree  ⌫ back",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            self.state_indicator(),
            Span::styled(" │ ", styles::text_muted()),
            Span::styled(self.hints(), styles::text_secondary()),
        ];
        let depth = self.state.nav.depth();
        if depth > 0 {
            spans.push(Span::styled(" │ ", styles::text_muted()));
            spans.push(Span::styled(format!("history {depth}"), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
