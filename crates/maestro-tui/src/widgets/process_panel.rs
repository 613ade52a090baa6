//! Process detail panel: the record as served, its phase and the
//! start/stop controls.

use maestro_app::state::ProcessDetailState;
use maestro_core::ProcessRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{error_line, field_line, spinner};
use crate::theme::styles;

pub struct ProcessPanel<'a> {
    state: &'a ProcessDetailState,
    show_key_paths: bool,
    focused: bool,
    tick: u64,
}

impl<'a> ProcessPanel<'a> {
    pub fn new(state: &'a ProcessDetailState) -> Self {
        Self {
            state,
            show_key_paths: true,
            focused: true,
            tick: 0,
        }
    }

    pub fn show_key_paths(mut self, show: bool) -> Self {
        self.show_key_paths = show;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn phase_line(&self) -> Line<'static> {
        let (icon, label, style) = styles::phase_indicator(self.state.phase);
        let mut spans = vec![Span::styled(format!("{icon} {label}"), style)];
        if self.state.is_busy() {
            spans.push(Span::styled(format!(" {}", spinner(self.tick)), style));
        }
        Line::from(spans)
    }

    fn record_lines(&self, record: &ProcessRecord) -> Vec<Line<'static>> {
        let mut lines = vec![
            field_line("Name", record.name.clone(), styles::text_bright()),
            field_line("Pid", record.pid.to_string(), styles::text_primary()),
            field_line(
                "AdminState",
                record.admin_state.to_string(),
                styles::run_state(&record.admin_state),
            ),
            field_line(
                "OperState",
                record.oper_state.to_string(),
                styles::run_state(&record.oper_state),
            ),
            field_line("Command", record.command_line(), styles::text_primary()),
            field_line("ProcessClass", record.process_class.clone(), styles::text_primary()),
            field_line("Key", record.key.clone(), styles::text_muted()),
        ];
        if self.show_key_paths {
            if let Some(path) = record.key_path() {
                lines.push(field_line("Path", path, styles::text_muted()));
            }
        }
        lines
    }

    /// Panel content, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![self.phase_line(), Line::default()];

        match &self.state.record {
            Some(record) => lines.extend(self.record_lines(record)),
            None if self.state.key.is_none() => {
                lines.push(Line::styled("No process selected", styles::text_muted()));
            }
            None if self.state.is_busy() => {
                lines.push(Line::styled("Loading process...", styles::text_muted()));
            }
            None => {}
        }

        if let Some(error) = &self.state.error {
            lines.push(Line::default());
            lines.push(error_line(error));
        }

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[s]", styles::keybinding()),
            Span::styled(" start  ", styles::text_secondary()),
            Span::styled("[x]", styles::keybinding()),
            Span::styled(" stop  ", styles::text_secondary()),
            Span::styled("[r]", styles::keybinding()),
            Span::styled(" refresh", styles::text_secondary()),
        ]));
        lines
    }
}

impl Widget for ProcessPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.state.record {
            Some(record) if !record.name.is_empty() => format!(" Process {} ", record.name),
            _ => " Process ".to_string(),
        };
        let block = styles::glass_block(self.focused).title(Span::styled(title, styles::accent()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
