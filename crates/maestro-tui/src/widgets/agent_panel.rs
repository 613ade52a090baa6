//! Agent detail panel.

use maestro_app::state::AgentDetailState;
use maestro_core::{AgentRecord, ProcessRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::field_line;
use crate::theme::styles;

pub struct AgentPanel<'a> {
    state: &'a AgentDetailState,
    show_key_paths: bool,
    focused: bool,
}

impl<'a> AgentPanel<'a> {
    pub fn new(state: &'a AgentDetailState) -> Self {
        Self {
            state,
            show_key_paths: true,
            focused: true,
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

    fn process_line(process: &ProcessRecord) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<8}", process.name), styles::text_primary()),
            Span::styled(
                format!("{:<4}", process.admin_state.to_string()),
                styles::run_state(&process.admin_state),
            ),
            Span::styled("/", styles::text_muted()),
            Span::styled(
                format!("{:<4}", process.oper_state.to_string()),
                styles::run_state(&process.oper_state),
            ),
            Span::styled(format!(" Pid {}", process.pid), styles::text_secondary()),
        ])
    }

    fn record_lines(&self, record: &AgentRecord) -> Vec<Line<'static>> {
        let connection = if record.is_connected() {
            "connected"
        } else {
            "disconnected"
        };
        let mut lines = vec![
            field_line("Name", record.name.clone(), styles::text_bright()),
            field_line("AgentClass", record.agent_class.clone(), styles::text_primary()),
            field_line("OS", record.os.clone(), styles::text_primary()),
            field_line("Eph", connection, styles::text_secondary()),
            field_line("Key", record.key.clone(), styles::text_muted()),
        ];
        if self.show_key_paths {
            if let Some(path) = record.key_path() {
                lines.push(field_line("Path", path, styles::text_muted()));
            }
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Processes ({})", record.processes.len()),
            styles::text_secondary(),
        ));
        lines.extend(record.processes.iter().map(Self::process_line));
        lines
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = match &self.state.record {
            Some(record) => self.record_lines(record),
            None => vec![Line::styled("No agent selected", styles::text_muted())],
        };
        if self.state.from_fixture {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Sample agent: key not found in loaded domains",
                styles::text_muted(),
            ));
        }
        lines
    }
}

impl Widget for AgentPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(self.focused).title(Span::styled(" Agent ", styles::accent()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_client::demo_agent;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_agent_lists_processes() {
        let state = AgentDetailState {
            key: Some("k".into()),
            record: Some(demo_agent()),
            from_fixture: false,
        };
        let lines = text(&AgentPanel::new(&state).lines());

        assert!(lines.iter().any(|l| l.ends_with("= connected")));
        assert!(lines.iter().any(|l| l == "Processes (2)"));
        assert!(lines.iter().any(|l| l.contains("p01") && l.ends_with("Pid 6116")));
        assert!(!lines.iter().any(|l| l.starts_with("Sample agent")));
    }

    #[test]
    fn test_fixture_fallback_is_flagged() {
        let state = AgentDetailState {
            key: Some("unknown".into()),
            record: Some(demo_agent()),
            from_fixture: true,
        };
        let lines = text(&AgentPanel::new(&state).lines());
        assert!(lines.last().unwrap().starts_with("Sample agent"));
    }
}
