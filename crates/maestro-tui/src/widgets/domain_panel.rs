//! Domain detail panel.

use maestro_app::state::DomainDetailState;
use maestro_core::{AgentRecord, DomainRecord};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{error_line, field_line, spinner};
use crate::theme::{palette, styles};

pub struct DomainPanel<'a> {
    state: &'a DomainDetailState,
    show_key_paths: bool,
    focused: bool,
    tick: u64,
}

impl<'a> DomainPanel<'a> {
    pub fn new(state: &'a DomainDetailState) -> Self {
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

    fn agent_line(agent: &AgentRecord) -> Line<'static> {
        let (icon, color) = if agent.is_connected() {
            ("●", palette::STATUS_GREEN)
        } else {
            ("○", palette::TEXT_MUTED)
        };
        Line::from(vec![
            Span::styled(format!("  {icon} "), Style::default().fg(color)),
            Span::styled(agent.name.clone(), styles::text_primary()),
            Span::styled(format!("  {}", agent.os), styles::text_muted()),
        ])
    }

    fn record_lines(&self, record: &DomainRecord) -> Vec<Line<'static>> {
        let mut lines = vec![
            field_line("Name", record.name.clone(), styles::text_bright()),
            field_line("Key", record.key.clone(), styles::text_muted()),
        ];
        if self.show_key_paths {
            if let Some(path) = record.key_path() {
                lines.push(field_line("Path", path, styles::text_muted()));
            }
        }
        lines.push(field_line(
            "Processes",
            record.process_count().to_string(),
            styles::text_primary(),
        ));

        lines.push(Line::default());
        lines.push(Line::styled(
            format!("Runtime agents ({})", record.runtime.agents.len()),
            styles::text_secondary(),
        ));
        lines.extend(record.runtime.agents.iter().map(Self::agent_line));

        lines.push(Line::styled(
            format!("Config agents ({})", record.config.agents.len()),
            styles::text_secondary(),
        ));
        lines.extend(record.config.agents.iter().map(Self::agent_line));
        lines
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        match &self.state.record {
            Some(record) => lines.extend(self.record_lines(record)),
            None if self.state.loading => lines.push(Line::styled(
                format!("Loading domain {}", spinner(self.tick)),
                styles::text_muted(),
            )),
            None => {}
        }
        if let Some(error) = &self.state.error {
            lines.push(Line::default());
            lines.push(error_line(error));
        }
        lines
    }
}

impl Widget for DomainPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut title = match &self.state.record {
            Some(record) => format!(" Domain {} ", record.name),
            None => " Domain ".to_string(),
        };
        if self.state.loading && self.state.record.is_some() {
            title.push_str(spinner(self.tick));
            title.push(' ');
        }
        let block = styles::glass_block(self.focused).title(Span::styled(title, styles::accent()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maestro_app::ViewError;
    use maestro_client::demo_domains;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn loaded() -> DomainDetailState {
        let domain = demo_domains().remove(0);
        let mut state = DomainDetailState::default();
        state.activate(&domain.key);
        state.record = Some(domain);
        state.loading = false;
        state
    }

    #[test]
    fn test_loaded_domain_lists_agents() {
        let state = loaded();
        let lines = text(&DomainPanel::new(&state).lines());

        assert!(lines[0].ends_with("= d01"));
        assert!(lines.iter().any(|l| l.ends_with("= /maestro/d01")));
        assert!(lines.iter().any(|l| l == "Runtime agents (1)"));
        assert!(lines.iter().any(|l| l.contains("● a01")));
    }

    #[test]
    fn test_loading_without_record() {
        let mut state = DomainDetailState::default();
        state.activate("L21hZXN0cm8vZDAx");
        let lines = text(&DomainPanel::new(&state).lines());
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Loading domain"));
    }

    #[test]
    fn test_failure_keeps_previous_record() {
        let mut state = loaded();
        state.error = Some(ViewError::new("http", "HTTP 404: no such domain"));
        let lines = text(&DomainPanel::new(&state).lines());

        assert!(lines[0].ends_with("= d01"));
        assert!(lines.last().unwrap().contains("[http] HTTP 404: no such domain"));
    }
}
