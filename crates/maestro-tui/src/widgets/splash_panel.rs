//! Right-hand panel on the tree route: the selection output and key help.

use maestro_core::DisplayState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const KEY_HELP: &[(&str, &str)] = &[
    ("↑/↓ j/k", "move"),
    ("→/l ←/h", "expand / collapse"),
    ("Enter", "select"),
    ("r", "reload tree"),
    ("q Esc", "quit"),
];

pub struct SplashPanel<'a> {
    output: &'a DisplayState,
}

impl<'a> SplashPanel<'a> {
    pub fn new(output: &'a DisplayState) -> Self {
        Self { output }
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = if self.output.output.is_empty() {
            vec![Line::styled(
                "Select a node with Enter",
                styles::text_muted(),
            )]
        } else {
            vec![Line::styled(self.output.output.clone(), styles::text_bright())]
        };
        lines.push(Line::default());
        lines.extend(KEY_HELP.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("{keys:<10}"), styles::keybinding()),
                Span::styled(*action, styles::text_secondary()),
            ])
        }));
        lines
    }
}

impl Widget for SplashPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block =
            styles::glass_block(false).title(Span::styled(" Selection ", styles::accent()));
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_first_line() {
        let output = DisplayState::new("Vegetable: A plant or part of a plant used as food");
        let lines = SplashPanel::new(&output).lines();
        assert_eq!(
            lines[0].spans[0].content,
            "Vegetable: A plant or part of a plant used as food"
        );
    }

    #[test]
    fn test_empty_output_prompts() {
        let output = DisplayState::default();
        let lines = SplashPanel::new(&output).lines();
        assert_eq!(lines[0].spans[0].content, "Select a node with Enter");
    }
}
