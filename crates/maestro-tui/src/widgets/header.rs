//! Header bar: title, data source and the current route.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::truncate_to_width;

pub struct MainHeader<'a> {
    source: &'a str,
    path: String,
}

impl<'a> MainHeader<'a> {
    pub fn new(source: &'a str, path: String) -> Self {
        Self { source, path }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![Span::styled(
            "maestro",
            styles::accent().add_modifier(Modifier::BOLD),
        )];
        if !self.source.is_empty() {
            spans.push(Span::styled(" · ", styles::text_muted()));
            spans.push(Span::styled(self.source.to_string(), styles::text_secondary()));
        }
        let left = Line::from(spans);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Route path right-aligned when it fits after the title
        let room = inner.width.saturating_sub(left_width + 2) as usize;
        let path = truncate_to_width(&self.path, room);
        if !path.is_empty() {
            let x = inner.right() - path.chars().count() as u16;
            buf.set_string(x, inner.y, path, styles::text_primary());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_header_shows_source_and_path() {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let header = MainHeader::new("http://localhost:8080/", "/domains/abc".into());
                f.render_widget(header, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("maestro"));
        assert!(content.contains("http://localhost:8080/"));
        assert!(content.contains("/domains/abc"));
    }
}
