//! Navigation tree panel.
//!
//! Renders the visible rows with viewport scrolling, the selected-row
//! highlight and the selection output on the last row.

use maestro_app::state::{TreeViewState, VisibleNode};
use maestro_app::TreeModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{error_line, spinner, truncate_to_width};
use crate::theme::{palette, styles};

pub struct TreePanel<'a> {
    model: &'a TreeModel,
    view: &'a TreeViewState,
    nodes: &'a [VisibleNode<'a>],
    focused: bool,
    tick: u64,
}

impl<'a> TreePanel<'a> {
    pub fn new(
        model: &'a TreeModel,
        view: &'a TreeViewState,
        nodes: &'a [VisibleNode<'a>],
    ) -> Self {
        Self {
            model,
            view,
            nodes,
            focused: true,
            tick: 0,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn expand_icon(&self, node: &VisibleNode<'_>) -> &'static str {
        if !node.node.has_children() {
            "●"
        } else if self.view.is_expanded(&node.path) {
            "▼"
        } else {
            "▶"
        }
    }

    /// Viewport start/end that keeps the selected row near the middle.
    fn viewport_range(&self, height: usize) -> (usize, usize) {
        let total = self.nodes.len();
        let selected = self.view.selected_index;
        let half = height / 2;
        let start = if selected > half {
            (selected - half).min(total.saturating_sub(height))
        } else {
            0
        };
        (start, (start + height).min(total))
    }

    fn title(&self) -> String {
        let base = if self.model.is_live() { "Domains" } else { "Tree" };
        if self.model.loading {
            format!(" {base} {} ", spinner(self.tick))
        } else {
            format!(" {base} ")
        }
    }
}

impl Widget for TreePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(self.title(), styles::accent()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut rows = inner;

        if let Some(error) = &self.model.error {
            Paragraph::new(error_line(error)).render(Rect { height: 1, ..rows }, buf);
            rows.y += 1;
            rows.height = rows.height.saturating_sub(1);
        }

        let output = &self.view.output.output;
        if !output.is_empty() && rows.height > 1 {
            let y = rows.bottom() - 1;
            let text = truncate_to_width(output, rows.width as usize);
            buf.set_string(rows.x, y, text, styles::text_bright());
            rows.height -= 1;
        }

        if self.nodes.is_empty() {
            let msg = if self.model.loading {
                "Loading domains..."
            } else {
                "No nodes"
            };
            Paragraph::new(Line::styled(msg, styles::text_muted())).render(rows, buf);
            return;
        }

        let (start, end) = self.viewport_range(rows.height as usize);
        for (offset, node) in self.nodes[start..end].iter().enumerate() {
            let y = rows.y + offset as u16;
            let is_selected = start + offset == self.view.selected_index;

            if is_selected {
                let sel_bg = Style::default().bg(palette::SELECTED_ROW_BG);
                for x in rows.x..rows.right() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_style(sel_bg);
                    }
                }
            }

            let indent = "  ".repeat(node.depth);
            let line = format!("{indent}{} {}", self.expand_icon(node), node.node.label);
            let mut style = if node.node.target.is_some() {
                styles::text_primary()
            } else {
                styles::text_secondary()
            };
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_string(rows.x, y, truncate_to_width(&line, rows.width as usize), style);
        }

        // Scroll thumb on the right edge when rows overflow
        let height = rows.height as usize;
        if self.nodes.len() > height && height > 0 {
            let x = rows.right().saturating_sub(1);
            let thumb = rows.y
                + ((self.view.selected_index * height / self.nodes.len()) as u16)
                    .min(rows.height.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((x, thumb)) {
                cell.set_symbol("█").set_fg(palette::BORDER_DIM);
            }
        }
    }
}
