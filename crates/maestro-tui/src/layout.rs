//! Screen layout definitions for the TUI
//!
//! Header on top, tree and detail side by side, status bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Narrowest terminal that still gets a side-by-side tree and detail.
const SPLIT_MIN_WIDTH: u16 = 60;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, data source and route
    pub header: Rect,
    /// Navigation tree
    pub tree: Rect,
    /// Detail panel of the current route
    pub detail: Rect,
    /// One-line key hints and state
    pub status: Rect,
}

/// Create the main screen layout
///
/// Below [`SPLIT_MIN_WIDTH`] columns the tree is stacked above the detail.
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .areas(area);

    let [tree, detail] = if area.width >= SPLIT_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(body)
    } else {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body)
    };

    ScreenAreas {
        header,
        tree,
        detail,
        status,
    }
}
