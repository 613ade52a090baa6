//! Main render/view function (View in TEA pattern)


use maestro_app::{AppState, Route};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the tree and the detail panel of the
/// current route are drawn from the view models as they are.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let on_tree = *state.route() == Route::Splash;
    let show_key_paths = state.settings.ui.show_key_paths;

    frame.render_widget(
        widgets::MainHeader::new(&state.source_label, state.route().path()),
        areas.header,
    );

    let nodes = state.visible_nodes();
    frame.render_widget(
        widgets::TreePanel::new(&state.tree, &state.tree_view, &nodes)
            .focused(on_tree)
            .tick(state.tick),
        areas.tree,
    );

    match state.route() {
        Route::Splash => frame.render_widget(
            widgets::SplashPanel::new(&state.tree_view.output),
            areas.detail,
        ),
        Route::DomainDetail { .. } => frame.render_widget(
            widgets::DomainPanel::new(&state.domain)
                .show_key_paths(show_key_paths)
                .focused(!on_tree)
                .tick(state.tick),
            areas.detail,
        ),
        Route::ProcessDetail { .. } => frame.render_widget(
            widgets::ProcessPanel::new(&state.process)
                .show_key_paths(show_key_paths)
                .focused(!on_tree)
                .tick(state.tick),
            areas.detail,
        ),
        Route::AgentDetail { .. } => frame.render_widget(
            widgets::AgentPanel::new(&state.agent)
                .show_key_paths(show_key_paths)
                .focused(!on_tree),
            areas.detail,
        ),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}
