//! maestro-tui - Terminal UI for the maestro console
//!
//! Renders the navigation tree next to the detail panel of the current
//! route with ratatui, and feeds crossterm key events into the update
//! function of `maestro-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
