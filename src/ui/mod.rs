//! User interface rendering.

mod charts;
mod dashboard;
mod keymap_bar;
mod sections;
mod status_bar;
mod theme;
mod tooltip;

use crate::app::App;
use ratatui::Frame;

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    dashboard::draw_dashboard(f, app);
}
