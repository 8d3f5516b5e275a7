//! Top-level dashboard layout.

use super::{keymap_bar, sections, status_bar, ThemeColors};
use crate::app::{App, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
    Frame,
};

/// Draw the dashboard: tab row, section content, status and keymap bars.
pub(super) fn draw_dashboard(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(
        Block::default().style(Style::default().bg(colors.bg)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let titles: Vec<Line<'_>> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!(" {}:{} ", i + 1, section.name())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .style(Style::default().fg(colors.label).bg(colors.status_bg))
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    f.render_widget(tabs, chunks[0]);

    match app.section {
        Section::Overview => sections::draw_overview(f, chunks[1], &colors),
        Section::Price => sections::draw_price(f, app, chunks[1], &colors),
        Section::Network => sections::draw_network(f, app, chunks[1], &colors),
        Section::Timeline => sections::draw_timeline(f, chunks[1], &colors),
        Section::Adoption => sections::draw_adoption(f, app, chunks[1], &colors),
        Section::Holdings => sections::draw_holdings(f, app, chunks[1], &colors),
        Section::Mining => sections::draw_mining(f, app, chunks[1], &colors),
        Section::Markets => sections::draw_markets(f, app, chunks[1], &colors),
    }

    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.point_count(app.section) > 0, &colors);
}
