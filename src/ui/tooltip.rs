//! Floating inspector panel.
//!
//! The terminal analog of the original's hover tooltip: a small panel
//! anchored inside the chart area, showing the formatted values for the
//! data point under the cursor.

use super::ThemeColors;
use crate::format::TooltipContent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 18;

/// Draw the inspector panel in the top-left corner of `area`.
pub(super) fn draw_inspector(
    f: &mut Frame<'_>,
    area: Rect,
    content: &TooltipContent,
    colors: &ThemeColors,
) {
    let mut lines = vec![Line::from(Span::styled(
        content.heading.clone(),
        Style::default()
            .fg(content.heading_color)
            .add_modifier(Modifier::BOLD),
    ))];

    for entry in &content.lines {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(entry.color)),
            Span::styled(format!("{}: ", entry.series), Style::default().fg(colors.label)),
            Span::styled(
                entry.value.clone(),
                Style::default().fg(entry.color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let content_width = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.width())
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0) as u16;

    let width = (content_width + 4).max(MIN_WIDTH).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    if width < 4 || height < 3 {
        return;
    }

    let panel = Rect::new(area.x + 2, area.y + 1, width, height);
    let panel = panel.intersection(area);

    f.render_widget(Clear, panel);

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(colors.text).bg(colors.panel))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );

    f.render_widget(paragraph, panel);
}
