//! Chart drawing helpers.

use super::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// One line of a year-indexed chart. X values are dataset indices; Y
/// values arrive already transformed (log or normalized) by the caller.
#[derive(Debug)]
pub(super) struct LineSeries<'a> {
    /// Series display name.
    pub name: &'static str,
    /// Stroke color.
    pub color: Color,
    /// Transformed (x, y) points.
    pub data: &'a [(f64, f64)],
}

/// Draw a Braille line chart over year-labelled data, with a vertical
/// cursor line marking the selected point.
pub(super) fn draw_year_chart(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    series: &[LineSeries<'_>],
    years: &[&'static str],
    cursor: usize,
    y_label: impl Fn(f64) -> String,
    colors: &ThemeColors,
) {
    if years.is_empty() {
        return;
    }

    let (y_min, y_max) = series
        .iter()
        .flat_map(|s| s.data.iter())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, y)| {
            (min.min(*y), max.max(*y))
        });

    // 15% margin to avoid edge clipping
    let padding = (y_max - y_min).abs() * 0.15;
    let (y_min, y_max) = (y_min - padding, y_max + padding);

    let x_max = (years.len() - 1) as f64;
    let cursor_x = cursor.min(years.len() - 1) as f64;
    let cursor_line = vec![(cursor_x, y_min), (cursor_x, y_max)];

    let mut datasets: Vec<Dataset<'_>> = series
        .iter()
        .map(|s| {
            Dataset::default()
                .name(s.name)
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(s.color))
                .data(s.data)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .graph_type(GraphType::Line)
            .style(Style::default().fg(colors.cursor_bg))
            .data(&cursor_line),
    );

    let x_labels = vec![
        Span::styled(years[0], Style::default().fg(colors.label)),
        Span::styled(years[years.len() / 2], Style::default().fg(colors.label)),
        Span::styled(years[years.len() - 1], Style::default().fg(colors.label)),
    ];

    let y_labels = vec![
        Span::styled(y_label(y_min), Style::default().fg(colors.label)),
        Span::styled(y_label((y_min + y_max) / 2.0), Style::default().fg(colors.label)),
        Span::styled(y_label(y_max), Style::default().fg(colors.label)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", title))
                .title_style(Style::default().fg(colors.heading)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(colors.muted))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(colors.muted))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    f.render_widget(chart, area);
}

/// Build a horizontal bar row: padded label, filled bar, value text.
pub(super) fn bar_row(
    label: &str,
    label_width: usize,
    frac: f64,
    bar_width: usize,
    value: &str,
    color: Color,
    selected: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let filled = ((frac.clamp(0.0, 1.0) * bar_width as f64).round() as usize).min(bar_width);

    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(colors.heading).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(colors.accent)),
        Span::styled(format!("{:<width$}", label, width = label_width), label_style),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(bar_width - filled), Style::default().fg(colors.border)),
        Span::styled(format!(" {}", value), Style::default().fg(colors.label)),
    ])
}

/// Compact magnitude label: `1.2M`, `250K`, `100`.
pub(super) fn compact_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1000.0 {
        format!("{:.0}K", value / 1000.0)
    } else {
        format!("{:.0}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_magnitudes() {
        assert_eq!(compact_magnitude(100.0), "100");
        assert_eq!(compact_magnitude(250_000.0), "250K");
        assert_eq!(compact_magnitude(1_200_000.0), "1.2M");
    }

    #[test]
    fn bars_never_overflow_their_width() {
        let colors = ThemeColors::from_theme(&crate::app::Theme::Dark);
        let line = bar_row("USA", 8, 2.5, 10, "40%", Color::Red, false, &colors);
        // marker + label + filled + empty + value
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[2].content.chars().count(), 10);
        assert_eq!(line.spans[3].content.chars().count(), 0);
    }
}
