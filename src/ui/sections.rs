//! Per-section rendering.

use super::charts::{self, LineSeries};
use super::{tooltip, ThemeColors};
use crate::app::App;
use crate::data::{
    self, ADOPTION_STATUS, ASSET_CORRELATIONS, CURRENT_PRICE, FOOTER_FACTS, HOLDINGS,
    INSTITUTIONAL_MILESTONES, KEY_METRICS, MARKET_CYCLES, MINING_DISTRIBUTION, NETWORK_GROWTH,
    NETWORK_GROWTH_SUMMARY, PRICE_EVOLUTION, PRICE_PROJECTIONS, REGULATORY_COMPLIANCE,
    Milestone, TECHNICAL_MILESTONES, TIMELINE_EVENTS,
};
use crate::format::{format_value, group_digits};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn panel<'a>(title: &'a str, colors: &ThemeColors) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading))
}

/// Overview: page header, key metrics grid, supply facts.
pub(super) fn draw_overview(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled(
                "Bitcoin",
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Evolution & Market Overview",
                Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "From Whitepaper to Global Financial Asset (2008-2025)",
            Style::default().fg(colors.label),
        )),
        Line::from(vec![
            Span::styled("Current Price: ", Style::default().fg(colors.label)),
            Span::styled(
                CURRENT_PRICE,
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        chunks[0],
    );

    // Key metrics grid, one card per metric
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, KEY_METRICS.len() as u32);
            KEY_METRICS.len()
        ])
        .split(chunks[1]);

    for (metric, card) in KEY_METRICS.iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                metric.value,
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(metric.label, Style::default().fg(colors.label))),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            );
        f.render_widget(paragraph, *card);
    }

    let mut facts: Vec<Span<'_>> = Vec::new();
    for (i, fact) in FOOTER_FACTS.iter().enumerate() {
        if i > 0 {
            facts.push(Span::styled("   ", Style::default()));
        }
        facts.push(Span::styled(
            format!("{} ", fact.label),
            Style::default().fg(colors.label).add_modifier(Modifier::BOLD),
        ));
        facts.push(Span::styled(fact.value, Style::default().fg(colors.text)));
    }
    let footer = vec![
        Line::from(facts),
        Line::from(Span::styled(
            "Source: Blockchain data, market analysis & financial projections as of June 2025",
            Style::default().fg(colors.muted).add_modifier(Modifier::ITALIC),
        )),
    ];
    f.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[3],
    );
}

/// Price: log-scale evolution chart plus market cycle insights.
pub(super) fn draw_price(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(6)])
        .split(area);

    let points: Vec<(f64, f64)> = PRICE_EVOLUTION
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price.log10()))
        .collect();
    let years: Vec<&'static str> = PRICE_EVOLUTION.iter().map(|p| p.year).collect();

    charts::draw_year_chart(
        f,
        chunks[0],
        "Bitcoin Price Evolution (Logarithmic Scale, USD)",
        &[LineSeries {
            name: data::PRICE_SERIES.name,
            color: data::PRICE_SERIES.color,
            data: &points,
        }],
        &years,
        app.cursor(),
        log_price_label,
        colors,
    );

    let mut lines = Vec::new();
    for cycle in &MARKET_CYCLES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", cycle.period),
                Style::default().fg(colors.text),
            ),
            Span::styled(
                format!("{:<12}", cycle.gain),
                Style::default().fg(data::palette::CORPORATE_TEAL),
            ),
            Span::styled(
                cycle.correction,
                Style::default().fg(data::palette::CORPORATE_RED),
            ),
        ]));
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Market Cycle Insights", colors)),
        chunks[1],
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, chunks[0], &content, colors);
    }
}

/// Y axis label for the log-scale price chart.
fn log_price_label(log_value: f64) -> String {
    let price = 10f64.powf(log_value);
    if price < 10.0 {
        format!("${:.1}", price)
    } else {
        format!("${}", group_digits(price.round()))
    }
}

/// Network: dual-series growth chart plus summary stats.
pub(super) fn draw_network(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(area);

    // The original plots these on independent Y axes; here each series is
    // normalized to 0..1 (transactions in log space) and the true values
    // come from the inspector.
    let (log_min, log_max) = NETWORK_GROWTH
        .iter()
        .map(|p| p.transactions.log10())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });
    let wallets_max = NETWORK_GROWTH
        .iter()
        .map(|p| p.wallets)
        .fold(f64::NEG_INFINITY, f64::max);

    let transactions: Vec<(f64, f64)> = NETWORK_GROWTH
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let normalized = (p.transactions.log10() - log_min) / (log_max - log_min);
            (i as f64, normalized)
        })
        .collect();
    let wallets: Vec<(f64, f64)> = NETWORK_GROWTH
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.wallets / wallets_max))
        .collect();
    let years: Vec<&'static str> = NETWORK_GROWTH.iter().map(|p| p.year).collect();

    charts::draw_year_chart(
        f,
        chunks[0],
        "Network Growth Metrics",
        &[
            LineSeries {
                name: data::TRANSACTIONS_SERIES.name,
                color: data::TRANSACTIONS_SERIES.color,
                data: &transactions,
            },
            LineSeries {
                name: data::WALLETS_SERIES.name,
                color: data::WALLETS_SERIES.color,
                data: &wallets,
            },
        ],
        &years,
        app.cursor(),
        move |v| charts::compact_magnitude(10f64.powf(log_min + v.clamp(0.0, 1.0) * (log_max - log_min))),
        colors,
    );

    let mut stats: Vec<Span<'_>> = Vec::new();
    for (i, stat) in NETWORK_GROWTH_SUMMARY.iter().enumerate() {
        if i > 0 {
            stats.push(Span::styled("  |  ", Style::default().fg(colors.border)));
        }
        stats.push(Span::styled(
            format!("{} ", stat.value),
            Style::default().fg(stat.color).add_modifier(Modifier::BOLD),
        ));
        stats.push(Span::styled(stat.label, Style::default().fg(colors.label)));
    }
    f.render_widget(
        Paragraph::new(Line::from(stats))
            .alignment(Alignment::Center)
            .block(panel("Summary", colors)),
        chunks[1],
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, chunks[0], &content, colors);
    }
}

/// Timeline: historical events plus categorized milestones.
pub(super) fn draw_timeline(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let mut events = Vec::new();
    for event in &TIMELINE_EVENTS {
        let mut spans = vec![
            Span::styled(
                format!("{:<10}", event.year),
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(event.title, Style::default().fg(colors.text)),
        ];
        if let Some(details) = event.details {
            spans.push(Span::styled(
                format!("  {}", details),
                Style::default().fg(colors.muted),
            ));
        }
        events.push(Line::from(spans));
        events.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(events)
            .wrap(Wrap { trim: true })
            .block(panel("Historical Timeline", colors)),
        chunks[0],
    );

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_milestones(f, halves[0], "Technical Evolution", &TECHNICAL_MILESTONES, colors);
    draw_milestones(
        f,
        halves[1],
        "Institutional & Regulatory",
        &INSTITUTIONAL_MILESTONES,
        colors,
    );
}

fn draw_milestones(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    milestones: &[Milestone],
    colors: &ThemeColors,
) {
    let mut lines = Vec::new();
    for milestone in milestones {
        lines.push(Line::from(vec![
            Span::styled("● ", Style::default().fg(milestone.category.color())),
            Span::styled(
                milestone.title,
                Style::default().fg(colors.heading).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", milestone.description),
            Style::default().fg(colors.label),
        )));
    }
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel(title, colors)),
        area,
    );
}

/// Adoption: country counts per regulatory stance, compliance meters.
pub(super) fn draw_adoption(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    let max_countries = ADOPTION_STATUS
        .iter()
        .map(|r| r.countries)
        .max()
        .unwrap_or(1) as f64;
    let bar_width = bar_width_for(chunks[0], 22, 14);

    let mut lines = vec![Line::default()];
    for (i, record) in ADOPTION_STATUS.iter().enumerate() {
        lines.push(charts::bar_row(
            record.status,
            22,
            f64::from(record.countries) / max_countries,
            bar_width,
            &data::COUNTRIES_SERIES
                .kind
                .render(f64::from(record.countries)),
            record.color,
            app.cursor() == i,
            colors,
        ));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Global Adoption Status", colors)),
        chunks[0],
    );

    let meter_width = bar_width_for(chunks[1], 6, 8);
    let mut meters = vec![Line::default()];
    for (record, point) in REGULATORY_COMPLIANCE.iter().zip(&app.compliance_points) {
        meters.push(charts::bar_row(
            record.year,
            6,
            record.compliance / 100.0,
            meter_width,
            &format_value(record.compliance, "compliance", point),
            record.color,
            false,
            colors,
        ));
    }
    f.render_widget(
        Paragraph::new(meters).block(panel("Regulatory Compliance Evolution", colors)),
        chunks[1],
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, chunks[0], &content, colors);
    }
}

/// Holdings: institutional BTC amounts as proportional bars.
pub(super) fn draw_holdings(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let max_value = HOLDINGS
        .iter()
        .map(|r| r.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let bar_width = bar_width_for(area, 24, 14);

    let mut lines = vec![Line::default()];
    for (i, (record, point)) in HOLDINGS.iter().zip(&app.holdings_points).enumerate() {
        lines.push(charts::bar_row(
            record.name,
            24,
            record.value / max_value,
            bar_width,
            &format_value(record.value, record.name, point),
            record.color,
            app.cursor() == i,
            colors,
        ));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Institutional Holdings (BTC)", colors)),
        area,
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, area, &content, colors);
    }
}

/// Mining: hashrate distribution as share-of-total bars.
pub(super) fn draw_mining(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let bar_width = bar_width_for(area, 18, 10);

    let mut lines = vec![Line::default()];
    for (i, (record, point)) in MINING_DISTRIBUTION.iter().zip(&app.mining_points).enumerate() {
        lines.push(charts::bar_row(
            record.name,
            18,
            record.value / 100.0,
            bar_width,
            &format_value(record.value, record.name, point),
            record.color,
            app.cursor() == i,
            colors,
        ));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Mining Distribution by Region", colors)),
        area,
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, area, &content, colors);
    }
}

/// Markets: asset correlations around a zero axis, price projections.
pub(super) fn draw_markets(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(6)])
        .split(area);

    let half_width = (bar_width_for(chunks[0], 14, 16) / 2).max(8);

    let mut lines = vec![Line::default()];
    for (i, (record, point)) in ASSET_CORRELATIONS
        .iter()
        .zip(&app.correlation_points)
        .enumerate()
    {
        lines.push(correlation_row(
            record.asset,
            record.correlation,
            half_width,
            &format_value(record.correlation, record.asset, point),
            record.color,
            app.cursor() == i,
            colors,
        ));
        lines.push(Line::default());
    }
    f.render_widget(
        Paragraph::new(lines).block(panel("Asset Correlation (-1 to 1)", colors)),
        chunks[0],
    );

    let mut projections = vec![Line::default()];
    for projection in &PRICE_PROJECTIONS {
        projections.push(Line::from(vec![
            Span::styled(
                format!("{:<34}", projection.model),
                Style::default().fg(colors.text),
            ),
            Span::styled(
                projection.range,
                Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    f.render_widget(
        Paragraph::new(projections).block(panel("Price Projections (2025-2030)", colors)),
        chunks[1],
    );

    if let Some(content) = app.inspector() {
        tooltip::draw_inspector(f, chunks[0], &content, colors);
    }
}

/// A diverging bar centered on zero for correlation coefficients.
fn correlation_row(
    label: &str,
    coefficient: f64,
    half_width: usize,
    value: &str,
    color: ratatui::style::Color,
    selected: bool,
    colors: &ThemeColors,
) -> Line<'static> {
    let filled = ((coefficient.abs().clamp(0.0, 1.0) * half_width as f64).round() as usize)
        .min(half_width);

    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(colors.heading).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };

    let (left_fill, right_fill) = if coefficient < 0.0 {
        (filled, 0)
    } else {
        (0, filled)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(colors.accent)),
        Span::styled(format!("{:<14}", label), label_style),
        Span::styled(
            "░".repeat(half_width - left_fill),
            Style::default().fg(colors.border),
        ),
        Span::styled("█".repeat(left_fill), Style::default().fg(color)),
        Span::styled("│", Style::default().fg(colors.muted)),
        Span::styled("█".repeat(right_fill), Style::default().fg(color)),
        Span::styled(
            "░".repeat(half_width - right_fill),
            Style::default().fg(colors.border),
        ),
        Span::styled(format!(" {}", value), Style::default().fg(colors.label)),
    ])
}

/// Bar width that fits the area after the label and value columns.
fn bar_width_for(area: Rect, label_width: usize, value_width: usize) -> usize {
    (area.width as usize)
        .saturating_sub(label_width + value_width + 6)
        .clamp(10, 40)
}
