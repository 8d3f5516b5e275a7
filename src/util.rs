//! Utility functions for Satsboard.

use crate::app::{App, Section};
use crate::data::{
    self, FOOTER_FACTS, INSTITUTIONAL_MILESTONES, KEY_METRICS, MARKET_CYCLES,
    NETWORK_GROWTH_SUMMARY, PRICE_PROJECTIONS, TECHNICAL_MILESTONES, TIMELINE_EVENTS,
};
use crate::format::format_value;

/// Render the active section as plain text, for the clipboard export.
///
/// Values go through the same formatting engine as the inspector panel,
/// so the export matches what the dashboard displays.
pub fn section_to_text(app: &App) -> String {
    let mut text = format!("{}\n", app.section.name());
    text.push_str(&"=".repeat(40));
    text.push_str("\n\n");

    match app.section {
        Section::Overview => {
            for metric in &KEY_METRICS {
                text.push_str(&format!("{}: {}\n", metric.label, metric.value));
            }
            text.push('\n');
            for fact in &FOOTER_FACTS {
                text.push_str(&format!("{} {}\n", fact.label, fact.value));
            }
        },
        Section::Price => {
            for (record, point) in data::PRICE_EVOLUTION.iter().zip(&app.price_points) {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.year,
                    format_value(record.price, data::PRICE_SERIES.name, point)
                ));
            }
            text.push('\n');
            for cycle in &MARKET_CYCLES {
                text.push_str(&format!(
                    "{}: {} / {}\n",
                    cycle.period, cycle.gain, cycle.correction
                ));
            }
        },
        Section::Network => {
            for (record, point) in data::NETWORK_GROWTH.iter().zip(&app.network_points) {
                text.push_str(&format!(
                    "{}: {} transactions, {} wallets\n",
                    record.year,
                    format_value(record.transactions, data::TRANSACTIONS_SERIES.name, point),
                    format_value(record.wallets, data::WALLETS_SERIES.name, point),
                ));
            }
            text.push('\n');
            for stat in &NETWORK_GROWTH_SUMMARY {
                text.push_str(&format!("{}: {}\n", stat.label, stat.value));
            }
        },
        Section::Timeline => {
            for event in &TIMELINE_EVENTS {
                match event.details {
                    Some(details) => {
                        text.push_str(&format!("{} - {} ({})\n", event.year, event.title, details))
                    },
                    None => text.push_str(&format!("{} - {}\n", event.year, event.title)),
                }
            }
            text.push('\n');
            for milestone in TECHNICAL_MILESTONES.iter().chain(&INSTITUTIONAL_MILESTONES) {
                text.push_str(&format!("{}: {}\n", milestone.title, milestone.description));
            }
        },
        Section::Adoption => {
            for (record, point) in data::ADOPTION_STATUS.iter().zip(&app.adoption_points) {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.status,
                    format_value(
                        f64::from(record.countries),
                        data::COUNTRIES_SERIES.name,
                        point
                    ),
                ));
            }
            text.push('\n');
            text.push_str("Regulatory compliance:\n");
            for (record, point) in data::REGULATORY_COMPLIANCE
                .iter()
                .zip(&app.compliance_points)
            {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.year,
                    format_value(record.compliance, "compliance", point),
                ));
            }
        },
        Section::Holdings => {
            for (record, point) in data::HOLDINGS.iter().zip(&app.holdings_points) {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.name,
                    format_value(record.value, record.name, point),
                ));
            }
        },
        Section::Mining => {
            for (record, point) in data::MINING_DISTRIBUTION.iter().zip(&app.mining_points) {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.name,
                    format_value(record.value, record.name, point),
                ));
            }
        },
        Section::Markets => {
            for (record, point) in data::ASSET_CORRELATIONS
                .iter()
                .zip(&app.correlation_points)
            {
                text.push_str(&format!(
                    "{}: {}\n",
                    record.asset,
                    format_value(record.correlation, record.asset, point),
                ));
            }
            text.push('\n');
            for projection in &PRICE_PROJECTIONS {
                text.push_str(&format!("{}: {}\n", projection.model, projection.range));
            }
        },
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holdings_export_goes_through_the_formatter() {
        let app = App::new(Section::Holdings);
        let text = section_to_text(&app);
        assert!(text.contains("BlackRock (IBIT): 350.0K BTC"));
        assert!(text.contains("Other Gov/Public/ETFs: 500.0K BTC"));
    }

    #[test]
    fn adoption_export_includes_compliance_percentages() {
        let app = App::new(Section::Adoption);
        let text = section_to_text(&app);
        assert!(text.contains("Permissive/Legal: 105 countries"));
        assert!(text.contains("2024: 82%"));
    }

    #[test]
    fn markets_export_keeps_plain_correlations() {
        let app = App::new(Section::Markets);
        let text = section_to_text(&app);
        assert!(text.contains("S&P 500: 0.38"));
        assert!(text.contains("US Dollar: -0.3"));
        assert!(text.contains("Stock-to-Flow (Post-Halving): $250K - $1M"));
    }
}
