//! Value classification and rendering.

use super::DataPoint;

/// Values above this (without a percent sign in the entity name) are
/// assumed to be BTC-denominated. Known to misclassify sufficiently large
/// plain counts; kept as-is until a product decision says otherwise.
const BTC_MAGNITUDE_THRESHOLD: f64 = 10_000.0;

/// Semantic kind of a chart value, deciding its display format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// USD amount: `$19,000`.
    Currency,
    /// Count with a unit word: `105 countries`.
    Count {
        /// Unit word appended after the grouped digits.
        unit: &'static str,
    },
    /// Millions-denominated count: `55M`.
    Millions,
    /// Percentage: `25%`.
    Percentage,
    /// Bitcoin quantity: `350.0K BTC` or `744 BTC`.
    Bitcoin,
    /// Bare grouped digits: `1,200,000`.
    Plain,
}

impl ValueKind {
    /// Classify a value from its series name and sibling fields.
    ///
    /// First match wins, in this order: series names mentioning price,
    /// countries, transactions or wallets; then the BTC/percentage
    /// heuristic for points carrying a `name` field (pie-style data);
    /// everything else is plain.
    pub fn infer(series: &str, point: &DataPoint, value: f64) -> Self {
        let series = series.to_lowercase();

        if series.contains("price") {
            ValueKind::Currency
        } else if series.contains("countries") {
            ValueKind::Count { unit: "countries" }
        } else if series.contains("transactions") {
            ValueKind::Plain
        } else if series.contains("wallets") {
            ValueKind::Millions
        } else if let Some(name) = point.text("name") {
            let name = name.to_lowercase();
            let unit = point.text("unit");

            let is_btc = name.contains("btc")
                || unit == Some("BTC")
                || (value > BTC_MAGNITUDE_THRESHOLD && !name.contains('%'));

            if is_btc {
                ValueKind::Bitcoin
            } else if unit == Some("%") || name.contains('%') {
                ValueKind::Percentage
            } else {
                ValueKind::Plain
            }
        } else {
            ValueKind::Plain
        }
    }

    /// Render a value in this kind's display format.
    pub fn render(self, value: f64) -> String {
        match self {
            ValueKind::Currency => format!("${}", group_digits(value)),
            ValueKind::Count { unit } => format!("{} {}", group_digits(value), unit),
            ValueKind::Millions => format!("{}M", group_digits(value)),
            ValueKind::Percentage => format!("{}%", group_digits(value)),
            ValueKind::Bitcoin if value >= 1000.0 => format!("{:.1}K BTC", value / 1000.0),
            ValueKind::Bitcoin => format!("{:.0} BTC", value),
            ValueKind::Plain => group_digits(value),
        }
    }
}

/// Classify and render in one step.
pub fn format_value(value: f64, series: &str, point: &DataPoint) -> String {
    ValueKind::infer(series, point, value).render(value)
}

/// Group digits with thousands separators.
///
/// Matches the default locale rendering of the source data: commas between
/// thousands, at most three fraction digits, trailing zeros trimmed.
pub fn group_digits(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut out: String = grouped.chars().rev().collect();

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }

    if value < 0.0 && out.chars().any(|c| c != '0' && c != ',' && c != '.') {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_grouped_by_thousands() {
        assert_eq!(group_digits(0.0), "0");
        assert_eq!(group_digits(2.0), "2");
        assert_eq!(group_digits(850.0), "850");
        assert_eq!(group_digits(19000.0), "19,000");
        assert_eq!(group_digits(1_200_000.0), "1,200,000");
    }

    #[test]
    fn fractions_keep_three_digits_at_most() {
        assert_eq!(group_digits(0.01), "0.01");
        assert_eq!(group_digits(0.1), "0.1");
        assert_eq!(group_digits(-0.3), "-0.3");
        assert_eq!(group_digits(0.38), "0.38");
        assert_eq!(group_digits(1234.5678), "1,234.568");
    }

    #[test]
    fn price_series_renders_as_currency() {
        let point = DataPoint::new().text_field("year", "2017");
        assert_eq!(format_value(19000.0, "Price", &point), "$19,000");
        // Case-insensitive substring match.
        assert_eq!(format_value(0.1, "btc price (usd)", &point), "$0.1");
    }

    #[test]
    fn countries_series_renders_with_unit_word() {
        let point = DataPoint::new()
            .text_field("status", "Permissive/Legal")
            .number_field("countries", 105.0);
        assert_eq!(format_value(105.0, "Countries", &point), "105 countries");
    }

    #[test]
    fn transactions_series_renders_plain() {
        let point = DataPoint::new().text_field("year", "2024");
        assert_eq!(format_value(1_000_000.0, "Transactions", &point), "1,000,000");
    }

    #[test]
    fn wallets_series_renders_with_millions_suffix() {
        let point = DataPoint::new();
        let formatted = format_value(55.0, "wallets", &point);
        assert_eq!(formatted, "55M");
        assert!(!formatted.contains('.'));
    }

    #[test]
    fn large_named_values_hit_the_btc_heuristic() {
        let point = DataPoint::new().text_field("name", "BlackRock (IBIT)");
        assert_eq!(format_value(350_000.0, "BlackRock (IBIT)", &point), "350.0K BTC");
    }

    #[test]
    fn small_btc_values_render_without_k_suffix() {
        let point = DataPoint::new()
            .text_field("name", "Mt. Gox Loss")
            .text_field("unit", "BTC");
        assert_eq!(format_value(744.0, "Mt. Gox Loss", &point), "744 BTC");
    }

    #[test]
    fn btc_in_the_name_forces_bitcoin_rendering() {
        let point = DataPoint::new().text_field("name", "BTC Reserves");
        assert_eq!(format_value(1500.0, "BTC Reserves", &point), "1.5K BTC");
    }

    #[test]
    fn small_named_values_fall_through_to_plain() {
        // Value at or below the magnitude threshold, no unit, no percent
        // sign: neither heuristic triggers.
        let point = DataPoint::new().text_field("name", "Legal Tender");
        assert_eq!(format_value(2.0, "Legal Tender", &point), "2");
        assert_eq!(format_value(10_000.0, "Legal Tender", &point), "10,000");
    }

    #[test]
    fn threshold_is_exclusive() {
        // Just above the threshold the heuristic claims the value as BTC.
        // This misclassifies large non-BTC counts; the behavior is
        // intentional (see BTC_MAGNITUDE_THRESHOLD).
        let point = DataPoint::new().text_field("name", "Merchants");
        assert_eq!(format_value(10_001.0, "Merchants", &point), "10.0K BTC");
    }

    #[test]
    fn explicit_percent_unit_renders_percentage() {
        let point = DataPoint::new()
            .text_field("name", "Gold %")
            .text_field("unit", "%");
        assert_eq!(format_value(25.0, "Gold %", &point), "25%");
    }

    #[test]
    fn percent_sign_in_name_renders_percentage() {
        let point = DataPoint::new().text_field("name", "Uptime %");
        assert_eq!(format_value(99.98, "Uptime %", &point), "99.98%");
    }

    #[test]
    fn unnamed_points_render_plain() {
        let point = DataPoint::new().text_field("year", "2024");
        assert_eq!(format_value(82.0, "compliance", &point), "82");
    }

    #[test]
    fn formatting_is_deterministic() {
        let point = DataPoint::new().text_field("name", "USA");
        let first = format_value(40.0, "USA", &point);
        let second = format_value(40.0, "USA", &point);
        assert_eq!(first, second);
    }

    #[test]
    fn explicit_kinds_match_inferred_ones() {
        // Every static series carries its kind explicitly; the explicit
        // path must agree with inference on the names it replaces.
        let point = DataPoint::new().text_field("year", "2021");
        assert_eq!(
            ValueKind::Currency.render(69_000.0),
            format_value(69_000.0, "Price", &point),
        );
        assert_eq!(
            ValueKind::Millions.render(25.0),
            format_value(25.0, "Wallets (M)", &point),
        );
        assert_eq!(
            ValueKind::Plain.render(400_000.0),
            format_value(400_000.0, "Transactions", &point),
        );
    }
}
