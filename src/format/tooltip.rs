//! Inspector (tooltip) content assembly.
//!
//! Builds the label/value/color triples shown when the cursor rests on a
//! data point. The heading is resolved once from the first series entry;
//! each series value is then formatted independently against the shared
//! data point.

use ratatui::style::Color;

use crate::data::palette;

use super::{DataPoint, ValueKind};

/// One series value under the cursor.
#[derive(Debug, Clone)]
pub struct SeriesValue {
    /// Series label or field key associated with the value.
    pub series: String,
    /// Raw magnitude.
    pub value: f64,
    /// Kind assigned at data-definition time, if any. `None` means the
    /// kind is inferred from the series name and the data point.
    pub kind: Option<ValueKind>,
    /// Stroke/fill color of the originating series.
    pub color: Option<Color>,
}

impl SeriesValue {
    /// A series value whose kind is inferred at formatting time (pie-style
    /// data, where the kind depends on the slice).
    pub fn inferred(series: impl Into<String>, value: f64) -> Self {
        Self {
            series: series.into(),
            value,
            kind: None,
            color: None,
        }
    }
}

/// One formatted line of the inspector panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLine {
    /// Series label shown before the value.
    pub series: String,
    /// Formatted display value.
    pub value: String,
    /// Swatch color binding the line to its series.
    pub color: Color,
}

/// Fully assembled inspector content.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    /// Primary heading shown above all series values.
    pub heading: String,
    /// Heading swatch color.
    pub heading_color: Color,
    /// One line per concurrent series value.
    pub lines: Vec<TooltipLine>,
}

/// Resolve the primary heading for a hovered point.
///
/// Country-status series override the heading with the point's `status`;
/// pie-style points (those carrying a `name`) override it with that name.
/// Otherwise the explicit label wins, then `year`, `status`, `name`, and
/// finally the empty string.
pub fn primary_label(explicit: Option<&str>, series: &str, point: &DataPoint) -> String {
    let series = series.to_lowercase();

    if series.contains("countries") {
        if let Some(status) = point.text("status") {
            return status.to_string();
        }
    } else if !series.contains("price")
        && !series.contains("transactions")
        && !series.contains("wallets")
    {
        if let Some(name) = point.text("name") {
            return name.to_string();
        }
    }

    explicit
        .map(str::to_string)
        .or_else(|| point.text("year").map(str::to_string))
        .or_else(|| point.text("status").map(str::to_string))
        .or_else(|| point.text("name").map(str::to_string))
        .unwrap_or_default()
}

/// Resolve a display color: the point's own color wins, then the series
/// stroke, then the orange accent.
pub fn resolve_color(point: &DataPoint, series_color: Option<Color>) -> Color {
    point
        .color
        .or(series_color)
        .unwrap_or(palette::BITCOIN_ORANGE)
}

/// Assemble inspector content for the series values under the cursor.
///
/// All entries share the same data point; the heading comes from the first
/// entry and each value is formatted with its own series name and kind.
pub fn build_tooltip(
    explicit_label: Option<&str>,
    point: &DataPoint,
    entries: &[SeriesValue],
) -> TooltipContent {
    let heading = entries
        .first()
        .map(|entry| primary_label(explicit_label, &entry.series, point))
        .unwrap_or_default();

    let heading_color = resolve_color(point, entries.first().and_then(|entry| entry.color));

    let lines = entries
        .iter()
        .map(|entry| {
            let kind = entry
                .kind
                .unwrap_or_else(|| ValueKind::infer(&entry.series, point, entry.value));
            TooltipLine {
                series: entry.series.clone(),
                value: kind.render(entry.value),
                color: resolve_color(point, entry.color),
            }
        })
        .collect();

    TooltipContent {
        heading,
        heading_color,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, value: f64) -> SeriesValue {
        SeriesValue {
            series: name.to_string(),
            value,
            kind: None,
            color: None,
        }
    }

    #[test]
    fn heading_prefers_explicit_label() {
        let point = DataPoint::new().text_field("year", "2020");
        assert_eq!(primary_label(Some("Peak"), "Price", &point), "Peak");
    }

    #[test]
    fn heading_falls_back_through_year_status_name() {
        let year = DataPoint::new().text_field("year", "2020");
        assert_eq!(primary_label(None, "Price", &year), "2020");

        let status = DataPoint::new().text_field("status", "Restricted");
        assert_eq!(primary_label(None, "Price", &status), "Restricted");

        assert_eq!(primary_label(None, "Price", &DataPoint::new()), "");
    }

    #[test]
    fn countries_series_uses_status_as_heading() {
        let point = DataPoint::new()
            .text_field("status", "Permissive/Legal")
            .number_field("countries", 105.0);

        let content = build_tooltip(
            Some("axis label"),
            &point,
            &[series("Countries", 105.0)],
        );
        assert_eq!(content.heading, "Permissive/Legal");
        assert_eq!(content.lines[0].value, "105 countries");
    }

    #[test]
    fn named_points_use_their_name_as_heading() {
        let point = DataPoint::new()
            .text_field("name", "MicroStrategy")
            .number_field("value", 220_000.0)
            .with_color(palette::CORPORATE_BLUE);

        let content = build_tooltip(None, &point, &[series("MicroStrategy", 220_000.0)]);
        assert_eq!(content.heading, "MicroStrategy");
        assert_eq!(content.lines[0].value, "220.0K BTC");
        assert_eq!(content.heading_color, palette::CORPORATE_BLUE);
    }

    #[test]
    fn multi_series_shares_one_heading() {
        let point = DataPoint::new()
            .text_field("year", "2024")
            .number_field("transactions", 1_000_000.0)
            .number_field("wallets", 47.0);

        let entries = [
            SeriesValue {
                series: "Transactions".to_string(),
                value: 1_000_000.0,
                kind: Some(ValueKind::Plain),
                color: Some(palette::BITCOIN_ORANGE),
            },
            SeriesValue {
                series: "Wallets (M)".to_string(),
                value: 47.0,
                kind: Some(ValueKind::Millions),
                color: Some(palette::CORPORATE_BLUE),
            },
        ];

        let content = build_tooltip(None, &point, &entries);
        assert_eq!(content.heading, "2024");
        assert_eq!(content.lines.len(), 2);
        assert_eq!(content.lines[0].value, "1,000,000");
        assert_eq!(content.lines[1].value, "47M");
        assert_eq!(content.lines[1].color, palette::CORPORATE_BLUE);
    }

    #[test]
    fn color_defaults_to_the_accent() {
        let point = DataPoint::new();
        assert_eq!(resolve_color(&point, None), palette::BITCOIN_ORANGE);
        assert_eq!(
            resolve_color(&point, Some(palette::CORPORATE_TEAL)),
            palette::CORPORATE_TEAL
        );
    }
}
