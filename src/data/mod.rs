//! Static datasets and their record types.
//!
//! Everything the dashboard displays is defined here at build time. Each
//! chart-feeding record type knows how to turn itself into a
//! [`DataPoint`] for the formatting engine.

pub mod palette;
mod sets;

pub use sets::*;

use ratatui::style::Color;

use crate::format::{DataPoint, SeriesValue, ValueKind};

/// A headline metric shown on the overview grid.
#[derive(Debug, Clone, Copy)]
pub struct KeyMetric {
    /// Metric name.
    pub label: &'static str,
    /// Pre-rendered display value.
    pub value: &'static str,
}

/// One year of the price evolution series.
#[derive(Debug, Clone, Copy)]
pub struct PricePoint {
    /// Year label.
    pub year: &'static str,
    /// Year-end USD price.
    pub price: f64,
}

impl PricePoint {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("year", self.year)
            .number_field("price", self.price)
    }
}

/// An event on the historical timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineEvent {
    /// When the event happened.
    pub year: &'static str,
    /// Event title.
    pub title: &'static str,
    /// Optional one-line detail.
    pub details: Option<&'static str>,
}

/// Milestone category, deciding the marker color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneCategory {
    /// Protocol and software milestones.
    Tech,
    /// Market structure milestones.
    Market,
    /// Regulatory milestones.
    Regulation,
    /// Adoption milestones.
    Adoption,
}

impl MilestoneCategory {
    /// Marker color for this category.
    pub fn color(self) -> Color {
        match self {
            Self::Tech => palette::BITCOIN_ORANGE,
            Self::Market => palette::CORPORATE_BLUE,
            Self::Regulation => palette::CORPORATE_PURPLE,
            Self::Adoption => palette::CORPORATE_TEAL,
        }
    }
}

/// A categorized evolution milestone.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    /// Milestone title.
    pub title: &'static str,
    /// Short description.
    pub description: &'static str,
    /// Category deciding the marker color.
    pub category: MilestoneCategory,
}

/// Country count per regulatory stance.
#[derive(Debug, Clone, Copy)]
pub struct AdoptionRecord {
    /// Regulatory stance.
    pub status: &'static str,
    /// Number of countries with this stance.
    pub countries: u32,
    /// Bar color.
    pub color: Color,
}

impl AdoptionRecord {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("status", self.status)
            .number_field("countries", f64::from(self.countries))
            .with_color(self.color)
    }
}

/// BTC held by one institution (pie-style record).
#[derive(Debug, Clone, Copy)]
pub struct HoldingsRecord {
    /// Holder name.
    pub name: &'static str,
    /// Holding in BTC.
    pub value: f64,
    /// Slice color.
    pub color: Color,
}

impl HoldingsRecord {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("name", self.name)
            .number_field("value", self.value)
            .with_color(self.color)
    }
}

/// Regulatory compliance level for one year.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceRecord {
    /// Year label.
    pub year: &'static str,
    /// Compliance percentage.
    pub compliance: f64,
    /// Meter color.
    pub color: Color,
}

impl ComplianceRecord {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("year", self.year)
            .text_field("name", self.year)
            .text_field("unit", "%")
            .number_field("compliance", self.compliance)
            .with_color(self.color)
    }
}

/// One boom/bust cycle summary.
#[derive(Debug, Clone, Copy)]
pub struct MarketCycle {
    /// Cycle period.
    pub period: &'static str,
    /// Peak gain over the cycle.
    pub gain: &'static str,
    /// Drawdown after the peak.
    pub correction: &'static str,
}

/// Transactions and wallets for one year.
#[derive(Debug, Clone, Copy)]
pub struct NetworkGrowthPoint {
    /// Year label.
    pub year: &'static str,
    /// Daily transactions.
    pub transactions: f64,
    /// Wallets, in millions.
    pub wallets: f64,
}

impl NetworkGrowthPoint {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("year", self.year)
            .number_field("transactions", self.transactions)
            .number_field("wallets", self.wallets)
    }
}

/// A pre-rendered network summary statistic.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStat {
    /// Statistic name.
    pub label: &'static str,
    /// Pre-rendered display value.
    pub value: &'static str,
    /// Display color.
    pub color: Color,
}

/// Hashrate share of one region (pie-style record).
#[derive(Debug, Clone, Copy)]
pub struct MiningShare {
    /// Region name.
    pub name: &'static str,
    /// Share percentage.
    pub value: f64,
    /// Slice color.
    pub color: Color,
}

impl MiningShare {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("name", self.name)
            .text_field("unit", "%")
            .number_field("value", self.value)
            .with_color(self.color)
    }
}

/// Correlation of Bitcoin with another asset class.
#[derive(Debug, Clone, Copy)]
pub struct AssetCorrelation {
    /// Asset class name.
    pub asset: &'static str,
    /// Correlation coefficient in -1..1.
    pub correlation: f64,
    /// Bar color.
    pub color: Color,
}

impl AssetCorrelation {
    /// Build the formatter record for this observation.
    pub fn data_point(&self) -> DataPoint {
        DataPoint::new()
            .text_field("name", self.asset)
            .number_field("correlation", self.correlation)
            .with_color(self.color)
    }
}

/// A price projection model and its range.
#[derive(Debug, Clone, Copy)]
pub struct PriceProjection {
    /// Model name.
    pub model: &'static str,
    /// Projected price range.
    pub range: &'static str,
}

/// A footer fact (supply cap, halving schedule).
#[derive(Debug, Clone, Copy)]
pub struct FooterFact {
    /// Fact label.
    pub label: &'static str,
    /// Pre-rendered display value.
    pub value: &'static str,
}

/// Static description of a plotted series: its display name, the value
/// kind assigned at data-definition time, and its stroke color.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSpec {
    /// Series display name.
    pub name: &'static str,
    /// Value kind for the formatting engine.
    pub kind: ValueKind,
    /// Stroke/fill color.
    pub color: Color,
}

impl SeriesSpec {
    /// Pair this series with a value under the cursor.
    pub fn value(&self, value: f64) -> SeriesValue {
        SeriesValue {
            series: self.name.to_string(),
            value,
            kind: Some(self.kind),
            color: Some(self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_value;

    #[test]
    fn datasets_are_populated() {
        assert_eq!(PRICE_EVOLUTION.len(), 16);
        assert_eq!(ADOPTION_STATUS.len(), 5);
        assert_eq!(HOLDINGS.len(), 5);
        assert_eq!(MINING_DISTRIBUTION.len(), 6);
        assert_eq!(ASSET_CORRELATIONS.len(), 5);
        assert_eq!(NETWORK_GROWTH.len(), 9);
        assert_eq!(REGULATORY_COMPLIANCE.len(), 4);
        assert_eq!(KEY_METRICS.len(), 5);
        assert_eq!(TIMELINE_EVENTS.len(), 8);
        assert_eq!(PRICE_PROJECTIONS.len(), 4);
    }

    #[test]
    fn mining_shares_sum_to_one_hundred() {
        let total: f64 = MINING_DISTRIBUTION.iter().map(|share| share.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn correlations_stay_in_range() {
        for asset in ASSET_CORRELATIONS {
            assert!((-1.0..=1.0).contains(&asset.correlation), "{}", asset.asset);
        }
    }

    #[test]
    fn series_kinds_match_what_their_names_imply() {
        // The explicit kinds on the series specs must render exactly what
        // name-based inference would have produced.
        for point in PRICE_EVOLUTION {
            assert_eq!(
                PRICE_SERIES.kind.render(point.price),
                format_value(point.price, PRICE_SERIES.name, &point.data_point()),
            );
        }
        for point in NETWORK_GROWTH {
            let record = point.data_point();
            assert_eq!(
                TRANSACTIONS_SERIES.kind.render(point.transactions),
                format_value(point.transactions, TRANSACTIONS_SERIES.name, &record),
            );
            assert_eq!(
                WALLETS_SERIES.kind.render(point.wallets),
                format_value(point.wallets, WALLETS_SERIES.name, &record),
            );
        }
        for record in ADOPTION_STATUS {
            assert_eq!(
                COUNTRIES_SERIES.kind.render(f64::from(record.countries)),
                format_value(
                    f64::from(record.countries),
                    COUNTRIES_SERIES.name,
                    &record.data_point(),
                ),
            );
        }
    }

    #[test]
    fn holdings_points_classify_as_bitcoin() {
        for record in HOLDINGS {
            let formatted = format_value(record.value, record.name, &record.data_point());
            assert!(formatted.ends_with("BTC"), "{}: {}", record.name, formatted);
        }
    }

    #[test]
    fn mining_points_classify_as_percentages() {
        for share in MINING_DISTRIBUTION {
            let formatted = format_value(share.value, share.name, &share.data_point());
            assert!(formatted.ends_with('%'), "{}: {}", share.name, formatted);
        }
    }
}
