//! Application state and logic.

use crate::data::{
    self, ADOPTION_STATUS, ASSET_CORRELATIONS, HOLDINGS, MINING_DISTRIBUTION, NETWORK_GROWTH,
    PRICE_EVOLUTION,
};
use crate::format::{build_tooltip, DataPoint, SeriesValue, TooltipContent};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark slate theme.
    Dark,
    /// Light corporate theme.
    Light,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Dashboard sections, mirroring the layout groups of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Key metrics and supply facts.
    Overview,
    /// Price evolution and market cycles.
    Price,
    /// Transactions and wallet growth.
    Network,
    /// Historical timeline and milestones.
    Timeline,
    /// Global adoption status and regulatory compliance.
    Adoption,
    /// Institutional holdings.
    Holdings,
    /// Mining distribution by region.
    Mining,
    /// Asset correlations and price projections.
    Markets,
}

impl Section {
    /// All sections, in tab order.
    pub const ALL: [Section; 8] = [
        Section::Overview,
        Section::Price,
        Section::Network,
        Section::Timeline,
        Section::Adoption,
        Section::Holdings,
        Section::Mining,
        Section::Markets,
    ];

    /// Section title.
    pub fn name(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Price => "Price",
            Section::Network => "Network",
            Section::Timeline => "Timeline",
            Section::Adoption => "Adoption",
            Section::Holdings => "Holdings",
            Section::Mining => "Mining",
            Section::Markets => "Markets",
        }
    }

    /// Position in tab order.
    pub fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    /// Look up a section by (case-insensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.name().eq_ignore_ascii_case(name))
    }

    /// Next section in tab order, wrapping.
    pub fn next(self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section in tab order, wrapping.
    pub fn prev(self) -> Self {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Active section.
    pub section: Section,
    /// Per-section cursor position.
    cursors: [usize; Section::ALL.len()],
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Price chart records for the formatter.
    pub price_points: Vec<DataPoint>,
    /// Network growth records for the formatter.
    pub network_points: Vec<DataPoint>,
    /// Adoption status records for the formatter.
    pub adoption_points: Vec<DataPoint>,
    /// Holdings records for the formatter.
    pub holdings_points: Vec<DataPoint>,
    /// Mining distribution records for the formatter.
    pub mining_points: Vec<DataPoint>,
    /// Regulatory compliance records for the formatter.
    pub compliance_points: Vec<DataPoint>,
    /// Asset correlation records for the formatter.
    pub correlation_points: Vec<DataPoint>,
}

impl App {
    /// Create a new application instance, building all formatter records
    /// up front. They are never mutated afterwards.
    pub fn new(section: Section) -> Self {
        Self {
            section,
            cursors: [0; Section::ALL.len()],
            theme: Theme::Dark,
            status: "Ready".to_string(),
            price_points: PRICE_EVOLUTION.iter().map(|p| p.data_point()).collect(),
            network_points: NETWORK_GROWTH.iter().map(|p| p.data_point()).collect(),
            adoption_points: ADOPTION_STATUS.iter().map(|r| r.data_point()).collect(),
            holdings_points: HOLDINGS.iter().map(|r| r.data_point()).collect(),
            mining_points: MINING_DISTRIBUTION.iter().map(|s| s.data_point()).collect(),
            compliance_points: data::REGULATORY_COMPLIANCE
                .iter()
                .map(|r| r.data_point())
                .collect(),
            correlation_points: ASSET_CORRELATIONS.iter().map(|a| a.data_point()).collect(),
        }
    }

    /// Number of cursor-addressable data points in a section.
    pub fn point_count(&self, section: Section) -> usize {
        match section {
            Section::Overview | Section::Timeline => 0,
            Section::Price => self.price_points.len(),
            Section::Network => self.network_points.len(),
            Section::Adoption => self.adoption_points.len(),
            Section::Holdings => self.holdings_points.len(),
            Section::Mining => self.mining_points.len(),
            Section::Markets => self.correlation_points.len(),
        }
    }

    /// Cursor position in the active section.
    pub fn cursor(&self) -> usize {
        self.cursors[self.section.index()]
    }

    /// Move the cursor forward.
    pub fn cursor_next(&mut self) {
        let count = self.point_count(self.section);
        if count == 0 {
            return;
        }
        let slot = &mut self.cursors[self.section.index()];
        *slot = (*slot + 1).min(count - 1);
    }

    /// Move the cursor backward.
    pub fn cursor_prev(&mut self) {
        let slot = &mut self.cursors[self.section.index()];
        *slot = slot.saturating_sub(1);
    }

    /// Jump to the first data point.
    pub fn cursor_first(&mut self) {
        self.cursors[self.section.index()] = 0;
    }

    /// Jump to the last data point.
    pub fn cursor_last(&mut self) {
        let count = self.point_count(self.section);
        if count > 0 {
            self.cursors[self.section.index()] = count - 1;
        }
    }

    /// Switch to the next section.
    pub fn next_section(&mut self) {
        self.goto_section(self.section.next());
    }

    /// Switch to the previous section.
    pub fn prev_section(&mut self) {
        self.goto_section(self.section.prev());
    }

    /// Switch to a specific section.
    pub fn goto_section(&mut self, section: Section) {
        self.section = section;
        self.status = format!("Section: {}", section.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Inspector content for the data point under the cursor, if the
    /// active section has one.
    pub fn inspector(&self) -> Option<TooltipContent> {
        let i = self.cursor();
        match self.section {
            Section::Overview | Section::Timeline => None,
            Section::Price => {
                let record = PRICE_EVOLUTION.get(i)?;
                let point = self.price_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[data::PRICE_SERIES.value(record.price)],
                ))
            },
            Section::Network => {
                let record = NETWORK_GROWTH.get(i)?;
                let point = self.network_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[
                        data::TRANSACTIONS_SERIES.value(record.transactions),
                        data::WALLETS_SERIES.value(record.wallets),
                    ],
                ))
            },
            Section::Adoption => {
                let record = ADOPTION_STATUS.get(i)?;
                let point = self.adoption_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[data::COUNTRIES_SERIES.value(f64::from(record.countries))],
                ))
            },
            Section::Holdings => {
                let record = HOLDINGS.get(i)?;
                let point = self.holdings_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[SeriesValue::inferred(record.name, record.value)],
                ))
            },
            Section::Mining => {
                let record = MINING_DISTRIBUTION.get(i)?;
                let point = self.mining_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[SeriesValue::inferred(record.name, record.value)],
                ))
            },
            Section::Markets => {
                let record = ASSET_CORRELATIONS.get(i)?;
                let point = self.correlation_points.get(i)?;
                Some(build_tooltip(
                    None,
                    point,
                    &[SeriesValue::inferred(record.asset, record.correlation)],
                ))
            },
        }
    }

    /// Copy the active section as plain text.
    pub fn copy_section(&mut self) {
        let text = crate::util::section_to_text(self);
        match crate::clipboard::copy_to_clipboard(&text) {
            Ok(()) => self.status = format!("{} copied!", self.section.name()),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_cycle_and_wrap() {
        assert_eq!(Section::Overview.next(), Section::Price);
        assert_eq!(Section::Markets.next(), Section::Overview);
        assert_eq!(Section::Overview.prev(), Section::Markets);
    }

    #[test]
    fn sections_resolve_by_name() {
        assert_eq!(Section::from_name("price"), Some(Section::Price));
        assert_eq!(Section::from_name("MARKETS"), Some(Section::Markets));
        assert_eq!(Section::from_name("nope"), None);
    }

    #[test]
    fn cursor_is_clamped_to_the_section() {
        let mut app = App::new(Section::Adoption);
        for _ in 0..100 {
            app.cursor_next();
        }
        assert_eq!(app.cursor(), ADOPTION_STATUS.len() - 1);

        app.cursor_first();
        app.cursor_prev();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn each_section_keeps_its_own_cursor() {
        let mut app = App::new(Section::Price);
        app.cursor_next();
        app.cursor_next();
        app.goto_section(Section::Holdings);
        assert_eq!(app.cursor(), 0);
        app.goto_section(Section::Price);
        assert_eq!(app.cursor(), 2);
    }

    #[test]
    fn static_sections_have_no_inspector() {
        let mut app = App::new(Section::Overview);
        assert!(app.inspector().is_none());
        app.goto_section(Section::Timeline);
        assert!(app.inspector().is_none());
    }

    #[test]
    fn price_inspector_formats_the_hovered_year() {
        let mut app = App::new(Section::Price);
        // 2017 sits at index 7.
        for _ in 0..7 {
            app.cursor_next();
        }
        let content = app.inspector().expect("price section has data points");
        assert_eq!(content.heading, "2017");
        assert_eq!(content.lines[0].value, "$19,000");
    }

    #[test]
    fn network_inspector_lists_both_series() {
        let mut app = App::new(Section::Network);
        app.cursor_last();
        let content = app.inspector().expect("network section has data points");
        assert_eq!(content.heading, "2025");
        assert_eq!(content.lines[0].value, "1,200,000");
        assert_eq!(content.lines[1].value, "55M");
    }

    #[test]
    fn holdings_inspector_uses_the_btc_heuristic() {
        let app = App::new(Section::Holdings);
        let content = app.inspector().expect("holdings section has data points");
        assert_eq!(content.heading, "BlackRock (IBIT)");
        assert_eq!(content.lines[0].value, "350.0K BTC");
    }

    #[test]
    fn adoption_inspector_overrides_the_heading_with_status() {
        let mut app = App::new(Section::Adoption);
        app.cursor_next();
        let content = app.inspector().expect("adoption section has data points");
        assert_eq!(content.heading, "Permissive/Legal");
        assert_eq!(content.lines[0].value, "105 countries");
    }
}
