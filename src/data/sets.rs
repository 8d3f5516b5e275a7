//! The hardcoded datasets.
//!
//! Figures are a historical snapshot (as of June 2025); the dashboard has
//! no runtime data source by design.

use super::palette::*;
use super::{
    AdoptionRecord, AssetCorrelation, ComplianceRecord, FooterFact, HoldingsRecord, KeyMetric,
    MarketCycle, Milestone, MilestoneCategory, MiningShare, NetworkGrowthPoint, PriceProjection,
    PricePoint, SeriesSpec, SummaryStat, TimelineEvent,
};
use crate::format::ValueKind;

/// Headline price shown next to the page title.
pub const CURRENT_PRICE: &str = "$125,678";

/// The overview metrics grid.
pub static KEY_METRICS: [KeyMetric; 5] = [
    KeyMetric { label: "Market Cap", value: "$2.5 Trillion" },
    KeyMetric { label: "Daily Transactions", value: "~350,000" },
    KeyMetric { label: "Network Hashrate", value: "~1200 EH/s" },
    KeyMetric { label: "BTC in Circulation", value: "19.95M / 21M" },
    KeyMetric { label: "Countries Recognizing", value: "150+" },
];

/// Year-end USD prices, 2010-2025 (log-scale display).
pub static PRICE_EVOLUTION: [PricePoint; 16] = [
    PricePoint { year: "2010", price: 0.1 },
    PricePoint { year: "2011", price: 1.0 },
    PricePoint { year: "2012", price: 13.0 },
    PricePoint { year: "2013", price: 850.0 },
    PricePoint { year: "2014", price: 320.0 },
    PricePoint { year: "2015", price: 430.0 },
    PricePoint { year: "2016", price: 960.0 },
    PricePoint { year: "2017", price: 19000.0 },
    PricePoint { year: "2018", price: 3800.0 },
    PricePoint { year: "2019", price: 7200.0 },
    PricePoint { year: "2020", price: 29000.0 },
    PricePoint { year: "2021", price: 69000.0 },
    PricePoint { year: "2022", price: 16500.0 },
    PricePoint { year: "2023", price: 42000.0 },
    PricePoint { year: "2024", price: 103000.0 },
    PricePoint { year: "2025", price: 125000.0 },
];

/// The price evolution line.
pub static PRICE_SERIES: SeriesSpec = SeriesSpec {
    name: "Price",
    kind: ValueKind::Currency,
    color: BITCOIN_ORANGE,
};

/// The historical timeline, whitepaper to ETFs.
pub static TIMELINE_EVENTS: [TimelineEvent; 8] = [
    TimelineEvent { year: "Oct 2008", title: "Satoshi's Whitepaper", details: None },
    TimelineEvent { year: "May 2010", title: "Bitcoin Pizza Day", details: Some("10,000 BTC for 2 Pizzas") },
    TimelineEvent { year: "2013", title: "First Major Rally", details: Some("$1,242 Peak") },
    TimelineEvent { year: "Feb 2014", title: "Mt. Gox Collapse", details: Some("744,000 BTC Lost") },
    TimelineEvent { year: "Dec 2017", title: "Bull Market Peak", details: Some("$19,783") },
    TimelineEvent { year: "Apr 2021", title: "New ATH", details: Some("$64,800") },
    TimelineEvent { year: "Jan 2024", title: "US Spot ETFs Approve", details: None },
    TimelineEvent { year: "Dec 2024", title: "$100K Speculation", details: Some("Major Price Target") },
];

/// Protocol and software milestones.
pub static TECHNICAL_MILESTONES: [Milestone; 4] = [
    Milestone {
        title: "2009: Genesis Block",
        description: "First block mined with message: \"Chancellor on brink of second bailout for banks\"",
        category: MilestoneCategory::Tech,
    },
    Milestone {
        title: "2016: Segregated Witness",
        description: "Protocol upgrade improving transaction capacity and enabling Lightning Network",
        category: MilestoneCategory::Tech,
    },
    Milestone {
        title: "2017: Bitcoin Cash Fork",
        description: "Network split into BTC (1MB blocks) and BCH (8MB blocks)",
        category: MilestoneCategory::Tech,
    },
    Milestone {
        title: "2023: Ordinals Protocol",
        description: "NFT-like functionality introduced to Bitcoin blockchain",
        category: MilestoneCategory::Tech,
    },
];

/// Institutional and regulatory milestones.
pub static INSTITUTIONAL_MILESTONES: [Milestone; 4] = [
    Milestone {
        title: "2013: FinCEN Guidelines",
        description: "First major US regulatory framework for Bitcoin businesses",
        category: MilestoneCategory::Regulation,
    },
    Milestone {
        title: "2014: Microsoft Adoption",
        description: "Microsoft begins accepting Bitcoin for Xbox and Windows products",
        category: MilestoneCategory::Adoption,
    },
    Milestone {
        title: "2021: El Salvador Legal Tender",
        description: "First nation to adopt Bitcoin as official legal tender",
        category: MilestoneCategory::Regulation,
    },
    Milestone {
        title: "2024: US Spot ETF Impact",
        description: "US SEC approved Bitcoin spot ETFs, significantly impacting mainstream investment",
        category: MilestoneCategory::Market,
    },
];

/// Country counts per regulatory stance.
pub static ADOPTION_STATUS: [AdoptionRecord; 5] = [
    AdoptionRecord { status: "Legal Tender", countries: 2, color: BITCOIN_ORANGE },
    AdoptionRecord { status: "Permissive/Legal", countries: 105, color: CORPORATE_TEAL },
    AdoptionRecord { status: "Restricted", countries: 55, color: CORPORATE_YELLOW },
    AdoptionRecord { status: "Hostile/Implicit Ban", countries: 20, color: CORPORATE_PURPLE },
    AdoptionRecord { status: "Banned (Explicit)", countries: 12, color: CORPORATE_RED },
];

/// The adoption status bars.
pub static COUNTRIES_SERIES: SeriesSpec = SeriesSpec {
    name: "Countries",
    kind: ValueKind::Count { unit: "countries" },
    color: CORPORATE_TEAL,
};

/// Institutional BTC holdings.
pub static HOLDINGS: [HoldingsRecord; 5] = [
    HoldingsRecord { name: "BlackRock (IBIT)", value: 350000.0, color: CORPORATE_DARK_GREY },
    HoldingsRecord { name: "MicroStrategy", value: 220000.0, color: CORPORATE_BLUE },
    HoldingsRecord { name: "Fidelity (FBTC)", value: 200000.0, color: CORPORATE_MEDIUM_GREY },
    HoldingsRecord { name: "Grayscale (GBTC)", value: 280000.0, color: CORPORATE_LIGHT_GREY },
    HoldingsRecord { name: "Other Gov/Public/ETFs", value: 500000.0, color: BITCOIN_ORANGE },
];

/// Regulatory compliance levels by year.
pub static REGULATORY_COMPLIANCE: [ComplianceRecord; 4] = [
    ComplianceRecord { year: "2013", compliance: 15.0, color: CORPORATE_RED },
    ComplianceRecord { year: "2017", compliance: 40.0, color: CORPORATE_YELLOW },
    ComplianceRecord { year: "2021", compliance: 65.0, color: CORPORATE_BLUE },
    ComplianceRecord { year: "2024", compliance: 82.0, color: BITCOIN_ORANGE },
];

/// Boom/bust cycle summaries.
pub static MARKET_CYCLES: [MarketCycle; 4] = [
    MarketCycle { period: "2011-2012", gain: "+9,900%", correction: "-93% Correction" },
    MarketCycle { period: "2013-2015", gain: "+10,000%", correction: "-85% Correction" },
    MarketCycle { period: "2016-2018", gain: "+2,800%", correction: "-84% Correction" },
    MarketCycle { period: "2019-2022", gain: "+1,600%", correction: "-77% Correction" },
];

/// Daily transactions and wallet counts by year.
pub static NETWORK_GROWTH: [NetworkGrowthPoint; 9] = [
    NetworkGrowthPoint { year: "2010", transactions: 100.0, wallets: 0.01 },
    NetworkGrowthPoint { year: "2012", transactions: 10000.0, wallets: 0.5 },
    NetworkGrowthPoint { year: "2014", transactions: 80000.0, wallets: 3.0 },
    NetworkGrowthPoint { year: "2016", transactions: 250000.0, wallets: 8.0 },
    NetworkGrowthPoint { year: "2018", transactions: 350000.0, wallets: 15.0 },
    NetworkGrowthPoint { year: "2020", transactions: 400000.0, wallets: 25.0 },
    NetworkGrowthPoint { year: "2022", transactions: 550000.0, wallets: 40.0 },
    NetworkGrowthPoint { year: "2024", transactions: 1000000.0, wallets: 47.0 },
    NetworkGrowthPoint { year: "2025", transactions: 1200000.0, wallets: 55.0 },
];

/// The transactions line of the network growth chart.
pub static TRANSACTIONS_SERIES: SeriesSpec = SeriesSpec {
    name: "Transactions",
    kind: ValueKind::Plain,
    color: BITCOIN_ORANGE,
};

/// The wallets line of the network growth chart.
pub static WALLETS_SERIES: SeriesSpec = SeriesSpec {
    name: "Wallets (M)",
    kind: ValueKind::Millions,
    color: CORPORATE_BLUE,
};

/// Pre-rendered network summary stats.
pub static NETWORK_GROWTH_SUMMARY: [SummaryStat; 4] = [
    SummaryStat { label: "Daily Transactions", value: "~1.2M+", color: BITCOIN_ORANGE },
    SummaryStat { label: "Wallets", value: "55M+", color: CORPORATE_BLUE },
    SummaryStat { label: "Nodes", value: "18,000+", color: CORPORATE_DARK_GREY },
    SummaryStat { label: "Uptime", value: "99.98%", color: CORPORATE_TEAL },
];

/// Hashrate distribution by region.
pub static MINING_DISTRIBUTION: [MiningShare; 6] = [
    MiningShare { name: "USA", value: 40.0, color: BITCOIN_ORANGE },
    MiningShare { name: "China (Covert)", value: 15.0, color: CORPORATE_RED },
    MiningShare { name: "Kazakhstan", value: 10.0, color: CORPORATE_PURPLE },
    MiningShare { name: "Russia", value: 10.0, color: CORPORATE_BLUE },
    MiningShare { name: "Canada", value: 8.0, color: CORPORATE_TEAL },
    MiningShare { name: "Others", value: 17.0, color: CORPORATE_LIGHT_GREY },
];

/// Correlation of Bitcoin with other asset classes.
pub static ASSET_CORRELATIONS: [AssetCorrelation; 5] = [
    AssetCorrelation { asset: "S&P 500", correlation: 0.38, color: BITCOIN_ORANGE },
    AssetCorrelation { asset: "Gold", correlation: 0.25, color: CORPORATE_YELLOW },
    AssetCorrelation { asset: "US Dollar", correlation: -0.30, color: CORPORATE_RED },
    AssetCorrelation { asset: "NASDAQ", correlation: 0.48, color: BITCOIN_ORANGE },
    AssetCorrelation { asset: "Real Estate", correlation: 0.18, color: CORPORATE_TEAL },
];

/// Price projection models and ranges.
pub static PRICE_PROJECTIONS: [PriceProjection; 4] = [
    PriceProjection { model: "Stock-to-Flow (Post-Halving)", range: "$250K - $1M" },
    PriceProjection { model: "Institutional Adoption Wave", range: "$200K - $750K" },
    PriceProjection { model: "Metcalfe's Law (Network Growth)", range: "$150K - $500K" },
    PriceProjection { model: "Diminishing Cycles Theory", range: "$180K - $600K" },
];

/// Supply and halving facts for the footer line.
pub static FOOTER_FACTS: [FooterFact; 3] = [
    FooterFact { label: "Supply Cap:", value: "21M BTC" },
    FooterFact { label: "Current Supply:", value: "19.95M BTC" },
    FooterFact { label: "Next Halving:", value: "~April 2028" },
];
