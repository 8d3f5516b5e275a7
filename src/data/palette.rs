//! Corporate color palette.
//!
//! The palette is part of the data definitions: chart records carry their
//! own slice/bar colors, and the orange accent is the formatter's default
//! swatch color.

use ratatui::style::Color;

/// Bitcoin orange, the primary accent.
pub const BITCOIN_ORANGE: Color = Color::Rgb(247, 147, 26);

/// Professional blue.
pub const CORPORATE_BLUE: Color = Color::Rgb(0, 90, 156);
/// Muted teal/green.
pub const CORPORATE_TEAL: Color = Color::Rgb(0, 128, 128);
/// Muted purple.
pub const CORPORATE_PURPLE: Color = Color::Rgb(90, 79, 122);
/// Clear red for negative/alert values.
pub const CORPORATE_RED: Color = Color::Rgb(216, 60, 60);
/// Clear yellow for warning/restricted values.
pub const CORPORATE_YELLOW: Color = Color::Rgb(255, 184, 28);
/// Light grey for less important slices.
pub const CORPORATE_LIGHT_GREY: Color = Color::Rgb(209, 213, 219);
/// Medium grey for neutral elements.
pub const CORPORATE_MEDIUM_GREY: Color = Color::Rgb(156, 163, 175);
/// Dark grey for important neutral elements.
pub const CORPORATE_DARK_GREY: Color = Color::Rgb(75, 85, 99);
