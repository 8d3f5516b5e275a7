//! Color themes for the UI.

use crate::app::Theme;
use crate::data::palette;
use ratatui::style::Color;

/// Theme color palette.
///
/// Chart series and slice colors come from the data itself; these are the
/// chrome colors around them.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Panel background color.
    pub panel: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Border color.
    pub border: Color,
    /// Cursor foreground color.
    pub cursor_fg: Color,
    /// Cursor background color.
    pub cursor_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Accent color (Bitcoin orange in both themes).
    pub accent: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                bg: Color::Rgb(24, 26, 31),
                panel: Color::Rgb(31, 34, 40),
                text: Color::Rgb(229, 231, 235),
                heading: Color::Rgb(243, 244, 246),
                label: Color::Rgb(156, 163, 175),
                muted: Color::Rgb(107, 114, 128),
                border: Color::Rgb(75, 85, 99),
                cursor_fg: Color::Rgb(24, 26, 31),
                cursor_bg: palette::BITCOIN_ORANGE,
                status_fg: Color::Rgb(229, 231, 235),
                status_bg: Color::Rgb(41, 44, 51),
                accent: palette::BITCOIN_ORANGE,
            },
            Theme::Light => Self {
                bg: Color::Rgb(249, 250, 251),
                panel: Color::Rgb(255, 255, 255),
                text: Color::Rgb(55, 65, 81),
                heading: Color::Rgb(17, 24, 39),
                label: Color::Rgb(107, 114, 128),
                muted: Color::Rgb(156, 163, 175),
                border: Color::Rgb(209, 213, 219),
                cursor_fg: Color::Rgb(255, 255, 255),
                cursor_bg: palette::BITCOIN_ORANGE,
                status_fg: Color::Rgb(55, 65, 81),
                status_bg: Color::Rgb(229, 231, 235),
                accent: palette::BITCOIN_ORANGE,
            },
        }
    }
}
