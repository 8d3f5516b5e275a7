//! Keymap help bar UI component.

use super::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(
    f: &mut Frame<'_>,
    area: Rect,
    has_cursor: bool,
    colors: &ThemeColors,
) {
    let keymap_text = if has_cursor {
        "q:quit | Tab:section | 1-8:jump | h/l:point | g/G:first/last | y:copy | T:theme | ?:help"
    } else {
        "q:quit | Tab:section | 1-8:jump | y:copy | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.muted).bg(colors.bg));

    f.render_widget(paragraph, area);
}
