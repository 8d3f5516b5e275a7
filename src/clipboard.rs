//! Clipboard export.
//!
//! The `y` binding renders the active section to plain text (see
//! [`crate::util::section_to_text`]) and places it on the system
//! clipboard here.

use crate::error::Result;
use arboard::Clipboard;

/// Put rendered section text on the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
