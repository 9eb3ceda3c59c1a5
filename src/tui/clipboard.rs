//! Clipboard helper for copying text to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard handle is
//! created per call rather than held open.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
///
/// Fails on headless systems without a display server; callers surface
/// that as feedback rather than an error.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}
