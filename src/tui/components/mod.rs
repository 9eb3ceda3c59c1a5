// UI components
//
// Each component renders one region of the page model. Components read
// state; all mutation happens in the App.

pub mod achievement_modal;
pub mod alerts;
pub mod progress_panel;
pub mod quiz_panel;
pub mod search_panel;
pub mod title_bar;

use ratatui::layout::Rect;

/// A centered rect of the given size, clamped to the containing area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
