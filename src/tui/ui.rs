// Top-level layout and draw entry point
//
// Title bar with the points badge, alert banners underneath, then the
// main split: quiz and course progress on the left, search on the right.
// The achievement modal overlays everything when open.

use crate::tui::app::App;
use crate::tui::components::{achievement_modal, alerts, progress_panel, quiz_panel, search_panel, title_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Alerts take one row each, capped so they never crowd out the page
    let alert_rows = app.page.alerts.len().min(3) as u16;

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // title bar
            Constraint::Length(alert_rows), // alert banners
            Constraint::Min(8),             // main content
            Constraint::Length(1),          // key hints
        ])
        .split(area);

    title_bar::render(f, outer[0], app);
    alerts::render(f, outer[1], app);
    draw_main(f, outer[2], app);
    draw_hints(f, outer[3], app);

    if let Some(modal) = &app.page.modal {
        achievement_modal::render(f, area, modal, &app.theme);
    }
}

fn draw_main(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(columns[0]);

    quiz_panel::render(f, left[0], app);
    progress_panel::render(f, left[1], app);
    search_panel::render(f, columns[1], app);
}

fn draw_hints(f: &mut Frame, area: Rect, app: &App) {
    let hints = " Tab switch pane │ ↑↓ options │ ←→ questions │ Space select │ s submit │ m complete lesson │ q quit";
    let line = Line::from(hints).style(Style::default().fg(app.theme.muted));
    f.render_widget(Paragraph::new(line), area);
}
