// Alert banners
//
// One row per alert, newest on top, colored by severity. Banners expire
// on their own after five seconds; `x` dismisses the newest early.

use crate::page::alerts::AlertKind;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let theme = &app.theme;
    let lines: Vec<Line> = app
        .page
        .alerts
        .iter()
        .take(area.height as usize)
        .map(|alert| {
            let icon = match alert.kind {
                AlertKind::Info => "ℹ",
                AlertKind::Success => "✔",
                AlertKind::Danger => "✘",
            };
            let mut style = Style::default().fg(theme.alert_color(alert.kind));
            if alert.kind == AlertKind::Danger {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(format!(" {} {}", icon, alert.message), style),
                Span::styled("  (x to dismiss)", Style::default().fg(theme.muted)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
