// Title bar with the navbar points badge
//
// The badge's 300 ms pulse has no scale transform in a terminal; it maps
// to reversed emphasis for the pulse window instead.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.accent));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = Line::from(vec![
        Span::styled(
            " 🌱 EcoLearn",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  learn · play · grow",
            Style::default().fg(theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(brand), inner);

    // Points badge, right-aligned. Rendered only when the badge holds a
    // number; non-numeric seeds leave it blank.
    if let Some(label) = app.page.points_badge.label() {
        let pulsing = app.page.points_badge.scale(app.now()) > 1.0;
        let mut style = Style::default()
            .fg(theme.warning)
            .add_modifier(Modifier::BOLD);
        if pulsing {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let badge = Line::from(Span::styled(format!(" {} ", label), style));
        f.render_widget(Paragraph::new(badge).alignment(Alignment::Right), inner);
    }
}
