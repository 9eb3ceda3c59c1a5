// Achievement modal overlay
//
// One card per achievement, centered over the page. The modal is a
// transient node: closing it destroys the state and the next batch of
// achievements builds a fresh one.

use crate::page::modal::AchievementModal;
use crate::theme::Theme;
use crate::tui::components::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, modal: &AchievementModal, theme: &Theme) {
    // Three lines per card plus chrome
    let height = (modal.achievements.len() as u16) * 4 + 4;
    let modal_area = centered_rect(48, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.success))
        .title(Span::styled(
            format!(" 🏆 {} ", modal.title()),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(modal_area);

    // Clear the area first so the modal sits on top of the page
    f.render_widget(Clear, modal_area);
    f.render_widget(block, modal_area);

    let mut lines: Vec<Line> = Vec::new();
    for achievement in &modal.achievements {
        lines.push(Line::from(Span::styled(
            format!("★ {}", achievement.icon),
            Style::default().fg(theme.warning),
        )));
        lines.push(Line::from(Span::styled(
            achievement.name.clone(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            achievement.description.clone(),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "press Esc to close",
        Style::default().fg(theme.muted),
    )));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
