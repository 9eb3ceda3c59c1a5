// Course progress and gamification stats
//
// Progress bars sample their fill animation each frame; stat counters
// show their count-up value. Achievement badges render with emphasis
// while their hover transform is active.

use crate::anim::Transform;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let now = app.now();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.muted))
        .title(" Progress ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_count = app.page.progress_bars.len() as u16;
    let mut constraints: Vec<Constraint> = Vec::new();
    for _ in 0..bar_count {
        constraints.push(Constraint::Length(2));
    }
    constraints.push(Constraint::Length(1)); // stats
    constraints.push(Constraint::Min(0)); // badges
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, bar) in app.page.progress_bars.iter().enumerate() {
        let percent = bar.percent_at(now);
        let gauge = Gauge::default()
            .block(Block::default().title(bar.label.clone()))
            .gauge_style(Style::default().fg(theme.accent))
            .label(format!("{}%", bar.aria_valuenow))
            .ratio((percent / 100.0).clamp(0.0, 1.0));
        f.render_widget(gauge, rows[i]);
    }

    // Stat counters (total points, courses in progress, ...)
    if !app.page.stat_counters.is_empty() {
        let mut spans = vec![Span::styled("Stats: ", Style::default().fg(theme.muted))];
        for (i, stat) in app.page.stat_counters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(theme.muted)));
            }
            spans.push(Span::styled(
                stat.display(now),
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), rows[bar_count as usize]);
    }

    // Achievement badges
    if !app.page.badges.is_empty() {
        let mut spans = vec![Span::styled("Badges: ", Style::default().fg(theme.muted))];
        for (i, badge) in app.page.badges.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let mut style = Style::default().fg(theme.success);
            if badge.transform != Transform::IDENTITY {
                style = style.add_modifier(Modifier::BOLD | Modifier::ITALIC);
            }
            spans.push(Span::styled(format!("🏅{}", badge.name), style));
        }
        f.render_widget(
            Paragraph::new(Line::from(spans)),
            rows[bar_count as usize + 1],
        );
    }
}
