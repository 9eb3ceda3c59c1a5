// Search panel
//
// Input box on top, results underneath. Results replace each other
// wholesale per query; a too-short query blanks the list. Enter copies
// the highlighted result's URL.

use crate::tui::app::{App, FocusPane};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focused == FocusPane::Search;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Input box
    let border_color = if focused { theme.accent } else { theme.muted };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");
    let input_inner = input_block.inner(rows[0]);
    f.render_widget(input_block, rows[0]);

    let input_line = if app.search_input.is_empty() && !focused {
        Line::from(Span::styled(
            "Search courses and lessons…",
            Style::default().fg(theme.muted),
        ))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(Span::styled(
            format!("{}{}", app.search_input, cursor),
            Style::default().fg(theme.foreground),
        ))
    };
    f.render_widget(Paragraph::new(input_line), input_inner);

    // Results list
    let results_block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.muted));
    let results_inner = results_block.inner(rows[1]);
    f.render_widget(results_block, rows[1]);

    let width = results_inner.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    if let Some(placeholder) = &app.page.search.placeholder {
        lines.push(Line::from(Span::styled(
            placeholder.clone(),
            Style::default().fg(theme.muted),
        )));
    }

    for (i, result) in app.page.search.results.iter().enumerate() {
        let selected = focused && i == app.selected_result;
        let mut title_style = Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::UNDERLINED);
        if selected {
            title_style = title_style.bg(theme.selection);
        }

        let mut title_spans = vec![Span::styled(
            truncate_to_width(&result.title, width.saturating_sub(10)),
            title_style,
        )];
        if let Some(kind) = &result.kind {
            title_spans.push(Span::styled(
                format!(" [{}]", kind),
                Style::default().fg(theme.muted),
            ));
        }
        lines.push(Line::from(title_spans));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&result.description, width),
            Style::default().fg(theme.muted),
        )));
        lines.push(Line::from(Span::styled(
            truncate_to_width(&result.url, width),
            Style::default().fg(theme.foreground),
        )));
        lines.push(Line::default());
    }

    f.render_widget(Paragraph::new(lines), results_inner);
}
