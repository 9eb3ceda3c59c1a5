// Quiz panel
//
// Renders the quiz under the cursor: graded results first (so a fresh
// result is scrolled into view), then each question with its options and
// correctness markers, then the submit control.

use crate::tui::app::{App, FocusPane};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focused == FocusPane::Quiz;

    let Some(quiz) = app.page.quizzes.get(app.cursor.quiz) else {
        return;
    };

    let border_color = if focused { theme.accent } else { theme.muted };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", quiz.title));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    // Results card renders at the top of the panel, which is what "scroll
    // into view" amounts to here; the one-shot flag adds emphasis.
    if let Some(card) = &app.page.quiz_results {
        let mut headline_style = Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD);
        if app.page.scroll_results_into_view {
            headline_style = headline_style.add_modifier(Modifier::UNDERLINED);
        }
        lines.push(Line::from(Span::styled(
            format!("🏆 {}", card.headline()),
            headline_style,
        )));
        lines.push(Line::from(Span::styled(
            card.score_line(),
            Style::default().fg(theme.foreground),
        )));
        lines.push(Line::from(Span::styled(
            card.points_line(),
            Style::default().fg(theme.warning),
        )));
        lines.push(Line::default());
    }

    for (q_idx, card) in quiz.questions.iter().enumerate() {
        let current_question = focused && q_idx == app.cursor.question;
        let prompt_style = if current_question {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        lines.push(Line::from(Span::styled(
            format!("{}. {}", q_idx + 1, card.prompt),
            prompt_style,
        )));

        for (o_idx, option) in card.options.iter().enumerate() {
            let radio = if option.selected { "(•)" } else { "( )" };
            // Grading markers trump the plain radio look
            let (marker, color) = if option.marked_correct {
                ("✓", theme.success)
            } else if option.marked_incorrect {
                ("✗", theme.danger)
            } else {
                (" ", theme.foreground)
            };

            let mut style = Style::default().fg(color);
            if current_question && o_idx == app.cursor.option {
                style = style.bg(theme.selection);
            }
            lines.push(Line::from(Span::styled(
                format!("  {} {} {}", radio, option.text, marker),
                style,
            )));
        }
        lines.push(Line::default());
    }

    // Submit control
    let submit = &quiz.submit;
    let submit_style = if submit.submitting {
        Style::default().fg(theme.warning)
    } else if submit.enabled {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted)
    };
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", submit.label),
        submit_style,
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
