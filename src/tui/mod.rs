// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: initialization and cleanup, the
// event loop (keyboard input, timer ticks, network events), and input
// routing. Rendering lives in `ui` and the component modules.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod ui;

use crate::anim::Clock;
use crate::api::ApiClient;
use crate::config::Config;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use crate::page::alerts::AlertKind;
use anyhow::{Context, Result};
use app::{App, FocusPane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Demo lesson targeted by the "complete lesson" shortcut
const DEMO_LESSON_ID: i64 = 2;

/// Run the TUI.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop errors.
pub async fn run_tui(
    mut event_rx: mpsc::Receiver<AppEvent>,
    log_buffer: LogBuffer,
    config: Config,
    api: Option<Arc<ApiClient>>,
    event_tx: mpsc::Sender<AppEvent>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, log_buffer, api, event_tx, clock);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop: keyboard input, timer ticks for animations and the
/// search debounce, and resolved network operations.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    // 50 ms tick keeps the counter/fill animations smooth enough
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick: animations, alert sweep, debounce poll
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Resolved network operations
            Some(app_event) = event_rx.recv() => {
                app.handle_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered dispatch: modal first, then global keys, then the focused pane.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // The modal captures all input while open; any close key destroys it
    if app.page.modal.is_some() {
        if matches!(
            key_event.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')
        ) {
            app.page.close_modal();
        }
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    match app.focused {
        FocusPane::Quiz => handle_quiz_keys(app, &key_event),
        FocusPane::Search => handle_search_keys(app, &key_event),
    }
}

/// Keys that work regardless of pane. Returns true if handled.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focused = match app.focused {
                FocusPane::Quiz => FocusPane::Search,
                FocusPane::Search => FocusPane::Quiz,
            };
            true
        }
        _ => false,
    }
}

/// Quiz pane: navigate questions/options, select, submit, complete lesson.
fn handle_quiz_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.cursor_prev_option(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_next_option(),
        KeyCode::Left | KeyCode::Char('h') => app.cursor_prev_question(),
        KeyCode::Right | KeyCode::Char('l') => app.cursor_next_question(),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_under_cursor(),
        KeyCode::Char('s') => app.submit_quiz(),
        KeyCode::Char('m') => app.complete_lesson(DEMO_LESSON_ID),
        // Dismiss the newest alert banner
        KeyCode::Char('x') => app.page.alerts.dismiss(0),
        _ => {}
    }
}

/// Search pane: the input box owns printable characters; Enter copies the
/// highlighted result's URL.
fn handle_search_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.search_input_changed();
            app.focused = FocusPane::Quiz;
        }
        KeyCode::Backspace => {
            let _ = app.search_input.pop();
            app.search_input_changed();
        }
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
            app.search_input_changed();
        }
        KeyCode::Up => {
            app.selected_result = app.selected_result.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = app.page.search.results.len();
            if len > 0 {
                app.selected_result = (app.selected_result + 1).min(len - 1);
            }
        }
        KeyCode::Enter => {
            copy_selected_result(app);
        }
        _ => {}
    }
}

/// Copy the highlighted search result's URL to the clipboard, with alert
/// feedback either way.
fn copy_selected_result(app: &mut App) {
    let Some(result) = app.page.search.results.get(app.selected_result) else {
        return;
    };
    let url = result.url.clone();
    let now = app.now();
    match clipboard::copy_to_clipboard(&url) {
        Ok(()) => app
            .page
            .show_alert(format!("Copied {}", url), AlertKind::Info, now),
        Err(e) => {
            tracing::warn!(%e, "clipboard copy failed");
            app.page
                .show_alert("Failed to copy", AlertKind::Danger, now);
        }
    }
}
