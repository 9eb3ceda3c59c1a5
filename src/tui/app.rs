// Application state for the TUI
//
// The App owns the page model and is the single place page mutations
// happen. Network operations are spawned as tokio tasks that report back
// through the AppEvent channel; handle_event applies each outcome. In
// demo mode the same dispatch points route to canned responders instead.

use crate::anim::Clock;
use crate::api::ApiClient;
use crate::config::Config;
use crate::demo;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use crate::page::alerts::AlertKind;
use crate::page::modal::AchievementModal;
use crate::page::Page;
use crate::search::{Dispatch, InputAction, SearchController};
use crate::theme::Theme;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Quiz,
    Search,
}

/// Cursor into the quiz pane.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuizCursor {
    pub quiz: usize,
    pub question: usize,
    pub option: usize,
}

pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub page: Page,
    pub search: SearchController,
    /// Live contents of the search input box
    pub search_input: String,
    pub focused: FocusPane,
    pub cursor: QuizCursor,
    /// Highlighted row in the search results list
    pub selected_result: usize,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    clock: Arc<dyn Clock>,
    api: Option<Arc<ApiClient>>,
    tx: mpsc::Sender<AppEvent>,
}

impl App {
    pub fn new(
        config: Config,
        log_buffer: LogBuffer,
        api: Option<Arc<ApiClient>>,
        tx: mpsc::Sender<AppEvent>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // Page content ships with the client; fetching course pages is the
        // web app's concern, not this interaction layer's.
        let mut page = demo::sample_page();
        page.mount(clock.now());

        let search = SearchController::with_tuning(
            Duration::from_millis(config.search.debounce_ms),
            config.search.min_query_len,
        );
        let theme = Theme::named(&config.theme);

        Self {
            config,
            theme,
            page,
            search,
            search_input: String::new(),
            focused: FocusPane::Quiz,
            cursor: QuizCursor::default(),
            selected_result: 0,
            log_buffer,
            should_quit: false,
            clock,
            api,
            tx,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Periodic upkeep: page animations/alerts, and the search debounce.
    pub fn tick(&mut self) {
        let now = self.now();
        self.page.tick(now);
        if let Some(dispatch) = self.search.poll(now) {
            self.dispatch_search(dispatch);
        }
    }

    /// Called after every edit of the search input.
    pub fn search_input_changed(&mut self) {
        let action = self.search.on_input(&self.search_input, self.now());
        if action == InputAction::ClearResults {
            self.page.clear_search_results();
        }
        self.selected_result = 0;
    }

    fn dispatch_search(&mut self, dispatch: Dispatch) {
        if self.config.demo_mode {
            demo::spawn_search_responder(self.tx.clone(), dispatch.generation, dispatch.query);
            return;
        }
        let Some(api) = self.api.clone() else {
            tracing::warn!("no API client configured; dropping search");
            return;
        };
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .search(&dispatch.query)
                .await
                .map_err(|e| format!("{:#}", e));
            let _ = tx
                .send(AppEvent::SearchFinished {
                    generation: dispatch.generation,
                    query: dispatch.query,
                    outcome,
                })
                .await;
        });
    }

    /// Submit the quiz under the cursor. No-op until a selection enabled
    /// the control, and while a submission is already in flight.
    pub fn submit_quiz(&mut self) {
        let Some(quiz) = self.page.quizzes.get(self.cursor.quiz) else {
            return;
        };
        if !quiz.submit.enabled || quiz.submit.submitting {
            return;
        }
        let quiz_id = quiz.id;

        // Collected across the whole page, then the control locks
        let answers = self.page.collect_answers();
        self.page.begin_submit(quiz_id);

        if self.config.demo_mode {
            demo::spawn_quiz_responder(self.tx.clone(), quiz_id, answers);
            return;
        }
        let Some(api) = self.api.clone() else {
            tracing::warn!("no API client configured; dropping quiz submission");
            return;
        };
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .submit_quiz(quiz_id, &answers)
                .await
                .map_err(|e| format!("{:#}", e));
            let _ = tx.send(AppEvent::QuizSubmitted { quiz_id, outcome }).await;
        });
    }

    /// Mark a lesson complete.
    pub fn complete_lesson(&mut self, lesson_id: i64) {
        if self.config.demo_mode {
            demo::spawn_progress_responder(self.tx.clone(), lesson_id);
            return;
        }
        let Some(api) = self.api.clone() else {
            tracing::warn!("no API client configured; dropping progress update");
            return;
        };
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .update_lesson_progress(lesson_id, true)
                .await
                .map_err(|e| format!("{:#}", e));
            let _ = tx
                .send(AppEvent::ProgressUpdated {
                    lesson_id,
                    outcome,
                })
                .await;
        });
    }

    /// Apply a resolved network operation to the page.
    pub fn handle_event(&mut self, event: AppEvent) {
        let now = self.now();
        match event {
            AppEvent::QuizSubmitted { quiz_id, outcome } => match outcome {
                Ok(result) if result.success => {
                    self.page.apply_quiz_result(&result, now);
                    if self.config.behavior.surface_quiz_achievements
                        && !result.new_achievements.is_empty()
                    {
                        self.page.modal =
                            Some(AchievementModal::new(result.new_achievements.clone()));
                    }
                }
                // Server rejection and transport failure surface the same
                // generic alert; the submit control stays disabled
                Ok(result) => {
                    tracing::error!(
                        quiz_id,
                        message = result.message.as_deref().unwrap_or("unknown"),
                        "quiz submission rejected"
                    );
                    self.page.quiz_submission_failed(now);
                }
                Err(error) => {
                    tracing::error!(quiz_id, %error, "quiz submission failed");
                    self.page.quiz_submission_failed(now);
                }
            },

            AppEvent::ProgressUpdated { lesson_id, outcome } => match outcome {
                Ok(result) if result.success => self.page.apply_progress_result(&result, now),
                Ok(_) => {
                    tracing::error!(lesson_id, "progress update rejected");
                    self.surface_progress_error(now);
                }
                Err(error) => {
                    tracing::error!(lesson_id, %error, "progress update failed");
                    self.surface_progress_error(now);
                }
            },

            AppEvent::SearchFinished {
                generation,
                query,
                outcome,
            } => {
                // A newer query superseded this response; drop it so stale
                // results never overwrite current ones
                if !self.search.is_current(generation) {
                    tracing::debug!(query, generation, "dropping stale search response");
                    return;
                }
                match outcome {
                    Ok(results) => self.page.apply_search_results(results),
                    Err(error) => {
                        // Results area keeps its last rendered state
                        tracing::error!(query, %error, "search failed");
                        if self.config.behavior.surface_search_errors {
                            self.page.show_alert("Search failed", AlertKind::Danger, now);
                        }
                    }
                }
            }
        }
    }

    /// Log-only by default; an alert only when the deployment opted in.
    fn surface_progress_error(&mut self, now: Instant) {
        if self.config.behavior.surface_progress_errors {
            self.page
                .show_alert("Error updating progress", AlertKind::Danger, now);
        }
    }

    // ── Quiz pane navigation ────────────────────────────────────────────

    pub fn cursor_next_option(&mut self) {
        let len = self.current_card().map_or(0, |c| c.options.len());
        if len > 0 {
            self.cursor.option = (self.cursor.option + 1) % len;
        }
    }

    pub fn cursor_prev_option(&mut self) {
        let len = self.current_card().map_or(0, |c| c.options.len());
        if len > 0 {
            self.cursor.option = (self.cursor.option + len - 1) % len;
        }
    }

    pub fn cursor_next_question(&mut self) {
        if let Some(quiz) = self.page.quizzes.get(self.cursor.quiz) {
            let len = quiz.questions.len();
            if len > 0 {
                self.cursor.question = (self.cursor.question + 1) % len;
                self.cursor.option = 0;
            }
        }
    }

    pub fn cursor_prev_question(&mut self) {
        if let Some(quiz) = self.page.quizzes.get(self.cursor.quiz) {
            let len = quiz.questions.len();
            if len > 0 {
                self.cursor.question = (self.cursor.question + len - 1) % len;
                self.cursor.option = 0;
            }
        }
    }

    fn current_card(&self) -> Option<&crate::page::quiz::QuestionCard> {
        self.page
            .quizzes
            .get(self.cursor.quiz)
            .and_then(|q| q.questions.get(self.cursor.question))
    }

    /// Select the option under the cursor.
    pub fn select_under_cursor(&mut self) {
        let (question, option) = (self.cursor.question, self.cursor.option);
        if let Some(quiz) = self.page.quizzes.get_mut(self.cursor.quiz) {
            quiz.select_option(question, option);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::ManualClock;
    use crate::api::types::SearchResult;

    fn test_app(config: Config) -> App {
        let (tx, _rx) = mpsc::channel(8);
        App::new(
            config,
            LogBuffer::new(),
            None,
            tx,
            Arc::new(ManualClock::new()),
        )
    }

    fn result(url: &str) -> SearchResult {
        SearchResult {
            url: url.to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            kind: None,
        }
    }

    #[test]
    fn test_failed_submission_surfaces_one_alert_without_panicking() {
        let mut app = test_app(Config::default());

        app.handle_event(AppEvent::QuizSubmitted {
            quiz_id: 1,
            outcome: Err("connection refused".to_string()),
        });

        assert_eq!(app.page.alerts.len(), 1);
        let alert = app.page.alerts.iter().next().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
    }

    #[test]
    fn test_server_rejection_and_transport_failure_look_identical() {
        let mut app = test_app(Config::default());

        app.handle_event(AppEvent::QuizSubmitted {
            quiz_id: 1,
            outcome: Ok(crate::api::types::QuizResult {
                success: false,
                score: 0,
                total_questions: 0,
                percentage: 0.0,
                points_earned: 0,
                correct_answers: vec![],
                new_achievements: vec![],
                message: Some("Quiz already completed".to_string()),
            }),
        });

        let alert = app.page.alerts.iter().next().unwrap();
        assert_eq!(alert.message, "Error submitting quiz");
    }

    #[test]
    fn test_stale_search_response_is_dropped() {
        let mut app = test_app(Config::default());

        // Dispatch two queries back to back
        let now = app.now();
        app.search.on_input("oceans", now);
        let first = app.search.poll(now + Duration::from_millis(300)).unwrap();
        app.search.on_input("forests", now + Duration::from_millis(300));
        let second = app.search.poll(now + Duration::from_millis(600)).unwrap();

        // The older response resolves late and must not render
        app.handle_event(AppEvent::SearchFinished {
            generation: first.generation,
            query: first.query,
            outcome: Ok(vec![result("/stale")]),
        });
        assert!(app.page.search.results.is_empty());

        app.handle_event(AppEvent::SearchFinished {
            generation: second.generation,
            query: second.query,
            outcome: Ok(vec![result("/fresh")]),
        });
        assert_eq!(app.page.search.results[0].url, "/fresh");
    }

    #[test]
    fn test_progress_failure_is_silent_by_default() {
        let mut app = test_app(Config::default());

        app.handle_event(AppEvent::ProgressUpdated {
            lesson_id: 2,
            outcome: Err("timeout".to_string()),
        });

        assert!(app.page.alerts.is_empty());
    }

    #[test]
    fn test_progress_failure_surfaces_when_opted_in() {
        let mut config = Config::default();
        config.behavior.surface_progress_errors = true;
        let mut app = test_app(config);

        app.handle_event(AppEvent::ProgressUpdated {
            lesson_id: 2,
            outcome: Err("timeout".to_string()),
        });

        assert_eq!(app.page.alerts.len(), 1);
    }

    #[test]
    fn test_search_failure_keeps_last_results() {
        let mut app = test_app(Config::default());

        let now = app.now();
        app.search.on_input("oceans", now);
        let dispatch = app.search.poll(now + Duration::from_millis(300)).unwrap();
        app.handle_event(AppEvent::SearchFinished {
            generation: dispatch.generation,
            query: "oceans".to_string(),
            outcome: Ok(vec![result("/kept")]),
        });

        app.search.on_input("forests", now + Duration::from_millis(400));
        let dispatch = app.search.poll(now + Duration::from_millis(700)).unwrap();
        app.handle_event(AppEvent::SearchFinished {
            generation: dispatch.generation,
            query: "forests".to_string(),
            outcome: Err("boom".to_string()),
        });

        // Failure leaves the previously rendered results in place
        assert_eq!(app.page.search.results[0].url, "/kept");
        assert!(app.page.alerts.is_empty());
    }
}
