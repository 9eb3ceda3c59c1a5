// Page model - explicit view state for one course page
//
// The page owns everything the renderer draws: quizzes, progress bars,
// the points badge, stacked alerts, the achievement modal, and search
// output. All mutations from the interaction flows land here, which
// makes every behavior testable without a terminal or a network.

pub mod alerts;
pub mod modal;
pub mod points;
pub mod progress;
pub mod quiz;

use crate::anim::Transform;
use crate::api::types::{ProgressUpdateResult, QuizResult, SearchResult};
use crate::api::AnswerMap;
use alerts::{AlertKind, AlertStack};
use modal::AchievementModal;
use points::{PointsBadge, StatCounter};
use progress::ProgressBar;
use quiz::{Quiz, ResultsCard};
use std::time::Instant;

/// A decorative achievement badge with a hover transform.
#[derive(Debug)]
pub struct AchievementBadge {
    pub name: String,
    pub icon: String,
    pub transform: Transform,
}

impl AchievementBadge {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            transform: Transform::IDENTITY,
        }
    }

    pub fn hover_enter(&mut self) {
        self.transform = Transform::hover();
    }

    pub fn hover_leave(&mut self) {
        self.transform = Transform::IDENTITY;
    }
}

/// Search output area. Results replace each other wholesale; there is no
/// merging and no pagination.
#[derive(Debug, Default)]
pub struct SearchPane {
    pub results: Vec<SearchResult>,
    /// Placeholder text shown instead of results ("No results found.")
    pub placeholder: Option<String>,
}

impl SearchPane {
    pub fn clear(&mut self) {
        self.results.clear();
        self.placeholder = None;
    }
}

/// One rendered course page.
#[derive(Debug, Default)]
pub struct Page {
    /// Entrance animation marker consumed by the renderer
    pub faded_in: bool,
    pub tooltips_enabled: bool,

    pub quizzes: Vec<Quiz>,
    /// The shared results container; `None` until a graded submission
    pub quiz_results: Option<ResultsCard>,
    /// One-shot hint for the renderer to bring the results into view
    pub scroll_results_into_view: bool,

    pub progress_bars: Vec<ProgressBar>,
    /// Index into `progress_bars` of the course bar that lesson updates
    /// target; pages without one skip that mutation
    pub course_progress: Option<usize>,

    pub stat_counters: Vec<StatCounter>,
    pub points_badge: PointsBadge,
    pub alerts: AlertStack,
    pub modal: Option<AchievementModal>,
    pub badges: Vec<AchievementBadge>,
    pub search: SearchPane,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document-ready initialization: entrance marker, tooltip activation,
    /// progress fill animations, stat counter animations. Alerts present
    /// at mount already carry their auto-dismiss deadline.
    pub fn mount(&mut self, now: Instant) {
        self.faded_in = true;
        self.tooltips_enabled = true;
        for bar in &mut self.progress_bars {
            bar.mount(now);
        }
        for stat in &mut self.stat_counters {
            stat.mount(now);
        }
    }

    /// Periodic upkeep from the UI tick: expire alerts, retire finished
    /// animations.
    pub fn tick(&mut self, now: Instant) {
        self.alerts.sweep(now);
        self.points_badge.settle(now);
        for bar in &mut self.progress_bars {
            bar.settle(now);
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>, kind: AlertKind, now: Instant) {
        self.alerts.push(message, kind, now);
    }

    /// Gather selected options into an AnswerMap. Scans every quiz on the
    /// page, not just the one being submitted: with several quizzes
    /// rendered at once their answers merge into one payload. Only
    /// actually-selected pairs are included.
    pub fn collect_answers(&self) -> AnswerMap {
        let mut answers = AnswerMap::new();
        for quiz in &self.quizzes {
            for card in &quiz.questions {
                if let Some(option) = card.selected_option() {
                    let _ = answers.insert(option.question_id.clone(), option.answer_id.clone());
                }
            }
        }
        answers
    }

    /// Put the given quiz's submit control into its loading state.
    pub fn begin_submit(&mut self, quiz_id: i64) {
        if let Some(quiz) = self.quizzes.iter_mut().find(|q| q.id == quiz_id) {
            quiz.begin_submit();
        }
    }

    /// Render a graded submission: results card, correctness markers,
    /// points update. Marking spans every option on the page, mirroring
    /// the collection scope.
    pub fn apply_quiz_result(&mut self, result: &QuizResult, now: Instant) {
        self.quiz_results = Some(ResultsCard {
            score: result.score,
            total_questions: result.total_questions,
            points_earned: result.points_earned,
        });
        self.scroll_results_into_view = true;

        for quiz in &mut self.quizzes {
            for card in &mut quiz.questions {
                for option in &mut card.options {
                    let answer_id = option.answer_id.parse::<i64>().ok();
                    let is_correct =
                        answer_id.is_some_and(|id| result.correct_answers.contains(&id));
                    if is_correct {
                        option.marked_correct = true;
                    }
                    // Selected options not on the correct list (including
                    // unparseable ids) are flagged incorrect
                    if option.selected && !is_correct {
                        option.marked_incorrect = true;
                    }
                }
            }
        }

        self.points_badge.apply_delta(result.points_earned, now);
    }

    /// Both transport failure and a `success: false` body land here: one
    /// generic danger alert, no retry, the submit control stays disabled.
    pub fn quiz_submission_failed(&mut self, now: Instant) {
        self.show_alert("Error submitting quiz", AlertKind::Danger, now);
    }

    /// Apply a successful lesson progress update: move the course bar,
    /// announce earned points, and surface any newly unlocked
    /// achievements in a fresh modal.
    pub fn apply_progress_result(&mut self, result: &ProgressUpdateResult, now: Instant) {
        if let Some(idx) = self.course_progress {
            if let Some(bar) = self.progress_bars.get_mut(idx) {
                bar.set_percent(result.progress_percentage);
            }
        }

        if result.points_earned > 0 {
            self.show_alert(
                format!(
                    "Lesson completed! You earned {} points.",
                    result.points_earned
                ),
                AlertKind::Success,
                now,
            );
            self.points_badge.apply_delta(result.points_earned, now);
        }

        if !result.new_achievements.is_empty() {
            self.modal = Some(AchievementModal::new(result.new_achievements.clone()));
        }
    }

    /// Replace search output wholesale.
    pub fn apply_search_results(&mut self, results: Vec<SearchResult>) {
        if results.is_empty() {
            self.search.results.clear();
            self.search.placeholder = Some("No results found.".to_string());
        } else {
            self.search.placeholder = None;
            self.search.results = results;
        }
    }

    pub fn clear_search_results(&mut self) {
        self.search.clear();
    }

    /// Destroy the modal. The next achievement batch builds a new one.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::quiz::{QuestionCard, QuizOption};
    use super::*;
    use crate::anim::{Clock, ManualClock};
    use crate::api::types::Achievement;

    fn page_with_quiz() -> Page {
        let mut page = Page::new();
        page.quizzes.push(Quiz::new(
            1,
            "Climate Basics",
            vec![
                QuestionCard::new(
                    "10",
                    "Q1",
                    vec![
                        QuizOption::new("10", "5", "A"),
                        QuizOption::new("10", "6", "B"),
                    ],
                ),
                QuestionCard::new(
                    "11",
                    "Q2",
                    vec![
                        QuizOption::new("11", "7", "A"),
                        QuizOption::new("11", "9", "B"),
                    ],
                ),
            ],
        ));
        page.points_badge = PointsBadge::from_text("100 pts");
        page
    }

    #[test]
    fn test_collect_answers_only_selected_pairs() {
        let mut page = page_with_quiz();
        page.quizzes[0].select_option(0, 1);
        // Second question intentionally left unanswered

        let answers = page.collect_answers();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("10").map(String::as_str), Some("6"));
    }

    #[test]
    fn test_collect_answers_spans_all_quizzes() {
        let mut page = page_with_quiz();
        page.quizzes.push(Quiz::new(
            2,
            "Recycling",
            vec![QuestionCard::new(
                "20",
                "Q1",
                vec![QuizOption::new("20", "31", "A")],
            )],
        ));
        page.quizzes[0].select_option(0, 0);
        page.quizzes[1].select_option(0, 0);

        // Answers from both quizzes merge into one payload
        let answers = page.collect_answers();
        assert_eq!(answers.len(), 2);
        assert!(answers.contains_key("10"));
        assert!(answers.contains_key("20"));
    }

    #[test]
    fn test_quiz_result_marks_correct_and_incorrect() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        // Select answer 5 (correct) and answer 9 (incorrect)
        page.quizzes[0].select_option(0, 0);
        page.quizzes[0].select_option(1, 1);

        let result = QuizResult {
            success: true,
            score: 1,
            total_questions: 2,
            percentage: 50.0,
            points_earned: 25,
            correct_answers: vec![5, 7],
            new_achievements: vec![],
            message: None,
        };
        page.apply_quiz_result(&result, clock.now());

        let options: Vec<&QuizOption> = page.quizzes[0]
            .questions
            .iter()
            .flat_map(|c| c.options.iter())
            .collect();
        let by_id = |id: &str| options.iter().find(|o| o.answer_id == id).unwrap();

        assert!(by_id("5").marked_correct);
        assert!(!by_id("5").marked_incorrect);
        // Answer 7 was correct but unselected: marked correct, not incorrect
        assert!(by_id("7").marked_correct);
        assert!(!by_id("7").marked_incorrect);
        // Answer 9 was selected and wrong
        assert!(by_id("9").marked_incorrect);
        assert!(!by_id("9").marked_correct);
    }

    #[test]
    fn test_quiz_result_updates_points_and_results_card() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        let result = QuizResult {
            success: true,
            score: 2,
            total_questions: 2,
            percentage: 100.0,
            points_earned: 25,
            correct_answers: vec![5, 7],
            new_achievements: vec![],
            message: None,
        };

        page.apply_quiz_result(&result, clock.now());

        assert_eq!(page.points_badge.label().as_deref(), Some("125 pts"));
        assert!(page.scroll_results_into_view);
        let card = page.quiz_results.as_ref().unwrap();
        assert_eq!(card.score_line(), "Score: 2/2");
    }

    #[test]
    fn test_failed_submission_single_danger_alert() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();

        page.quiz_submission_failed(clock.now());

        assert_eq!(page.alerts.len(), 1);
        let alert = page.alerts.iter().next().unwrap();
        assert_eq!(alert.kind, AlertKind::Danger);
        assert_eq!(alert.message, "Error submitting quiz");
    }

    #[test]
    fn test_progress_update_moves_bar_and_announces_points() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        page.progress_bars.push(ProgressBar::new("Course", Some(40), 40));
        page.course_progress = Some(0);

        let result = ProgressUpdateResult {
            success: true,
            completed: true,
            progress_percentage: 60.0,
            points_earned: 10,
            new_achievements: vec![],
        };
        page.apply_progress_result(&result, clock.now());

        assert_eq!(page.progress_bars[0].aria_valuenow, 60);
        assert_eq!(page.points_badge.label().as_deref(), Some("110 pts"));
        let alert = page.alerts.iter().next().unwrap();
        assert_eq!(alert.kind, AlertKind::Success);
        assert_eq!(alert.message, "Lesson completed! You earned 10 points.");
    }

    #[test]
    fn test_progress_update_without_points_stays_quiet() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        page.progress_bars.push(ProgressBar::new("Course", Some(40), 40));
        page.course_progress = Some(0);

        let result = ProgressUpdateResult {
            success: true,
            completed: true,
            progress_percentage: 40.0,
            points_earned: 0,
            new_achievements: vec![],
        };
        page.apply_progress_result(&result, clock.now());

        assert!(page.alerts.is_empty());
        assert_eq!(page.points_badge.label().as_deref(), Some("100 pts"));
    }

    #[test]
    fn test_progress_update_opens_achievement_modal() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        let result = ProgressUpdateResult {
            success: true,
            completed: true,
            progress_percentage: 100.0,
            points_earned: 10,
            new_achievements: vec![Achievement {
                id: Some(1),
                icon: "fa-star".to_string(),
                name: "First Steps".to_string(),
                description: "Completed first lesson".to_string(),
            }],
        };

        page.apply_progress_result(&result, clock.now());

        let modal = page.modal.as_ref().unwrap();
        assert_eq!(modal.title(), "New Achievement!");

        page.close_modal();
        assert!(page.modal.is_none());
    }

    #[test]
    fn test_mount_marks_entrance_and_restarts_bars() {
        let clock = ManualClock::new();
        let mut page = page_with_quiz();
        page.progress_bars.push(ProgressBar::new("Course", Some(80), 80));
        page.stat_counters.push(StatCounter::from_text("120"));

        page.mount(clock.now());

        assert!(page.faded_in);
        assert!(page.tooltips_enabled);
        // Bars snap to zero and stat counters restart from zero
        assert_eq!(page.progress_bars[0].percent_at(clock.now()), 0.0);
        assert_eq!(page.stat_counters[0].display(clock.now()), "0");
    }

    #[test]
    fn test_badge_hover_transform_resets() {
        let mut badge = AchievementBadge::new("First Steps", "fa-star");
        badge.hover_enter();
        assert_eq!(badge.transform, Transform::hover());
        badge.hover_leave();
        assert_eq!(badge.transform, Transform::IDENTITY);
    }

    #[test]
    fn test_empty_search_results_show_placeholder() {
        let mut page = Page::new();
        page.apply_search_results(vec![]);
        assert_eq!(page.search.placeholder.as_deref(), Some("No results found."));

        page.apply_search_results(vec![SearchResult {
            url: "/courses/1".to_string(),
            title: "Climate".to_string(),
            description: "Basics".to_string(),
            kind: Some("course".to_string()),
        }]);
        assert_eq!(page.search.placeholder, None);
        assert_eq!(page.search.results.len(), 1);
    }
}
