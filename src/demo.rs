// Demo mode: canned responses instead of a live backend
//
// With ECOLEARN_DEMO=1 the client answers page interactions locally -
// quiz grading, lesson progress, and search all resolve after a short
// simulated latency and flow back through the same AppEvent channel the
// real network tasks use, so every interaction path gets exercised.
//
// Run with: ECOLEARN_DEMO=1 cargo run --release

use crate::api::types::{Achievement, ProgressUpdateResult, QuizResult, SearchResult};
use crate::api::AnswerMap;
use crate::events::AppEvent;
use crate::page::points::{PointsBadge, StatCounter};
use crate::page::progress::ProgressBar;
use crate::page::quiz::{QuestionCard, Quiz, QuizOption};
use crate::page::{AchievementBadge, Page};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Simulated round-trip latency for canned responses
const LATENCY: Duration = Duration::from_millis(350);

/// Answer ids graded as correct by the canned quiz key
const CORRECT_ANSWERS: [i64; 3] = [5, 7, 12];
/// Points granted per correct answer, matching the platform's quiz award
const POINTS_PER_CORRECT: i64 = 10;
/// Points granted for completing a lesson
const POINTS_PER_LESSON: i64 = 10;

/// Build the demo course page: one quiz, course progress, stat counters,
/// and the learner's current badge collection.
pub fn sample_page() -> Page {
    let mut page = Page::new();

    page.quizzes.push(Quiz::new(
        1,
        "Climate Basics Quiz",
        vec![
            QuestionCard::new(
                "10",
                "Which gas is the primary driver of the greenhouse effect?",
                vec![
                    QuizOption::new("10", "5", "Carbon dioxide"),
                    QuizOption::new("10", "6", "Nitrogen"),
                    QuizOption::new("10", "4", "Argon"),
                ],
            ),
            QuestionCard::new(
                "11",
                "What share of Earth's surface is covered by ocean?",
                vec![
                    QuizOption::new("11", "8", "About half"),
                    QuizOption::new("11", "7", "About seventy percent"),
                    QuizOption::new("11", "9", "About ninety percent"),
                ],
            ),
            QuestionCard::new(
                "12",
                "Which of these is a renewable energy source?",
                vec![
                    QuizOption::new("12", "12", "Wind"),
                    QuizOption::new("12", "13", "Coal"),
                    QuizOption::new("12", "14", "Natural gas"),
                ],
            ),
        ],
    ));

    page.progress_bars
        .push(ProgressBar::new("Climate Fundamentals", Some(40), 40));
    page.course_progress = Some(0);

    page.stat_counters.push(StatCounter::from_text("120"));
    page.stat_counters.push(StatCounter::from_text("3"));

    page.points_badge = PointsBadge::from_text("120 pts");

    page.badges.push(AchievementBadge::new("First Steps", "fa-star"));
    page.badges
        .push(AchievementBadge::new("Knowledge Seeker", "fa-book"));

    page
}

/// Grade submitted answers against the canned key.
pub fn grade_quiz(answers: &AnswerMap) -> QuizResult {
    let correct: Vec<i64> = answers
        .values()
        .filter_map(|a| a.parse::<i64>().ok())
        .filter(|id| CORRECT_ANSWERS.contains(id))
        .collect();
    let score = correct.len() as u32;
    let total_questions = 3;
    let percentage = f64::from(score) / f64::from(total_questions) * 100.0;

    QuizResult {
        success: true,
        score,
        total_questions,
        percentage,
        points_earned: i64::from(score) * POINTS_PER_CORRECT,
        correct_answers: CORRECT_ANSWERS.to_vec(),
        new_achievements: vec![],
        message: None,
    }
}

/// Canned lesson completion: progress jumps to 60% and the first
/// achievement unlocks.
pub fn lesson_result() -> ProgressUpdateResult {
    ProgressUpdateResult {
        success: true,
        completed: true,
        progress_percentage: 60.0,
        points_earned: POINTS_PER_LESSON,
        new_achievements: vec![Achievement {
            id: Some(1),
            icon: "fa-star".to_string(),
            name: "First Steps".to_string(),
            description: "Earned your first 100 points".to_string(),
        }],
    }
}

/// Canned search corpus filtered by substring match.
pub fn search_results(query: &str) -> Vec<SearchResult> {
    let corpus = [
        (
            "/courses/1",
            "Climate Fundamentals",
            "How greenhouse gases trap heat and what that means for ecosystems.",
            "course",
        ),
        (
            "/courses/1/lessons/2",
            "Ocean Currents",
            "Why the ocean moves heat around the planet.",
            "lesson",
        ),
        (
            "/courses/2",
            "Recycling in Practice",
            "Sorting, composting, and what actually happens to your waste.",
            "course",
        ),
        (
            "/courses/2/lessons/5",
            "Ecosystem Services",
            "What forests, wetlands, and soil quietly do for us.",
            "lesson",
        ),
    ];

    let needle = query.to_lowercase();
    corpus
        .iter()
        .filter(|(_, title, description, _)| {
            title.to_lowercase().contains(&needle) || description.to_lowercase().contains(&needle)
        })
        .map(|(url, title, description, kind)| SearchResult {
            url: (*url).to_string(),
            title: (*title).to_string(),
            description: (*description).to_string(),
            kind: Some((*kind).to_string()),
        })
        .collect()
}

/// Resolve a quiz submission with a canned grading after simulated latency.
pub fn spawn_quiz_responder(tx: mpsc::Sender<AppEvent>, quiz_id: i64, answers: AnswerMap) {
    tokio::spawn(async move {
        sleep(LATENCY).await;
        let _ = tx
            .send(AppEvent::QuizSubmitted {
                quiz_id,
                outcome: Ok(grade_quiz(&answers)),
            })
            .await;
    });
}

/// Resolve a lesson completion with the canned progress update.
pub fn spawn_progress_responder(tx: mpsc::Sender<AppEvent>, lesson_id: i64) {
    tokio::spawn(async move {
        sleep(LATENCY).await;
        let _ = tx
            .send(AppEvent::ProgressUpdated {
                lesson_id,
                outcome: Ok(lesson_result()),
            })
            .await;
    });
}

/// Resolve a search against the canned corpus.
pub fn spawn_search_responder(tx: mpsc::Sender<AppEvent>, generation: u64, query: String) {
    tokio::spawn(async move {
        sleep(LATENCY).await;
        let results = search_results(&query);
        let _ = tx
            .send(AppEvent::SearchFinished {
                generation,
                query,
                outcome: Ok(results),
            })
            .await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_counts_only_correct_answers() {
        let mut answers = AnswerMap::new();
        answers.insert("10".to_string(), "5".to_string()); // correct
        answers.insert("11".to_string(), "9".to_string()); // wrong
        answers.insert("12".to_string(), "12".to_string()); // correct

        let result = grade_quiz(&answers);
        assert!(result.success);
        assert_eq!(result.score, 2);
        assert_eq!(result.points_earned, 20);
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let hits = search_results("ocean");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Ocean Currents");

        // "eco" hits an ecosystems description and a title
        assert_eq!(search_results("eco").len(), 2);
        assert!(search_results("zzz").is_empty());
    }
}
