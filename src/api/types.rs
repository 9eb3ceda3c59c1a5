// Response shapes returned by the EcoLearn API
//
// The backend is an opaque collaborator; these structs capture only the
// fields the interaction layer consumes. Logical failures come back as
// `success: false` with an optional message, so everything else defaults.

use serde::{Deserialize, Serialize};

/// Result of `POST /api/quiz/{quiz_id}/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    pub success: bool,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub total_questions: u32,
    /// Score as a percentage, 0.0 when the quiz had no questions
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub points_earned: i64,
    /// Answer ids the server graded as correct
    #[serde(default)]
    pub correct_answers: Vec<i64>,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
    /// Populated on logical failures, e.g. "Quiz already completed"
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /api/lesson/{lesson_id}/progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdateResult {
    pub success: bool,
    #[serde(default)]
    pub completed: bool,
    /// Course completion, 0-100
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub points_earned: i64,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
}

/// A server-awarded badge unlocked by a qualifying learner action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default)]
    pub id: Option<i64>,
    /// Icon identifier, e.g. "fa-star"
    pub icon: String,
    pub name: String,
    pub description: String,
}

/// One entry from `GET /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub description: String,
    /// "course" or "lesson" when the server tags the match
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Envelope for search responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_result_parses_full_response() {
        let body = serde_json::json!({
            "success": true,
            "score": 2,
            "total_questions": 3,
            "percentage": 66.6,
            "points_earned": 33,
            "correct_answers": [5, 7],
            "new_achievements": []
        });
        let result: QuizResult = serde_json::from_value(body).unwrap();
        assert!(result.success);
        assert_eq!(result.score, 2);
        assert_eq!(result.correct_answers, vec![5, 7]);
    }

    #[test]
    fn test_quiz_result_parses_logical_failure() {
        // Failure responses carry only the flag and a message
        let body = serde_json::json!({
            "success": false,
            "message": "Quiz already completed"
        });
        let result: QuizResult = serde_json::from_value(body).unwrap();
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("Quiz already completed"));
        assert!(result.correct_answers.is_empty());
    }

    #[test]
    fn test_search_result_kind_is_optional() {
        let body = serde_json::json!({
            "results": [
                {"url": "/courses/1", "title": "Climate", "description": "Basics", "type": "course"},
                {"url": "/courses/1/lessons/2", "title": "Oceans", "description": "Currents"}
            ]
        });
        let resp: SearchResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.results[0].kind.as_deref(), Some("course"));
        assert_eq!(resp.results[1].kind, None);
    }
}
