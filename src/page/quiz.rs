// Quiz cards: questions, selectable options, submit control
//
// Selection is exclusive within a question card. Answer collection and
// result marking deliberately live on the page (not here) because the
// original surface gathered selected options across the whole document,
// and that looseness is part of the observable behavior.

/// One selectable answer.
#[derive(Debug, Clone)]
pub struct QuizOption {
    pub question_id: String,
    pub answer_id: String,
    pub text: String,
    pub selected: bool,
    /// Set after grading when the server lists this answer as correct
    pub marked_correct: bool,
    /// Set after grading when this option was selected but not correct
    pub marked_incorrect: bool,
}

impl QuizOption {
    pub fn new(
        question_id: impl Into<String>,
        answer_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            answer_id: answer_id.into(),
            text: text.into(),
            selected: false,
            marked_correct: false,
            marked_incorrect: false,
        }
    }
}

/// A question and its options.
#[derive(Debug, Clone)]
pub struct QuestionCard {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizOption>,
}

impl QuestionCard {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    pub fn selected_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.selected)
    }
}

/// The quiz's submit button. Disabled until a selection exists; once a
/// submission starts it shows a loading label and is never automatically
/// re-enabled (only rendered results change the page state).
#[derive(Debug, Clone)]
pub struct SubmitControl {
    pub label: String,
    pub enabled: bool,
    pub submitting: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: "Submit Quiz".to_string(),
            enabled: false,
            submitting: false,
        }
    }
}

/// A quiz rendered on the page.
#[derive(Debug)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub questions: Vec<QuestionCard>,
    pub submit: SubmitControl,
}

impl Quiz {
    pub fn new(id: i64, title: impl Into<String>, questions: Vec<QuestionCard>) -> Self {
        Self {
            id,
            title: title.into(),
            questions,
            submit: SubmitControl::default(),
        }
    }

    /// Select an option: deselect its siblings within the same question
    /// and enable the submit control. Out-of-range indices are ignored.
    pub fn select_option(&mut self, question_idx: usize, option_idx: usize) {
        let Some(card) = self.questions.get_mut(question_idx) else {
            return;
        };
        if option_idx >= card.options.len() {
            return;
        }
        for (i, option) in card.options.iter_mut().enumerate() {
            option.selected = i == option_idx;
        }
        self.submit.enabled = true;
    }

    /// Swap the submit control into its loading state.
    pub fn begin_submit(&mut self) {
        self.submit.label = "Submitting…".to_string();
        self.submit.enabled = false;
        self.submit.submitting = true;
    }
}

/// The rendered summary card after a graded submission.
#[derive(Debug, Clone)]
pub struct ResultsCard {
    pub score: u32,
    pub total_questions: u32,
    pub points_earned: i64,
}

impl ResultsCard {
    pub fn headline(&self) -> String {
        "Quiz Complete!".to_string()
    }

    pub fn score_line(&self) -> String {
        format!("Score: {}/{}", self.score, self.total_questions)
    }

    pub fn points_line(&self) -> String {
        format!("Points Earned: {}", self.points_earned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> QuestionCard {
        QuestionCard::new(
            "10",
            "Which gas drives the greenhouse effect?",
            vec![
                QuizOption::new("10", "5", "Carbon dioxide"),
                QuizOption::new("10", "6", "Nitrogen"),
                QuizOption::new("10", "7", "Argon"),
            ],
        )
    }

    #[test]
    fn test_selection_is_exclusive_within_question() {
        let mut quiz = Quiz::new(1, "Climate Basics", vec![card()]);

        quiz.select_option(0, 0);
        quiz.select_option(0, 2);

        let selected: Vec<_> = quiz.questions[0]
            .options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.answer_id.as_str())
            .collect();
        assert_eq!(selected, vec!["7"]);
    }

    #[test]
    fn test_selection_enables_submit() {
        let mut quiz = Quiz::new(1, "Climate Basics", vec![card()]);
        assert!(!quiz.submit.enabled);

        quiz.select_option(0, 1);
        assert!(quiz.submit.enabled);
    }

    #[test]
    fn test_out_of_range_selection_ignored() {
        let mut quiz = Quiz::new(1, "Climate Basics", vec![card()]);
        quiz.select_option(4, 0);
        quiz.select_option(0, 9);
        assert!(!quiz.submit.enabled);
    }

    #[test]
    fn test_begin_submit_disables_control() {
        let mut quiz = Quiz::new(1, "Climate Basics", vec![card()]);
        quiz.select_option(0, 0);
        quiz.begin_submit();

        assert!(!quiz.submit.enabled);
        assert!(quiz.submit.submitting);
        assert_eq!(quiz.submit.label, "Submitting…");
    }
}
