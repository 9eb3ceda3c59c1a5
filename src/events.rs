// Events that flow from network tasks to the UI task
//
// Each network operation runs as a spawned tokio task and reports back
// over an mpsc channel. The UI task owns the page model, so page
// mutations only interleave at these event boundaries - the analogue of
// the browser's run-to-completion handlers. Transport errors are carried
// as strings: the page only ever shows a generic message, and `String`
// keeps the event `Clone`.

use crate::api::types::{ProgressUpdateResult, QuizResult, SearchResult};

/// Main event type delivered to the UI task.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A quiz submission resolved (in either direction)
    QuizSubmitted {
        quiz_id: i64,
        outcome: Result<QuizResult, String>,
    },

    /// A lesson progress update resolved
    ProgressUpdated {
        lesson_id: i64,
        outcome: Result<ProgressUpdateResult, String>,
    },

    /// A search request resolved. `generation` identifies which dispatched
    /// query this answers; stale generations are dropped by the receiver.
    SearchFinished {
        generation: u64,
        query: String,
        outcome: Result<Vec<SearchResult>, String>,
    },
}
