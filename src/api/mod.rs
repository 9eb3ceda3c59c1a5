// EcoLearn API client
//
// Thin reqwest wrapper for the three endpoints the page can hit. Every
// call is a single request/response exchange: build the payload, send it
// with the CSRF header, parse the JSON body. There are no retries and no
// timeouts; the caller decides what a failure means for the page.

pub mod types;

use anyhow::{Context, Result};
use std::collections::HashMap;

pub use types::{Achievement, ProgressUpdateResult, QuizResult, SearchResponse, SearchResult};

/// Header carrying the session's CSRF token on state-changing requests
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Question id -> selected answer id, built fresh per submission and
/// discarded once the request resolves.
pub type AnswerMap = HashMap<String, String>;

/// Client for the EcoLearn backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    csrf_token: String,
}

impl ApiClient {
    /// Build a client for `base_url`. A missing CSRF token is an error at
    /// construction: state-changing requests cannot be made without it.
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Result<Self> {
        let csrf_token = csrf_token.context(
            "CSRF token not configured; set csrf_token in the config file or ECOLEARN_CSRF_TOKEN",
        )?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            csrf_token,
        })
    }

    /// Submit collected quiz answers: `POST /api/quiz/{quiz_id}/submit`.
    ///
    /// A `success: false` body parses as `Ok`; the caller branches on the
    /// flag. `Err` means transport or JSON failure.
    pub async fn submit_quiz(&self, quiz_id: i64, answers: &AnswerMap) -> Result<QuizResult> {
        let url = format!("{}/api/quiz/{}/submit", self.base_url, quiz_id);
        tracing::debug!(quiz_id, answers = answers.len(), "submitting quiz");

        let response = self
            .http
            .post(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&serde_json::json!({ "answers": answers }))
            .send()
            .await
            .context("quiz submission request failed")?;

        response
            .json::<QuizResult>()
            .await
            .context("quiz submission response was not valid JSON")
    }

    /// Record lesson completion: `POST /api/lesson/{lesson_id}/progress`.
    pub async fn update_lesson_progress(
        &self,
        lesson_id: i64,
        completed: bool,
    ) -> Result<ProgressUpdateResult> {
        let url = format!("{}/api/lesson/{}/progress", self.base_url, lesson_id);
        tracing::debug!(lesson_id, completed, "updating lesson progress");

        let response = self
            .http
            .post(&url)
            .header(CSRF_HEADER, &self.csrf_token)
            .json(&serde_json::json!({ "completed": completed }))
            .send()
            .await
            .context("progress update request failed")?;

        response
            .json::<ProgressUpdateResult>()
            .await
            .context("progress update response was not valid JSON")
    }

    /// Search courses and lessons: `GET /api/search?q={query}`.
    /// The query is URL-encoded by the query-string builder.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/api/search", self.base_url);
        tracing::debug!(query, "searching");

        let response = self
            .http
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .context("search request failed")?;

        let body: SearchResponse = response
            .json()
            .await
            .context("search response was not valid JSON")?;
        Ok(body.results)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_requires_csrf_token() {
        let err = ApiClient::new("http://localhost:5000", None).unwrap_err();
        assert!(err.to_string().contains("CSRF token"));
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:5000/", Some("tok".into())).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
