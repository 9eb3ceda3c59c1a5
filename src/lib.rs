// EcoLearn terminal client
//
// This crate is the interaction layer for the EcoLearn learning platform:
// it renders one course page (quiz, progress, points, search) in the
// terminal and mediates the three network operations the page can trigger.
//
// Architecture:
// - Page model (page/): explicit view state standing in for the rendered page
// - API client (api/): reqwest calls to the EcoLearn backend with CSRF header
// - Animations (anim/): clock-driven tweens for fills, counters, and pulses
// - Search (search): 300 ms debounce with stale-response invalidation
// - TUI (ratatui): draws the page and routes input
// - Event system: an mpsc channel connects network tasks to the UI task

pub mod anim;
pub mod api;
pub mod cli;
pub mod config;
pub mod demo;
pub mod events;
pub mod logging;
pub mod page;
pub mod search;
pub mod theme;
pub mod tui;
pub mod util;

// Published surface for other tooling built on this client: quiz
// submission and lesson progress via ApiClient, alerts via Page, and the
// two formatters.
pub use api::{AnswerMap, ApiClient};
pub use page::alerts::AlertKind;
pub use page::Page;
pub use util::{format_date, format_duration};
