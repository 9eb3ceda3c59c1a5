// Points displays
//
// Two distinct widgets show points. The navbar badge ("120 pts") holds an
// explicit integer counter updated through an apply-delta reducer - the
// page never re-parses its own rendered text, so concurrent updates
// cannot lose an increment. Dashboard stat counters are plain numbers
// that count up from zero once on mount.

use crate::anim::{Counter, Pulse};
use std::time::Instant;

/// The navbar points badge.
#[derive(Debug, Default)]
pub struct PointsBadge {
    /// `None` when the badge was seeded from non-numeric text; every
    /// update is then a no-op and the badge renders nothing.
    total: Option<i64>,
    pulse: Option<Pulse>,
}

impl PointsBadge {
    pub fn new(total: i64) -> Self {
        Self {
            total: Some(total),
            pulse: None,
        }
    }

    /// Seed the counter from server-rendered text such as `"120 pts"`:
    /// split on whitespace and parse the leading token.
    pub fn from_text(text: &str) -> Self {
        let total = text
            .split_whitespace()
            .next()
            .and_then(|token| token.parse::<i64>().ok());
        Self { total, pulse: None }
    }

    /// Add earned points and start the scale pulse. Inert when the badge
    /// never held a number.
    pub fn apply_delta(&mut self, points_earned: i64, now: Instant) {
        if let Some(total) = self.total.as_mut() {
            *total += points_earned;
            self.pulse = Some(Pulse::new(now));
        }
    }

    /// Rendered text, `"<total> pts"`.
    pub fn label(&self) -> Option<String> {
        self.total.map(|t| format!("{} pts", t))
    }

    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Current scale factor (1.2 during the 300 ms pulse).
    pub fn scale(&self, now: Instant) -> f64 {
        self.pulse
            .as_ref()
            .map(|p| p.scale_at(now))
            .unwrap_or(1.0)
    }

    /// Drop a finished pulse. Called from the UI tick.
    pub fn settle(&mut self, now: Instant) {
        if self.pulse.as_ref().is_some_and(|p| p.is_done(now)) {
            self.pulse = None;
        }
    }
}

/// A dashboard stat that counts up from zero on mount.
#[derive(Debug)]
pub struct StatCounter {
    /// Original rendered text, shown verbatim when non-numeric
    raw: String,
    value: Option<i64>,
    anim: Option<Counter>,
}

impl StatCounter {
    pub fn from_text(text: impl Into<String>) -> Self {
        let raw = text.into();
        let value = raw.trim().parse::<i64>().ok();
        Self {
            raw,
            value,
            anim: None,
        }
    }

    /// Start the count-up animation. Non-numeric content is left untouched.
    pub fn mount(&mut self, now: Instant) {
        if let Some(value) = self.value {
            self.anim = Some(Counter::new(value, now));
        }
    }

    /// Text to render at `now`: the animated value while counting, the
    /// final value afterwards, or the raw text if it never parsed.
    pub fn display(&self, now: Instant) -> String {
        match (&self.anim, self.value) {
            (Some(anim), _) => anim.display_at(now).to_string(),
            (None, Some(value)) => value.to_string(),
            (None, None) => self.raw.clone(),
        }
    }
}
