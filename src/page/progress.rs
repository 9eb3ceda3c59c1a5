// Progress bars
//
// On mount every bar snaps to zero and fills toward its captured target
// after a half-second beat. A server-driven update (lesson completion)
// sets the width directly; only the mount animation tweens.

use crate::anim::Tween;
use std::time::{Duration, Instant};

/// Delay before the mount fill animation starts
const FILL_DELAY: Duration = Duration::from_millis(500);
/// Fill transition length, matching the stylesheet's bar transition
const FILL_DURATION: Duration = Duration::from_millis(600);

/// One progress bar on the page.
#[derive(Debug)]
pub struct ProgressBar {
    pub label: String,
    /// Accessible value, kept in step with the rendered width
    pub aria_valuenow: u8,
    /// Rendered width when no fill animation is running
    percent: f64,
    fill: Option<Tween>,
}

impl ProgressBar {
    /// Build a bar whose target width comes from the inline style when
    /// present, otherwise from `aria-valuenow`.
    pub fn new(label: impl Into<String>, style_width: Option<u8>, aria_valuenow: u8) -> Self {
        let target = style_width.unwrap_or(aria_valuenow).min(100);
        Self {
            label: label.into(),
            aria_valuenow: target,
            percent: f64::from(target),
            fill: None,
        }
    }

    /// Capture the target width, snap to 0%, and animate back to the
    /// target after the fill delay.
    pub fn mount(&mut self, now: Instant) {
        let target = self.percent;
        self.percent = 0.0;
        self.fill = Some(Tween::new(0.0, target, FILL_DELAY, FILL_DURATION, now));
    }

    /// Server-driven update: set width and `aria-valuenow` directly. Any
    /// running fill animation is abandoned.
    pub fn set_percent(&mut self, percent: f64) {
        let clamped = percent.clamp(0.0, 100.0);
        self.percent = clamped;
        self.aria_valuenow = clamped.round() as u8;
        self.fill = None;
    }

    /// Width to render at `now`, 0-100.
    pub fn percent_at(&self, now: Instant) -> f64 {
        match &self.fill {
            Some(tween) => tween.value_at(now),
            None => self.percent,
        }
    }

    /// Retire a finished fill animation so the bar renders its plain value.
    pub fn settle(&mut self, now: Instant) {
        if let Some(tween) = &self.fill {
            if tween.is_done(now) {
                self.percent = tween.value_at(now);
                self.fill = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{Clock, ManualClock};

    #[test]
    fn test_mount_snaps_to_zero_then_fills() {
        let clock = ManualClock::new();
        let mut bar = ProgressBar::new("Course", Some(80), 80);
        bar.mount(clock.now());

        assert_eq!(bar.percent_at(clock.now()), 0.0);

        // Still zero through the delay window
        clock.advance(Duration::from_millis(400));
        assert_eq!(bar.percent_at(clock.now()), 0.0);

        // Past delay + duration the bar is back at its target
        clock.advance(Duration::from_millis(800));
        assert_eq!(bar.percent_at(clock.now()), 80.0);
    }

    #[test]
    fn test_aria_fallback_when_no_style_width() {
        let bar = ProgressBar::new("Course", None, 45);
        assert_eq!(bar.aria_valuenow, 45);
    }

    #[test]
    fn test_set_percent_overrides_animation() {
        let clock = ManualClock::new();
        let mut bar = ProgressBar::new("Course", Some(30), 30);
        bar.mount(clock.now());

        bar.set_percent(62.0);

        assert_eq!(bar.percent_at(clock.now()), 62.0);
        assert_eq!(bar.aria_valuenow, 62);
    }

    #[test]
    fn test_set_percent_clamps() {
        let mut bar = ProgressBar::new("Course", Some(10), 10);
        bar.set_percent(250.0);
        assert_eq!(bar.aria_valuenow, 100);
    }
}
