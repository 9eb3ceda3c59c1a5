// Animation primitives driven by an injectable clock
//
// Every cosmetic animation on the page (progress-bar fill, points counter,
// badge pulse) is a value-over-time computed from a `Clock`, not a spawned
// timer. The render loop samples the current value each frame; tests drive
// a `ManualClock` and never sleep.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Source of the current instant. The TUI uses [`SystemClock`]; tests use
/// [`ManualClock`].
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock advanced by hand, for deterministic animation and debounce tests.
pub struct ManualClock {
    current: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(Instant::now()),
        }
    }

    /// Move time forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap();
        *current += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap()
    }
}

/// Linear interpolation between two values after an optional delay.
///
/// Mirrors the page's progress-bar fill: snap to the start value, wait,
/// then let the transition carry the value to the target.
#[derive(Debug, Clone)]
pub struct Tween {
    start: f64,
    end: f64,
    /// When interpolation begins (creation instant plus delay)
    begins_at: Instant,
    duration: Duration,
}

impl Tween {
    pub fn new(start: f64, end: f64, delay: Duration, duration: Duration, now: Instant) -> Self {
        Self {
            start,
            end,
            begins_at: now + delay,
            duration,
        }
    }

    /// Sample the tween at `now`. Holds the start value through the delay
    /// and clamps at the end value once the duration has elapsed.
    pub fn value_at(&self, now: Instant) -> f64 {
        if now < self.begins_at {
            return self.start;
        }
        let elapsed = now - self.begins_at;
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.end;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start + (self.end - self.start) * t
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now >= self.begins_at + self.duration
    }
}

/// Duration of the counter animation on mount
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);
/// Counter tick interval (~60 steps over the full duration)
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

/// Tick-quantized count-up from zero, flooring the displayed value each
/// tick, exactly like the page's points counter.
#[derive(Debug, Clone)]
pub struct Counter {
    target: i64,
    started_at: Instant,
}

impl Counter {
    pub fn new(target: i64, now: Instant) -> Self {
        Self {
            target,
            started_at: now,
        }
    }

    /// Value shown at `now`: floor(target * ticks_elapsed / total_ticks),
    /// clamped at the target once the duration has elapsed.
    pub fn display_at(&self, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= COUNTER_DURATION {
            return self.target;
        }
        let ticks = elapsed.as_millis() / COUNTER_TICK.as_millis();
        let progressed = (ticks * COUNTER_TICK.as_millis()) as f64 / COUNTER_DURATION.as_millis() as f64;
        let value = (self.target as f64 * progressed).floor() as i64;
        value.min(self.target)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= COUNTER_DURATION
    }
}

/// How long the points badge stays scaled up after an update
pub const PULSE_DURATION: Duration = Duration::from_millis(300);
/// Scale factor while the pulse is active
pub const PULSE_SCALE: f64 = 1.2;

/// Brief scale-up applied to the points badge when its value changes.
#[derive(Debug, Clone)]
pub struct Pulse {
    started_at: Instant,
}

impl Pulse {
    pub fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// 1.2 while active, 1.0 once the pulse has ended.
    pub fn scale_at(&self, now: Instant) -> f64 {
        if self.is_done(now) {
            1.0
        } else {
            PULSE_SCALE
        }
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= PULSE_DURATION
    }
}

/// Presentation transform for achievement badges (hover effect). No state
/// survives an enter/leave pair beyond the transform itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        rotate_deg: 0.0,
    };

    /// The hover transform: scale 1.1, rotate 10 degrees.
    pub fn hover() -> Self {
        Transform {
            scale: 1.1,
            rotate_deg: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_holds_start_through_delay() {
        let clock = ManualClock::new();
        let t = Tween::new(
            0.0,
            80.0,
            Duration::from_millis(500),
            Duration::from_millis(600),
            clock.now(),
        );

        assert_eq!(t.value_at(clock.now()), 0.0);
        clock.advance(Duration::from_millis(499));
        assert_eq!(t.value_at(clock.now()), 0.0);
    }

    #[test]
    fn test_tween_reaches_target() {
        let clock = ManualClock::new();
        let t = Tween::new(
            0.0,
            80.0,
            Duration::from_millis(500),
            Duration::from_millis(600),
            clock.now(),
        );

        clock.advance(Duration::from_millis(800));
        let mid = t.value_at(clock.now());
        assert!(mid > 0.0 && mid < 80.0, "mid-fill value was {}", mid);

        clock.advance(Duration::from_millis(400));
        assert_eq!(t.value_at(clock.now()), 80.0);
        assert!(t.is_done(clock.now()));
    }

    #[test]
    fn test_counter_floors_each_tick() {
        let clock = ManualClock::new();
        let c = Counter::new(100, clock.now());

        assert_eq!(c.display_at(clock.now()), 0);

        // 10ms is inside the first tick: still zero
        clock.advance(Duration::from_millis(10));
        assert_eq!(c.display_at(clock.now()), 0);

        // 500ms = 31 full ticks of 16ms = 496ms progressed -> floor(49.6)
        clock.advance(Duration::from_millis(490));
        assert_eq!(c.display_at(clock.now()), 49);
    }

    #[test]
    fn test_counter_clamps_at_target() {
        let clock = ManualClock::new();
        let c = Counter::new(37, clock.now());

        clock.advance(Duration::from_millis(1500));
        assert_eq!(c.display_at(clock.now()), 37);
        assert!(c.is_done(clock.now()));
    }

    #[test]
    fn test_pulse_expires() {
        let clock = ManualClock::new();
        let p = Pulse::new(clock.now());

        assert_eq!(p.scale_at(clock.now()), PULSE_SCALE);
        clock.advance(Duration::from_millis(299));
        assert_eq!(p.scale_at(clock.now()), PULSE_SCALE);
        clock.advance(Duration::from_millis(1));
        assert_eq!(p.scale_at(clock.now()), 1.0);
        assert!(p.is_done(clock.now()));
    }

    #[test]
    fn test_hover_transform_values() {
        let hover = Transform::hover();
        assert_eq!(hover.scale, 1.1);
        assert_eq!(hover.rotate_deg, 10.0);
        assert_eq!(Transform::IDENTITY.scale, 1.0);
        assert_eq!(Transform::IDENTITY.rotate_deg, 0.0);
    }
}
