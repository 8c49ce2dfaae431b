//! Clock collaborators that decide when the engine should be called.
//!
//! Neither type reads the clock itself; callers pass `Instant`s in, which
//! keeps them deterministic under test.

use std::time::{Duration, Instant};

/// Fires once per elapsed fixed interval.
#[derive(Debug, Clone, Copy)]
pub struct FixedInterval {
    interval: Duration,
    last: Instant,
}

impl FixedInterval {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Returns true and re-arms when at least one interval has passed.
    ///
    /// Missed intervals are not replayed; a stalled frame yields one tick.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }

        self.last = now;
        true
    }

    /// Restarts the interval from `now`.
    pub fn restart(&mut self, now: Instant) {
        self.last = now;
    }
}

/// Counts down a fixed number of steps before play begins.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    steps: u32,
    step: Duration,
    started_at: Instant,
}

impl Countdown {
    #[must_use]
    pub fn new(steps: u32, step: Duration, now: Instant) -> Self {
        Self {
            steps,
            step,
            started_at: now,
        }
    }

    /// Remaining step number to display (`steps`, ..., 1), or `None` once
    /// the countdown has finished.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        let step_ms = self.step.as_millis().max(1);
        let passed = u32::try_from(elapsed.as_millis() / step_ms).unwrap_or(u32::MAX);

        if passed >= self.steps {
            None
        } else {
            Some(self.steps - passed)
        }
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.remaining(now).is_none()
    }
}
