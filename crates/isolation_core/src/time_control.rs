//! Per-turn time budgets for agents.
//!
//! The game loop hands each agent a remaining-time probe for the current
//! turn. `TimeBudget` pairs that probe with an abort threshold: once the
//! probe reports less than the threshold, the search must unwind and return
//! whatever it already has. The probe is read-only from the agent's side.

use std::time::{Duration, Instant};

/// Remaining-time probe plus abort threshold for one move request.
///
/// `expired()` is checked at the top of every recursive search call, so it
/// stays a single probe call and one comparison.
pub struct TimeBudget<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold_ms: f64,
}

impl<'a> TimeBudget<'a> {
    /// Wraps a probe returning remaining milliseconds for this turn.
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold_ms: f64) -> Self {
        Self {
            time_left,
            threshold_ms,
        }
    }

    /// Remaining milliseconds as last reported by the probe.
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }

    /// True once remaining time drops below the abort threshold.
    #[inline]
    pub fn expired(&self) -> bool {
        (self.time_left)() < self.threshold_ms
    }
}

/// Caller-side countdown clock for a single turn.
///
/// Owns the deadline and supplies the monotonically decreasing probe that a
/// `TimeBudget` borrows:
///
/// ```
/// use isolation_core::{MoveClock, TimeBudget};
/// use std::time::Duration;
///
/// let clock = MoveClock::start(Duration::from_millis(150));
/// let probe = || clock.time_left_ms();
/// let budget = TimeBudget::new(&probe, 10.0);
/// assert!(!budget.expired());
/// ```
#[derive(Debug, Clone)]
pub struct MoveClock {
    deadline: Instant,
}

impl MoveClock {
    /// Starts a countdown of `total` from now.
    pub fn start(total: Duration) -> Self {
        Self {
            deadline: Instant::now() + total,
        }
    }

    /// Milliseconds until the deadline; negative once it has passed.
    pub fn time_left_ms(&self) -> f64 {
        let now = Instant::now();
        if now >= self.deadline {
            -((now - self.deadline).as_secs_f64() * 1000.0)
        } else {
            (self.deadline - now).as_secs_f64() * 1000.0
        }
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
