// Repeating interval timer driven by the caller's event loop

use std::time::{Duration, Instant};

/// A single repeating deadline.
///
/// The timer never fires by itself: the owner's event loop asks
/// [`IntervalTimer::fire_due`] whether the deadline has passed. At most one
/// deadline exists at a time, so arming always replaces the previous one.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    deadline: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        IntervalTimer {
            period,
            deadline: None,
        }
    }

    /// Arm the timer so its first firing is one period after `now`
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the period used by future scheduling. An armed deadline keeps
    /// its instant.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    /// If the armed deadline is at or before `now`, consume it, schedule the
    /// next one a period later and return true.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = Some(deadline + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next firing, if armed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
