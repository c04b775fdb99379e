//! Playback control over a generated timeline
//!
//! [`PlaybackController`] owns the snapshot list produced by the generator, a
//! cursor into it, and the autoplay timer. It has two states:
//!
//! - **Idle**: `is_playing() == false`, timer disarmed
//! - **Playing**: timer armed; every firing advances the cursor by one and
//!   playback stops by itself on the last snapshot
//!
//! Everything runs on the caller's thread. The event loop calls
//! [`PlaybackController::poll`] with the current instant and the controller
//! fires whatever ticks are due. `load_timeline`, `pause` and `reset` always
//! disarm the timer, and `play` disarms before re-arming, so there is never
//! more than one pending deadline.
//!
//! Speed changes take effect at the next scheduling: a deadline that is
//! already armed keeps its instant, the one after it uses the new interval.

mod timer;

pub use timer::IntervalTimer;

use crate::snapshot::Snapshot;
use std::time::{Duration, Instant};

/// Default autoplay interval
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// [`PlaybackController::speed_up`] and [`PlaybackController::speed_down`]
/// scale the interval by this ratio (3/2)
const SPEED_STEP: (u32, u32) = (3, 2);

/// Bounds for the autoplay interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedLimits {
    pub min: Duration,
    pub max: Duration,
}

impl SpeedLimits {
    pub fn clamp(&self, interval: Duration) -> Duration {
        interval.max(self.min).min(self.max)
    }
}

impl Default for SpeedLimits {
    fn default() -> Self {
        SpeedLimits {
            min: Duration::from_millis(50),
            max: Duration::from_millis(10_000),
        }
    }
}

/// Cursor, timeline and autoplay timer for one visualizer instance
#[derive(Debug)]
pub struct PlaybackController {
    timeline: Vec<Snapshot>,
    cursor: usize,
    playing: bool,
    timer: IntervalTimer,
    limits: SpeedLimits,
}

impl PlaybackController {
    /// An idle controller with an empty timeline
    pub fn new(interval: Duration) -> Self {
        Self::with_limits(interval, SpeedLimits::default())
    }

    pub fn with_limits(interval: Duration, limits: SpeedLimits) -> Self {
        PlaybackController {
            timeline: Vec::new(),
            cursor: 0,
            playing: false,
            timer: IntervalTimer::new(limits.clamp(interval)),
            limits,
        }
    }

    /// Replace the timeline wholesale, rewind to the first snapshot and stop
    /// playback. An empty timeline is accepted; nothing is then active.
    pub fn load_timeline(&mut self, snapshots: Vec<Snapshot>) {
        self.stop();
        self.timeline = snapshots;
        self.cursor = 0;
        tracing::debug!(steps = self.timeline.len(), "timeline loaded");
    }

    /// Advance one snapshot. Returns whether the cursor moved; at the last
    /// snapshot this is a no-op.
    pub fn step_forward(&mut self) -> bool {
        if self.cursor + 1 < self.timeline.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Go back one snapshot. Returns whether the cursor moved; at index 0
    /// this is a no-op.
    pub fn step_backward(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Start autoplay, with the first tick one interval from now
    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    /// Start autoplay as if the call happened at `now`.
    ///
    /// Already on the last snapshot (or with an empty timeline) there is
    /// nothing to advance to, so the controller stays idle.
    pub fn play_at(&mut self, now: Instant) {
        self.timer.disarm();
        if self.is_at_end() {
            self.playing = false;
            return;
        }
        self.playing = true;
        self.timer.arm(now);
        tracing::debug!(
            cursor = self.cursor,
            interval_ms = self.interval().as_millis() as u64,
            "autoplay started"
        );
    }

    /// Stop autoplay, leaving the cursor where it is. Idempotent.
    pub fn pause(&mut self) {
        self.stop();
    }

    /// Toggle between playing and paused
    pub fn toggle_play(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Rewind to the first snapshot and stop. The timeline is kept.
    pub fn reset(&mut self) {
        self.stop();
        self.cursor = 0;
    }

    /// Stop and move to the last snapshot
    pub fn jump_to_end(&mut self) {
        self.stop();
        self.cursor = self.timeline.len().saturating_sub(1);
    }

    /// Set the autoplay interval, clamped to the configured limits.
    ///
    /// An armed deadline is not moved; the new interval applies from the
    /// next scheduled tick onward.
    pub fn set_speed(&mut self, interval: Duration) {
        let clamped = self.limits.clamp(interval);
        self.timer.set_period(clamped);
        tracing::debug!(interval_ms = clamped.as_millis() as u64, "speed changed");
    }

    /// Shorten the interval by a factor of 1.5
    pub fn speed_up(&mut self) {
        let (num, den) = SPEED_STEP;
        self.set_speed(self.interval() * den / num);
    }

    /// Lengthen the interval by a factor of 1.5
    pub fn speed_down(&mut self) {
        let (num, den) = SPEED_STEP;
        self.set_speed(self.interval() * num / den);
    }

    /// One timer firing: step forward, and stop once the last snapshot is
    /// reached. Does nothing while idle.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        self.step_forward();
        tracing::trace!(cursor = self.cursor, "autoplay tick");
        if self.is_at_end() {
            self.stop();
            tracing::debug!(cursor = self.cursor, "autoplay finished");
        }
    }

    /// Fire every tick that is due at `now`. Returns how many fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.playing && self.timer.fire_due(now) {
            self.tick();
            fired += 1;
        }
        fired
    }

    /// Time until the next tick, if playing
    pub fn time_to_next_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    fn stop(&mut self) {
        self.playing = false;
        self.timer.disarm();
    }

    /// The snapshot the renderer should draw, if any
    pub fn active_snapshot(&self) -> Option<&Snapshot> {
        self.timeline.get(self.cursor)
    }

    pub fn timeline(&self) -> &[Snapshot] {
        &self.timeline
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.timeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn interval(&self) -> Duration {
        self.timer.period()
    }

    pub fn limits(&self) -> SpeedLimits {
        self.limits
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    /// True on the last snapshot, and for an empty timeline
    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.timeline.len()
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}
