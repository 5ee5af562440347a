//! Fixed-rate frame clock.
//!
//! The main loop asks how long it may wait for input before the next frame
//! is due, then takes a tick that reports the real time since the previous
//! one. Under load the delta simply grows; nothing is dropped.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    started: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        Self::starting_at(frame, Instant::now())
    }

    /// Clock whose first frame starts at `now`.
    pub fn starting_at(frame: Duration, now: Instant) -> Self {
        Self {
            frame,
            started: now,
            last_tick: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left before the next tick is due (zero when already late).
    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    /// True once a full frame has elapsed since the last tick.
    pub fn is_due_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    pub fn is_due(&self) -> bool {
        self.is_due_at(Instant::now())
    }

    /// Take a tick at `now`. Returns the delta time in seconds.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        dt.as_secs_f64()
    }

    pub fn tick(&mut self) -> f64 {
        self.tick_at(Instant::now())
    }

    /// Free-running time since the clock started (for cosmetic animation).
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }
}
