//! Wall-clock source for cooldowns.
//!
//! Positions and animation advance per simulation step, but damage and regen
//! cooldowns are measured in real seconds. The simulation reads time through
//! this trait so tests can drive it by hand.

#[cfg(test)]
use std::cell::Cell;

/// Monotonic time in seconds.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Macroquad's monotonic clock (seconds since the window opened).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock;

impl Clock for FrameClock {
    fn now(&self) -> f64 {
        macroquad::time::get_time()
    }
}

/// Hand-driven clock, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}
