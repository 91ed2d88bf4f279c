//! Time sources for the frame loop
//!
//! The simulation never reads a clock itself. The driver samples a
//! [`TimeSource`] once per frame and passes `(dt, now)` into `Session::update`,
//! so tests can drive the core with a synthetic clock.

use std::time::Instant;

/// Monotonic seconds since some fixed origin
pub trait TimeSource {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Fixed-step clock: every sample advances by `step` seconds
#[derive(Debug, Clone)]
pub struct SyntheticClock {
    time: f64,
    step: f64,
}

impl SyntheticClock {
    pub fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    /// Clock running at `hz` samples per simulated second
    pub fn at_hz(hz: f64) -> Self {
        Self::new(1.0 / hz)
    }

    /// Jump forward without producing a sample
    pub fn advance(&mut self, secs: f64) {
        self.time += secs;
    }

    pub fn peek(&self) -> f64 {
        self.time
    }
}

impl TimeSource for SyntheticClock {
    fn now(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }
}

/// Derives per-frame delta from successive samples
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Sample `source`, returning `(dt, now)`. The first sample has `dt == 0`.
    pub fn tick(&mut self, source: &mut impl TimeSource) -> (f32, f64) {
        let now = source.now();
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        (dt, now)
    }
}
