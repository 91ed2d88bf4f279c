//! Sharpshot - arcade target-shooting game core
//!
//! Core modules:
//! - `sim`: Simulation (target lifecycle, difficulty ramp, hit scoring, round state)
//! - `clock`: Monotonic time sources feeding `update(dt, now)`
//! - `driver`: Per-frame loop and the presentation-layer seam
//! - `hud`: HUD and overlay text derived from a snapshot
//! - `renderer`: Triangle tessellation of a snapshot for GPU front ends
//! - `tuning`: Data-driven game balance

pub mod clock;
pub mod driver;
pub mod hud;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use clock::{FrameClock, SyntheticClock, SystemClock, TimeSource};
pub use driver::{FrameDriver, Presentation};
pub use tuning::{Tuning, TuningError};

/// Game configuration defaults
pub mod consts {
    /// Logical window size (pixels)
    pub const WINDOW_WIDTH: f32 = 900.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Height reserved at the top for the HUD bar; targets never spawn under it
    pub const HUD_BAND: f32 = 40.0;
    /// Minimum gap between a target's edge and the playable border
    pub const EDGE_MARGIN: f32 = 8.0;

    /// Target radius bounds
    pub const TARGET_MIN_RADIUS: f32 = 16.0;
    pub const TARGET_MAX_RADIUS: f32 = 36.0;
    /// Seconds a target stays alive (before jitter)
    pub const TARGET_LIFETIME: f64 = 1.5;
    /// Lifetime is scaled by uniform(1 - jitter, 1 + jitter)
    pub const TARGET_LIFETIME_JITTER: f64 = 0.15;
    pub const MAX_TARGETS_ON_SCREEN: usize = 7;

    /// Spawn cadence (seconds between spawn attempts)
    pub const SPAWN_INTERVAL_START: f64 = 0.85;
    pub const SPAWN_INTERVAL_MIN: f64 = 0.35;
    /// Every N seconds of play the interval shrinks by one step (0 = no ramp)
    pub const SPAWN_ACCEL_EVERY: f64 = 5.0;
    pub const SPAWN_ACCEL_STEP: f64 = 0.04;

    /// Ring radii as fractions of target radius: bullseye, middle, outer
    pub const RING_FRACS: [f32; 3] = [0.25, 0.55, 1.0];
    /// Points per ring: bullseye, middle, outer
    pub const RING_SCORES: [i64; 3] = [10, 5, 1];
    pub const MISS_SCORE: i64 = -5;
    pub const TIMEOUT_SCORE: i64 = -3;

    /// Round length in seconds (`None` in `Tuning` means endless)
    pub const ROUND_TIME: f64 = 15.0;

    /// How long a score popup stays on screen
    pub const FEEDBACK_WINDOW: f64 = 0.7;
    /// Popup rise speed (pixels/s, screen space so negative is up)
    pub const FEEDBACK_RISE_SPEED: f32 = 40.0;
}
