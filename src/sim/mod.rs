//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in through `update(dt, now)`; nothing samples a clock
//! - Seeded RNG only
//! - Targets keep insertion order
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod difficulty;
pub mod feedback;
pub mod hit;
pub mod registry;
pub mod snapshot;
pub mod state;
pub mod target;
pub mod tick;

pub use autoplay::Autoplay;
pub use difficulty::{SpawnScheduler, spawn_interval};
pub use feedback::{ColorTag, FeedbackEvent, FeedbackQueue};
pub use hit::{Resolution, Ring, resolve};
pub use registry::TargetRegistry;
pub use snapshot::Snapshot;
pub use state::{Phase, RoundStats, RoundSummary, Session};
pub use target::Target;
pub use tick::{ClickOutcome, Command};
