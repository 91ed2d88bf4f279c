//! Session state and round bookkeeping
//!
//! One `Session` is owned by the frame driver; all mutation happens through
//! the methods in `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::SpawnScheduler;
use super::feedback::FeedbackQueue;
use super::registry::TargetRegistry;
use super::target::Target;
use crate::tuning::{Tuning, TuningError};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title screen, no round played yet
    Idle,
    /// Active round
    Playing,
    /// Round frozen
    Paused,
    /// Round timer ran out; waiting for a click to replay
    RoundOver,
}

/// Per-round counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub score: i64,
    pub hits: u32,
    pub misses: u32,
    pub timeouts: u32,
}

impl RoundStats {
    /// Hit percentage over clicks (timeouts excluded); 0 before any click
    pub fn accuracy(&self) -> f32 {
        let shots = self.hits + self.misses;
        self.hits as f32 / shots.max(1) as f32 * 100.0
    }
}

/// Result of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub stats: RoundStats,
    pub accuracy: f32,
    pub best_score: i64,
    /// Whether this round raised the best score
    pub new_best: bool,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) tuning: Tuning,
    pub(super) phase: Phase,
    pub(super) stats: RoundStats,
    /// Max finished-round score this process; survives round resets
    pub(super) best_score: i64,
    pub(super) registry: TargetRegistry,
    pub(super) scheduler: SpawnScheduler,
    pub(super) feedback: FeedbackQueue,
    /// Wall time the current round started
    pub(super) start_time: f64,
    /// Wall time that maps to round-clock zero; shifted forward while paused
    pub(super) round_origin: f64,
    /// Round clock: seconds of unpaused play
    pub(super) elapsed: f64,
    /// Last accepted `now`, for rejecting clocks that run backwards
    pub(super) last_now: Option<f64>,
    pub(super) frame_dt: f32,
    pub(super) halted: bool,
    pub(super) last_summary: Option<RoundSummary>,
}

impl Session {
    /// Create a session; fails if `tuning` does not validate
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::build(tuning, seed))
    }

    /// Session with default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Tuning::default(), seed)
    }

    fn build(tuning: Tuning, seed: u64) -> Self {
        Self {
            phase: Phase::Idle,
            stats: RoundStats::default(),
            best_score: 0,
            registry: TargetRegistry::new(seed, tuning.max_targets),
            scheduler: SpawnScheduler::new(&tuning),
            feedback: FeedbackQueue::new(tuning.feedback_window),
            start_time: 0.0,
            round_origin: 0.0,
            elapsed: 0.0,
            last_now: None,
            frame_dt: 0.0,
            halted: false,
            last_summary: None,
            tuning,
        }
    }

    /// Reset everything round-scoped and start playing at wall time `now`
    pub(super) fn start_round(&mut self, now: f64) {
        self.phase = Phase::Playing;
        self.registry.clear();
        self.feedback.clear();
        self.stats = RoundStats::default();
        self.scheduler.reset(0.0, &self.tuning);
        self.start_time = now;
        self.round_origin = now;
        self.elapsed = 0.0;
        self.last_summary = None;
        log::info!("Round started (best so far: {})", self.best_score);
    }

    /// Enter `RoundOver` and fold the score into the best
    pub(super) fn finish_round(&mut self) -> RoundSummary {
        self.phase = Phase::RoundOver;
        let new_best = self.stats.score > self.best_score;
        self.best_score = self.best_score.max(self.stats.score);

        let summary = RoundSummary {
            stats: self.stats,
            accuracy: self.stats.accuracy(),
            best_score: self.best_score,
            new_best,
        };
        log::info!(
            "Round over: score {} (hits {}, misses {}, timeouts {}, acc {:.1}%), best {}",
            summary.stats.score,
            summary.stats.hits,
            summary.stats.misses,
            summary.stats.timeouts,
            summary.accuracy,
            summary.best_score
        );
        self.last_summary = Some(summary);
        summary
    }

    /// Place a target at an exact spot on the current round clock.
    /// Refused (returns `None`) at capacity.
    pub fn place_target(&mut self, pos: Vec2, radius: f32, lifetime: f64) -> Option<u32> {
        self.registry.insert(Target {
            id: 0,
            pos,
            radius,
            spawn_time: self.elapsed,
            lifetime,
        })
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> RoundStats {
        self.stats
    }

    pub fn best_score(&self) -> i64 {
        self.best_score
    }

    /// Round clock in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn spawn_interval(&self) -> f64 {
        self.scheduler.interval
    }

    pub fn last_spawn(&self) -> f64 {
        self.scheduler.last_spawn
    }

    pub fn targets(&self) -> &[Target] {
        self.registry.targets()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Summary of the most recently finished round, until the next one starts
    pub fn last_summary(&self) -> Option<&RoundSummary> {
        self.last_summary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::with_seed(1);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.stats(), RoundStats::default());
        assert_eq!(session.best_score(), 0);
        assert!(session.targets().is_empty());
        assert!(!session.is_halted());
    }

    #[test]
    fn test_new_rejects_bad_tuning() {
        let tuning = Tuning {
            max_targets: 0,
            ..Tuning::default()
        };
        assert!(Session::new(tuning, 1).is_err());
    }

    #[test]
    fn test_accuracy() {
        let stats = RoundStats {
            score: 3,
            hits: 2,
            misses: 1,
            timeouts: 5,
        };
        assert_eq!(format!("{:.1}", stats.accuracy()), "66.7");
        assert_eq!(RoundStats::default().accuracy(), 0.0);
    }

    #[test]
    fn test_place_target_capacity() {
        let tuning = Tuning {
            max_targets: 2,
            ..Tuning::default()
        };
        let mut session = Session::new(tuning, 1).unwrap();
        assert!(session.place_target(Vec2::new(100.0, 100.0), 20.0, 1.0).is_some());
        assert!(session.place_target(Vec2::new(200.0, 100.0), 20.0, 1.0).is_some());
        assert!(session.place_target(Vec2::new(300.0, 100.0), 20.0, 1.0).is_none());
    }
}
