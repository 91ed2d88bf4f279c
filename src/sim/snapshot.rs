//! Read-only view of a session for rendering
//!
//! Owned copy taken after `update`; the renderer cannot reach back into the session.

use serde::{Deserialize, Serialize};

use super::feedback::FeedbackEvent;
use super::state::{Phase, RoundStats, Session};
use super::target::Target;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub targets: Vec<Target>,
    pub score: i64,
    pub hits: u32,
    pub misses: u32,
    pub timeouts: u32,
    /// Round clock (seconds of unpaused play)
    pub elapsed: f64,
    pub spawn_interval: f64,
    pub best_score: i64,
    pub feedback: Vec<FeedbackEvent>,
    /// Configured round length, `None` when endless
    pub round_time: Option<f64>,
    /// Last wall time the session saw (for popup animation)
    pub wall_time: f64,
    /// Last frame delta, clamped non-negative
    pub frame_dt: f32,
    pub halted: bool,
}

impl Snapshot {
    pub fn stats(&self) -> RoundStats {
        RoundStats {
            score: self.score,
            hits: self.hits,
            misses: self.misses,
            timeouts: self.timeouts,
        }
    }

    pub fn accuracy(&self) -> f32 {
        self.stats().accuracy()
    }

    /// Whole seconds left in the round; `None` when endless, 0 once over
    pub fn time_left(&self) -> Option<u32> {
        let round_time = self.round_time?;
        if self.phase == Phase::Playing || self.phase == Phase::Paused {
            Some((round_time - self.elapsed).max(0.0) as u32)
        } else {
            Some(0)
        }
    }
}

impl Session {
    /// Copy out everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            targets: self.registry.targets().to_vec(),
            score: self.stats.score,
            hits: self.stats.hits,
            misses: self.stats.misses,
            timeouts: self.stats.timeouts,
            elapsed: self.elapsed,
            spawn_interval: self.scheduler.interval,
            best_score: self.best_score,
            feedback: self.feedback.events().to_vec(),
            round_time: self.tuning.round_time,
            wall_time: self.last_now.unwrap_or(0.0),
            frame_dt: self.frame_dt,
            halted: self.halted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_snapshot_idempotent() {
        let mut session = Session::with_seed(4);
        session.handle_click(Vec2::ZERO, 0.0);
        let mut now = 0.0;
        for _ in 0..300 {
            now += 1.0 / 60.0;
            session.update(1.0 / 60.0, now);
        }
        session.handle_click(Vec2::new(10.0, 590.0), now);
        assert_eq!(session.snapshot(), session.snapshot());
    }

    #[test]
    fn test_time_left() {
        let mut session = Session::with_seed(4);
        assert_eq!(session.snapshot().time_left(), Some(0));
        session.handle_click(Vec2::ZERO, 0.0);
        session.update(0.0, 2.5);
        assert_eq!(session.snapshot().time_left(), Some(12));

        let endless = Session::new(crate::tuning::Tuning::endless(), 4).unwrap();
        assert_eq!(endless.snapshot().time_left(), None);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut session = Session::with_seed(4);
        session.handle_click(Vec2::ZERO, 0.0);
        session.update(0.0, 1.0);
        let json = serde_json::to_string(&session.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, Phase::Playing);
    }
}
