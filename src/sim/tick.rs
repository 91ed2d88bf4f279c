//! Per-frame simulation step and input commands
//!
//! Order within `update`: prune popups, advance the round clock, ramp
//! difficulty, spawn, expire, then check the round timer.

use glam::Vec2;

use super::feedback::{ColorTag, FeedbackEvent};
use super::hit::{Resolution, Ring, resolve};
use super::state::{Phase, RoundSummary, Session};
use super::target::Target;

/// Input commands, produced by the presentation layer each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Primary click at `point` (screen pixels) at wall time `now`
    Click { point: Vec2, now: f64 },
    TogglePause,
    ResetBest,
    Quit,
}

/// What a click did
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Click started a new round (from `Idle` or `RoundOver`); no score change
    RoundStarted,
    Hit { target: Target, ring: Ring, points: i64 },
    Miss { points: i64 },
}

impl Session {
    /// Advance the simulation by one frame.
    ///
    /// `now` is wall time from a monotonic source. A `now` earlier than the
    /// previous frame's is treated as a glitch and the frame is skipped.
    /// Returns the round summary on the frame the round ends.
    pub fn update(&mut self, dt: f32, now: f64) -> Option<RoundSummary> {
        if now.is_nan() || self.last_now.is_some_and(|last| now < last) {
            log::warn!(
                "Skipping frame: clock went backwards ({:?} -> {})",
                self.last_now,
                now
            );
            return None;
        }
        let step = self.last_now.map_or(0.0, |last| now - last);
        self.last_now = Some(now);
        self.frame_dt = if dt.is_nan() { 0.0 } else { dt.max(0.0) };

        self.feedback.prune(now);

        match self.phase {
            Phase::Playing => {}
            Phase::Paused => {
                // Slide the origin so the round clock resumes where it stopped
                self.round_origin += step;
                return None;
            }
            Phase::Idle | Phase::RoundOver => return None,
        }

        self.elapsed = (now - self.round_origin).max(self.elapsed);
        let t = self.elapsed;

        self.scheduler.ramp(t, &self.tuning);
        if self.scheduler.try_fire(t, self.registry.is_full()) {
            self.registry.spawn(t, &self.tuning);
        }

        let penalty = self.tuning.timeout_score;
        for target in self.registry.expire_aged(t) {
            self.stats.score += penalty;
            self.stats.timeouts += 1;
            self.feedback.push(FeedbackEvent::score_delta(
                penalty,
                ColorTag::Penalty,
                target.pos,
                now,
            ));
            log::debug!("Target {} timed out ({})", target.id, penalty);
        }

        match self.tuning.round_time {
            Some(round_time) if t >= round_time => Some(self.finish_round()),
            _ => None,
        }
    }

    /// Primary click. Starts a round from `Idle`/`RoundOver`, shoots otherwise.
    ///
    /// While paused the click still scores against the frozen targets; only
    /// the simulation (aging, spawning, round clock) is suspended.
    pub fn handle_click(&mut self, point: Vec2, now: f64) -> ClickOutcome {
        let now = self.stamp(now);
        match self.phase {
            Phase::Idle | Phase::RoundOver => {
                self.last_now = Some(now);
                self.start_round(now);
                ClickOutcome::RoundStarted
            }
            Phase::Playing | Phase::Paused => self.shoot(point, now),
        }
    }

    fn shoot(&mut self, point: Vec2, now: f64) -> ClickOutcome {
        let hit = match resolve(point, self.registry.targets(), &self.tuning.ring_fracs) {
            Resolution::Hit { index, ring } => {
                self.registry.remove_by_index(index).map(|target| (target, ring))
            }
            Resolution::Miss => None,
        };

        match hit {
            Some((target, ring)) => {
                let points = self.tuning.ring_scores[ring.index()];
                self.stats.score += points;
                self.stats.hits += 1;
                self.feedback.push(FeedbackEvent::score_delta(
                    points,
                    ColorTag::from(ring),
                    target.pos,
                    now,
                ));
                log::debug!("Hit target {} ({:?}, {:+})", target.id, ring, points);
                ClickOutcome::Hit {
                    target,
                    ring,
                    points,
                }
            }
            None => {
                let points = self.tuning.miss_score;
                self.stats.score += points;
                self.stats.misses += 1;
                self.feedback.push(FeedbackEvent::score_delta(
                    points,
                    ColorTag::Penalty,
                    point,
                    now,
                ));
                log::debug!("Miss at ({:.0}, {:.0}) ({:+})", point.x, point.y, points);
                ClickOutcome::Miss { points }
            }
        }
    }

    /// Clamp an input timestamp so it never predates the last frame.
    /// Leaves `last_now` alone: only `update` measures frame steps from it.
    fn stamp(&self, now: f64) -> f64 {
        match self.last_now {
            Some(last) if now.is_nan() || now < last => last,
            None if now.is_nan() => 0.0,
            _ => now,
        }
    }

    /// Playing <-> Paused; ignored in other phases
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Playing => {
                log::info!("Paused at {:.2}s", self.elapsed);
                Phase::Paused
            }
            Phase::Paused => {
                log::info!("Resumed at {:.2}s", self.elapsed);
                Phase::Playing
            }
            other => other,
        };
    }

    /// Zero the best score; valid in any phase
    pub fn reset_best(&mut self) {
        self.best_score = 0;
        log::info!("Best score reset");
    }

    /// Raise the halt flag; the driver stops at the next frame boundary
    pub fn request_quit(&mut self) {
        self.halted = true;
        log::info!("Quit requested");
    }

    /// Apply one command. Returns the click outcome for `Click`.
    pub fn apply(&mut self, command: Command) -> Option<ClickOutcome> {
        match command {
            Command::Click { point, now } => return Some(self.handle_click(point, now)),
            Command::TogglePause => self.toggle_pause(),
            Command::ResetBest => self.reset_best(),
            Command::Quit => self.request_quit(),
        }
        None
    }
}
