//! Demo/attract-mode player
//!
//! Watches snapshots and emits the clicks a (fallible) human might: it waits
//! a reaction delay, goes for the target closest to timing out, and aims with
//! a time-based wobble so some shots land off-center or miss.

use glam::Vec2;

use super::snapshot::Snapshot;
use super::state::Phase;
use super::tick::Command;

#[derive(Debug, Clone)]
pub struct Autoplay {
    /// Seconds a target must be on screen before it gets shot at
    pub reaction: f64,
    /// Minimum seconds between shots
    pub cooldown: f64,
    /// Aim error as a fraction of target radius (above ~1.1 some shots miss)
    pub wobble: f32,
    /// Seconds to linger on the round-over screen before replaying
    pub restart_delay: f64,
    last_shot: f64,
    over_since: Option<f64>,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            reaction: 0.35,
            cooldown: 0.25,
            wobble: 0.9,
            restart_delay: 1.0,
            last_shot: f64::NEG_INFINITY,
            over_since: None,
        }
    }
}

impl Autoplay {
    /// Commands to issue this frame
    pub fn commands(&mut self, snapshot: &Snapshot, now: f64) -> Vec<Command> {
        match snapshot.phase {
            Phase::Idle => vec![Command::Click {
                point: Vec2::ZERO,
                now,
            }],
            Phase::RoundOver => {
                let since = *self.over_since.get_or_insert(now);
                if now - since >= self.restart_delay {
                    self.over_since = None;
                    vec![Command::Click {
                        point: Vec2::ZERO,
                        now,
                    }]
                } else {
                    Vec::new()
                }
            }
            Phase::Paused => Vec::new(),
            Phase::Playing => self.shoot(snapshot, now).into_iter().collect(),
        }
    }

    fn shoot(&mut self, snapshot: &Snapshot, now: f64) -> Option<Command> {
        if now - self.last_shot < self.cooldown {
            return None;
        }

        // Most urgent visible target
        let target = snapshot
            .targets
            .iter()
            .filter(|t| t.age(snapshot.elapsed) >= self.reaction)
            .max_by(|a, b| {
                a.progress(snapshot.elapsed)
                    .partial_cmp(&b.progress(snapshot.elapsed))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })?;

        // Oscillating aim error, two incommensurate frequencies for variety
        let t = now as f32;
        let magnitude = ((t * 7.3).sin() * 0.6 + (t * 3.1).sin() * 0.4).abs();
        let angle = t * 5.0;
        let offset = Vec2::new(angle.cos(), angle.sin()) * magnitude * self.wobble * target.radius;

        self.last_shot = now;
        Some(Command::Click {
            point: target.pos + offset,
            now,
        })
    }
}
