//! Difficulty ramp and spawn gating

use crate::tuning::Tuning;

/// Spawn interval after `elapsed` seconds of play.
///
/// Step function: shrinks by `spawn_accel_step` every `spawn_accel_every`
/// seconds, clamped to `[spawn_interval_min, spawn_interval_start]`.
pub fn spawn_interval(elapsed: f64, tuning: &Tuning) -> f64 {
    let start = tuning.spawn_interval_start;
    if tuning.spawn_accel_every <= 0.0 || elapsed <= 0.0 {
        return start;
    }
    let steps = (elapsed / tuning.spawn_accel_every).floor();
    (start - steps * tuning.spawn_accel_step).clamp(tuning.spawn_interval_min, start)
}

/// Tracks when the last spawn attempt went through
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnScheduler {
    pub interval: f64,
    pub last_spawn: f64,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            interval: tuning.spawn_interval_start,
            last_spawn: 0.0,
        }
    }

    /// Reset for a new round starting at round-clock `now`
    pub fn reset(&mut self, now: f64, tuning: &Tuning) {
        self.interval = tuning.spawn_interval_start;
        self.last_spawn = now;
    }

    /// Recompute the interval for the current elapsed time
    pub fn ramp(&mut self, elapsed: f64, tuning: &Tuning) {
        self.interval = spawn_interval(elapsed, tuning);
    }

    /// Whether a spawn should happen now.
    ///
    /// When the interval has passed but the screen is full, the timer is left
    /// alone so the spawn is retried every tick until a slot frees up.
    pub fn try_fire(&mut self, now: f64, at_capacity: bool) -> bool {
        if now - self.last_spawn >= self.interval && !at_capacity {
            self.last_spawn = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ramp_at_twelve_seconds() {
        let tuning = Tuning::default();
        assert!(approx(spawn_interval(12.0, &tuning), 0.77));
    }

    #[test]
    fn test_ramp_steps_and_floor() {
        let tuning = Tuning::default();
        assert!(approx(spawn_interval(0.0, &tuning), 0.85));
        assert!(approx(spawn_interval(4.99, &tuning), 0.85));
        assert!(approx(spawn_interval(5.0, &tuning), 0.81));
        // 13 steps would be 0.33, clamped to the floor
        assert!(approx(spawn_interval(65.0, &tuning), 0.35));
        assert!(approx(spawn_interval(1000.0, &tuning), 0.35));
    }

    #[test]
    fn test_ramp_is_non_increasing() {
        let tuning = Tuning::default();
        let mut prev = f64::INFINITY;
        for i in 0..2000 {
            let v = spawn_interval(i as f64 * 0.05, &tuning);
            assert!(v <= prev);
            prev = v;
        }
    }

    #[test]
    fn test_ramp_disabled() {
        let tuning = Tuning {
            spawn_accel_every: 0.0,
            ..Tuning::default()
        };
        assert!(approx(spawn_interval(100.0, &tuning), 0.85));
    }

    #[test]
    fn test_full_screen_retries_every_tick() {
        let tuning = Tuning::default();
        let mut sched = SpawnScheduler::new(&tuning);
        sched.reset(0.0, &tuning);

        assert!(!sched.try_fire(0.5, false));
        assert!(!sched.try_fire(1.0, true));
        assert_eq!(sched.last_spawn, 0.0);
        // Slot frees a tick later: spawn immediately rather than waiting a full interval
        assert!(sched.try_fire(1.01, false));
        assert_eq!(sched.last_spawn, 1.01);
        assert!(!sched.try_fire(1.02, false));
    }
}
