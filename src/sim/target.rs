//! Target entity
//!
//! Times are on the round clock (seconds of unpaused play since round start).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular, time-limited target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Center (screen pixels, y down)
    pub pos: Vec2,
    pub radius: f32,
    /// Round-clock time the target appeared
    pub spawn_time: f64,
    /// Seconds the target stays alive
    pub lifetime: f64,
}

impl Target {
    /// Seconds since spawn
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.spawn_time
    }

    /// Past its lifetime (strictly)
    #[inline]
    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) > self.lifetime
    }

    /// Fraction of lifetime used, clamped to [0, 1] (drives the timeout arc)
    pub fn progress(&self, now: f64) -> f32 {
        (self.age(now) / self.lifetime).clamp(0.0, 1.0) as f32
    }

    /// Squared distance from center to `p`
    #[inline]
    pub fn dist_sq(&self, p: Vec2) -> f32 {
        self.pos.distance_squared(p)
    }

    /// Whether `p` falls inside the circle scaled by `frac`
    #[inline]
    pub fn contains(&self, p: Vec2, frac: f32) -> bool {
        let r = self.radius * frac;
        self.dist_sq(p) <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target {
            id: 1,
            pos: Vec2::new(100.0, 100.0),
            radius: 20.0,
            spawn_time: 2.0,
            lifetime: 1.0,
        }
    }

    #[test]
    fn test_expiry_is_strict() {
        let t = target();
        assert!(!t.is_expired(2.5));
        assert!(!t.is_expired(3.0));
        assert!(t.is_expired(3.01));
    }

    #[test]
    fn test_progress_clamped() {
        let t = target();
        assert_eq!(t.progress(1.0), 0.0);
        assert!((t.progress(2.5) - 0.5).abs() < 1e-6);
        assert_eq!(t.progress(10.0), 1.0);
    }

    #[test]
    fn test_contains_edge() {
        let t = target();
        assert!(t.contains(Vec2::new(120.0, 100.0), 1.0));
        assert!(!t.contains(Vec2::new(120.5, 100.0), 1.0));
        assert!(t.contains(Vec2::new(105.0, 100.0), 0.25));
        assert!(!t.contains(Vec2::new(106.0, 100.0), 0.25));
    }
}
