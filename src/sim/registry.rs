//! Live target set: spawn, aging, expiry, removal
//!
//! Targets are kept in insertion order, which the hit resolver relies on for
//! its tie-break.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::target::Target;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct TargetRegistry {
    targets: Vec<Target>,
    capacity: usize,
    rng: Pcg32,
    next_id: u32,
}

impl TargetRegistry {
    pub fn new(seed: u64, capacity: usize) -> Self {
        Self {
            targets: Vec::with_capacity(capacity),
            capacity,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.targets.len() >= self.capacity
    }

    /// Live targets in insertion order
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn clear(&mut self) {
        self.targets.clear();
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Spawn a random target at round-clock time `now`.
    /// Returns `None` without touching the RNG when at capacity.
    pub fn spawn(&mut self, now: f64, tuning: &Tuning) -> Option<Target> {
        if self.is_full() {
            return None;
        }

        let radius = self.rng.random_range(tuning.min_radius..=tuning.max_radius);
        let (lo, hi) = tuning.spawn_bounds(radius);
        let pos = Vec2::new(
            self.rng.random_range(lo.x..=hi.x),
            self.rng.random_range(lo.y..=hi.y),
        );
        let jitter = tuning.lifetime_jitter;
        let lifetime = tuning.base_lifetime * self.rng.random_range(1.0 - jitter..=1.0 + jitter);

        let target = Target {
            id: self.next_entity_id(),
            pos,
            radius,
            spawn_time: now,
            lifetime,
        };
        log::debug!(
            "Spawned target {} at ({:.0}, {:.0}) r={:.1} life={:.2}s",
            target.id,
            pos.x,
            pos.y,
            radius,
            lifetime
        );
        self.targets.push(target.clone());
        Some(target)
    }

    /// Insert a prebuilt target (scripted rounds, tests). Refused at capacity.
    pub fn insert(&mut self, mut target: Target) -> Option<u32> {
        if self.is_full() {
            return None;
        }
        target.id = self.next_entity_id();
        let id = target.id;
        self.targets.push(target);
        Some(id)
    }

    /// Remove and return every target older than its lifetime
    pub fn expire_aged(&mut self, now: f64) -> Vec<Target> {
        let mut expired = Vec::new();
        let mut alive = Vec::with_capacity(self.targets.len());
        for target in self.targets.drain(..) {
            if target.is_expired(now) {
                expired.push(target);
            } else {
                alive.push(target);
            }
        }
        self.targets = alive;
        expired
    }

    pub fn remove_by_index(&mut self, index: usize) -> Option<Target> {
        (index < self.targets.len()).then(|| self.targets.remove(index))
    }

    pub fn remove_by_id(&mut self, id: u32) -> Option<Target> {
        let index = self.targets.iter().position(|t| t.id == id)?;
        self.remove_by_index(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_respects_capacity() {
        let tuning = Tuning::default();
        let mut reg = TargetRegistry::new(7, 3);
        for i in 0..3 {
            assert!(reg.spawn(i as f64, &tuning).is_some());
        }
        assert!(reg.is_full());
        assert!(reg.spawn(4.0, &tuning).is_none());
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_expire_aged_removes_each_once() {
        let tuning = Tuning::default();
        let mut reg = TargetRegistry::new(7, 7);
        reg.spawn(0.0, &tuning);
        reg.spawn(0.0, &tuning);
        reg.spawn(1.0, &tuning);

        // Max lifetime is 1.5 * 1.15 = 1.725, min is 1.5 * 0.85 = 1.275
        let expired = reg.expire_aged(1.8);
        assert_eq!(expired.len(), 2);
        assert_eq!(reg.len(), 1);
        assert!(reg.expire_aged(1.8).is_empty());
        assert_eq!(reg.targets()[0].spawn_time, 1.0);
    }

    #[test]
    fn test_remove_by_id_and_index() {
        let tuning = Tuning::default();
        let mut reg = TargetRegistry::new(1, 7);
        let a = reg.spawn(0.0, &tuning).unwrap();
        let b = reg.spawn(0.0, &tuning).unwrap();
        let c = reg.spawn(0.0, &tuning).unwrap();

        assert_eq!(reg.remove_by_id(b.id).map(|t| t.id), Some(b.id));
        assert!(reg.remove_by_id(b.id).is_none());
        assert_eq!(reg.remove_by_index(1).map(|t| t.id), Some(c.id));
        assert!(reg.remove_by_index(5).is_none());
        assert_eq!(reg.targets()[0].id, a.id);
    }

    #[test]
    fn test_same_seed_same_targets() {
        let tuning = Tuning::default();
        let mut a = TargetRegistry::new(42, 7);
        let mut b = TargetRegistry::new(42, 7);
        for i in 0..5 {
            assert_eq!(a.spawn(i as f64, &tuning), b.spawn(i as f64, &tuning));
        }
    }

    proptest! {
        #[test]
        fn spawned_targets_satisfy_invariants(seed in any::<u64>(), count in 1usize..20) {
            let tuning = Tuning::default();
            let mut reg = TargetRegistry::new(seed, tuning.max_targets);
            for i in 0..count {
                reg.spawn(i as f64 * 0.1, &tuning);
                prop_assert!(reg.len() <= tuning.max_targets);
            }
            for t in reg.targets() {
                prop_assert!(t.radius >= tuning.min_radius && t.radius <= tuning.max_radius);
                prop_assert!(t.lifetime > 0.0);
                prop_assert!(t.lifetime >= tuning.base_lifetime * 0.85 - 1e-9);
                prop_assert!(t.lifetime <= tuning.base_lifetime * 1.15 + 1e-9);
                let reach = t.radius + tuning.edge_margin;
                prop_assert!(t.pos.x - reach >= -1e-3);
                prop_assert!(t.pos.x + reach <= tuning.window_width + 1e-3);
                prop_assert!(t.pos.y - reach >= tuning.hud_band - 1e-3);
                prop_assert!(t.pos.y + reach <= tuning.window_height + 1e-3);
            }
        }
    }
}
