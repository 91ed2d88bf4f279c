//! Click hit detection and ring classification

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::target::Target;

/// Concentric scoring zone of a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    Bullseye,
    Middle,
    Outer,
}

impl Ring {
    /// Index into `ring_fracs` / `ring_scores`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Ring::Bullseye => 0,
            Ring::Middle => 1,
            Ring::Outer => 2,
        }
    }

    /// Innermost ring whose radius contains the squared distance `d2`
    pub fn classify(d2: f32, radius: f32, fracs: &[f32; 3]) -> Option<Ring> {
        [Ring::Bullseye, Ring::Middle, Ring::Outer]
            .into_iter()
            .find(|ring| {
                let r = radius * fracs[ring.index()];
                d2 <= r * r
            })
    }
}

/// Result of resolving a click against the live targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// Closest target whose outer ring contains the click
    Hit { index: usize, ring: Ring },
    Miss,
}

/// Find which target (if any) a click at `point` hits.
///
/// Among targets whose outer ring contains the point, the one with the
/// nearest center wins; on an exact distance tie the earliest-inserted target
/// wins. The ring comes from that target's distance alone.
pub fn resolve(point: Vec2, targets: &[Target], fracs: &[f32; 3]) -> Resolution {
    let mut best: Option<(usize, f32, Ring)> = None;

    for (i, target) in targets.iter().enumerate() {
        if !target.contains(point, fracs[2]) {
            continue;
        }
        let d2 = target.dist_sq(point);
        let Some(ring) = Ring::classify(d2, target.radius, fracs) else {
            continue;
        };
        // Strict `<` keeps the first-found target on ties
        if best.is_none_or(|(_, best_d2, _)| d2 < best_d2) {
            best = Some((i, d2, ring));
        }
    }

    match best {
        Some((index, _, ring)) => Resolution::Hit { index, ring },
        None => Resolution::Miss,
    }
}
