//! Game balance and layout constants
//!
//! Fixed at session construction; nothing mutates a `Tuning` while a session runs.
//! Loadable from JSON so balance can be tweaked without a rebuild.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a [`Tuning`]
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> TuningError {
    TuningError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Game tuning/layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    /// Logical window width (pixels)
    pub window_width: f32,
    /// Logical window height (pixels)
    pub window_height: f32,
    /// Band reserved for the HUD at the top of the window
    pub hud_band: f32,
    /// Gap kept between a target's edge and the playable border
    pub edge_margin: f32,

    // === Targets ===
    pub min_radius: f32,
    pub max_radius: f32,
    /// Base lifetime in seconds
    pub base_lifetime: f64,
    /// Lifetime is scaled by uniform(1 - jitter, 1 + jitter)
    pub lifetime_jitter: f64,
    pub max_targets: usize,

    // === Spawn cadence ===
    pub spawn_interval_start: f64,
    pub spawn_interval_min: f64,
    /// Ramp period in seconds (0 disables the ramp)
    pub spawn_accel_every: f64,
    pub spawn_accel_step: f64,

    // === Scoring ===
    /// Ring radii as fractions of the target radius (bullseye, middle, outer)
    pub ring_fracs: [f32; 3],
    /// Points per ring (bullseye, middle, outer)
    pub ring_scores: [i64; 3],
    pub miss_score: i64,
    pub timeout_score: i64,

    // === Round ===
    /// Round length in seconds; `None` plays endlessly
    pub round_time: Option<f64>,
    /// Seconds a score popup stays visible
    pub feedback_window: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            hud_band: HUD_BAND,
            edge_margin: EDGE_MARGIN,

            min_radius: TARGET_MIN_RADIUS,
            max_radius: TARGET_MAX_RADIUS,
            base_lifetime: TARGET_LIFETIME,
            lifetime_jitter: TARGET_LIFETIME_JITTER,
            max_targets: MAX_TARGETS_ON_SCREEN,

            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_accel_every: SPAWN_ACCEL_EVERY,
            spawn_accel_step: SPAWN_ACCEL_STEP,

            ring_fracs: RING_FRACS,
            ring_scores: RING_SCORES,
            miss_score: MISS_SCORE,
            timeout_score: TIMEOUT_SCORE,

            round_time: Some(ROUND_TIME),
            feedback_window: FEEDBACK_WINDOW,
        }
    }
}

impl Tuning {
    /// Default tuning with no round timer
    pub fn endless() -> Self {
        Self {
            round_time: None,
            ..Self::default()
        }
    }

    /// Range of valid centers for a target of `radius` (min corner, max corner)
    pub fn spawn_bounds(&self, radius: f32) -> (Vec2, Vec2) {
        let inset = radius + self.edge_margin;
        (
            Vec2::new(inset, inset + self.hud_band),
            Vec2::new(self.window_width - inset, self.window_height - inset),
        )
    }

    /// Reject values that would break target or scheduler invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.window_width.is_finite() && self.window_width > 0.0) {
            return Err(invalid("window_width", "must be positive"));
        }
        if !(self.window_height.is_finite() && self.window_height > 0.0) {
            return Err(invalid("window_height", "must be positive"));
        }
        if !(self.hud_band >= 0.0) {
            return Err(invalid("hud_band", "must not be negative"));
        }
        if !(self.edge_margin >= 0.0) {
            return Err(invalid("edge_margin", "must not be negative"));
        }
        if !(self.min_radius > 0.0) {
            return Err(invalid("min_radius", "must be positive"));
        }
        if !(self.max_radius >= self.min_radius) {
            return Err(invalid(
                "max_radius",
                format!("{} is below min_radius {}", self.max_radius, self.min_radius),
            ));
        }
        let (lo, hi) = self.spawn_bounds(self.max_radius);
        if lo.x > hi.x || lo.y > hi.y {
            return Err(invalid(
                "max_radius",
                "playable area is too small to fit the largest target",
            ));
        }
        if !(self.base_lifetime > 0.0) {
            return Err(invalid("base_lifetime", "must be positive"));
        }
        if !(0.0..1.0).contains(&self.lifetime_jitter) {
            return Err(invalid("lifetime_jitter", "must be in [0, 1)"));
        }
        if self.max_targets == 0 {
            return Err(invalid("max_targets", "must be at least 1"));
        }
        if !(self.spawn_interval_min > 0.0) {
            return Err(invalid("spawn_interval_min", "must be positive"));
        }
        if !(self.spawn_interval_start >= self.spawn_interval_min) {
            return Err(invalid(
                "spawn_interval_start",
                "must not be below spawn_interval_min",
            ));
        }
        if !(self.spawn_accel_every >= 0.0) {
            return Err(invalid("spawn_accel_every", "must not be negative"));
        }
        if !(self.spawn_accel_step >= 0.0) {
            return Err(invalid("spawn_accel_step", "must not be negative"));
        }
        let [bull, mid, outer] = self.ring_fracs;
        if !(bull > 0.0 && bull <= mid && mid <= outer) {
            return Err(invalid("ring_fracs", "must be positive and ascending"));
        }
        if let Some(t) = self.round_time {
            if !(t > 0.0) {
                return Err(invalid("round_time", "must be positive (or null for endless)"));
            }
        }
        if !(self.feedback_window >= 0.0) {
            return Err(invalid("feedback_window", "must not be negative"));
        }
        Ok(())
    }

    /// Parse and validate a JSON tuning document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
        assert!(Tuning::endless().validate().is_ok());
        assert_eq!(Tuning::endless().round_time, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "max_targets": 3, "round_time": null }"#).unwrap();
        assert_eq!(tuning.max_targets, 3);
        assert_eq!(tuning.round_time, None);
        assert_eq!(tuning.min_radius, TARGET_MIN_RADIUS);
        assert_eq!(tuning.ring_scores, RING_SCORES);
    }

    #[test]
    fn test_rejects_inverted_radius() {
        let err = Tuning::from_json(r#"{ "min_radius": 40.0, "max_radius": 20.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "max_radius", .. }));
    }

    #[test]
    fn test_rejects_tiny_window() {
        let tuning = Tuning {
            window_height: 80.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "max_radius", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_schedule_and_rings() {
        let tuning = Tuning {
            spawn_interval_min: 1.0,
            spawn_interval_start: 0.5,
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());

        let tuning = Tuning {
            ring_fracs: [0.6, 0.5, 1.0],
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Invalid { field: "ring_fracs", .. })
        ));

        let tuning = Tuning {
            round_time: Some(0.0),
            ..Tuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let tuning = Tuning::load_or_default(Some(Path::new("/nonexistent/sharpshot.json")));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_spawn_bounds_reserve_hud() {
        let tuning = Tuning::default();
        let (lo, hi) = tuning.spawn_bounds(20.0);
        assert_eq!(lo, Vec2::new(28.0, 68.0));
        assert_eq!(hi, Vec2::new(872.0, 572.0));
    }
}
