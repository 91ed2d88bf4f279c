//! Floating score popups
//!
//! Display-only: nothing here feeds back into scoring or phase changes.
//! Birth times are wall-clock `now`, so popups keep fading while paused.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hit::Ring;
use crate::consts::FEEDBACK_RISE_SPEED;

/// Palette slot for a popup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorTag {
    Bullseye,
    Middle,
    Outer,
    Penalty,
}

impl From<Ring> for ColorTag {
    fn from(ring: Ring) -> Self {
        match ring {
            Ring::Bullseye => ColorTag::Bullseye,
            Ring::Middle => ColorTag::Middle,
            Ring::Outer => ColorTag::Outer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// Signed score delta, e.g. "+10" or "-5"
    pub text: String,
    pub color: ColorTag,
    pub pos: Vec2,
    pub birth_time: f64,
}

impl FeedbackEvent {
    pub fn score_delta(points: i64, color: ColorTag, pos: Vec2, now: f64) -> Self {
        Self {
            text: format!("{points:+}"),
            color,
            pos,
            birth_time: now,
        }
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.birth_time
    }

    /// Vertical drift at `now` (negative is up in screen space)
    pub fn rise(&self, now: f64) -> f32 {
        -FEEDBACK_RISE_SPEED * self.age(now).max(0.0) as f32
    }
}

#[derive(Debug, Clone)]
pub struct FeedbackQueue {
    events: Vec<FeedbackEvent>,
    window: f64,
}

impl FeedbackQueue {
    pub fn new(window: f64) -> Self {
        Self {
            events: Vec::new(),
            window,
        }
    }

    pub fn push(&mut self, event: FeedbackEvent) {
        self.events.push(event);
    }

    /// Drop events older than the display window
    pub fn prune(&mut self, now: f64) {
        let window = self.window;
        self.events.retain(|e| e.age(now) <= window);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
