//! Frame assembly: snapshot -> triangle list + text placements
//!
//! Draw order: background, targets, HUD bar, crosshair on top.
//! Text (HUD, popups, overlays) is returned as placements for the front end's
//! font renderer.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors, tag_color};
use crate::hud;
use crate::sim::Snapshot;
use crate::tuning::Tuning;

/// Height of the drawn HUD bar (inside the reserved HUD band)
pub const HUD_BAR_HEIGHT: f32 = 36.0;
const CROSSHAIR_RADIUS: f32 = 12.0;
const CROSSHAIR_GAP: f32 = 4.0;
const CIRCLE_SEGMENTS: u32 = 40;

/// A string to draw, centered on `pos`
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Timeout arc tint: fades from bright red toward dim as the target ages
fn countdown_color(progress: f32) -> [f32; 4] {
    let red = (1.0 - progress).clamp(30.0 / 255.0, 1.0);
    [red, 80.0 / 255.0, 80.0 / 255.0, 1.0]
}

/// Triangles for everything but text
pub fn build_scene(snapshot: &Snapshot, tuning: &Tuning, cursor: Option<Vec2>) -> Vec<Vertex> {
    let mut out = Vec::new();
    let [bull, mid, _] = tuning.ring_fracs;

    shapes::rect(
        &mut out,
        Vec2::ZERO,
        Vec2::new(tuning.window_width, tuning.window_height),
        colors::BACKGROUND,
    );

    for target in &snapshot.targets {
        let r = target.radius;
        shapes::ring(&mut out, target.pos, r, 2.0, colors::WHITE, CIRCLE_SEGMENTS);
        shapes::ring(&mut out, target.pos, r * mid, 2.0, colors::CYAN, CIRCLE_SEGMENTS);
        shapes::circle(&mut out, target.pos, r * bull, colors::WHITE, CIRCLE_SEGMENTS / 2);

        let progress = target.progress(snapshot.elapsed);
        shapes::countdown_arc(&mut out, target.pos, r + 3.0, progress, countdown_color(progress));
    }

    shapes::rect(
        &mut out,
        Vec2::ZERO,
        Vec2::new(tuning.window_width, HUD_BAR_HEIGHT),
        colors::HUD_BAR,
    );
    shapes::line(
        &mut out,
        Vec2::new(0.0, HUD_BAR_HEIGHT),
        Vec2::new(tuning.window_width, HUD_BAR_HEIGHT),
        1.0,
        colors::HUD_LINE,
    );

    if let Some(c) = cursor {
        crosshair(&mut out, c);
    }
    out
}

fn crosshair(out: &mut Vec<Vertex>, c: Vec2) {
    let (r, g) = (CROSSHAIR_RADIUS, CROSSHAIR_GAP);
    for dir in [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y] {
        shapes::line(out, c + dir * g, c + dir * r, 2.0, colors::YELLOW);
    }
    shapes::circle(out, c, 2.0, colors::YELLOW, 8);
}

/// Floating score popups at their current drift
pub fn popup_text(snapshot: &Snapshot) -> Vec<TextItem> {
    snapshot
        .feedback
        .iter()
        .map(|e| TextItem {
            text: e.text.clone(),
            pos: e.pos + Vec2::new(0.0, e.rise(snapshot.wall_time)),
            color: tag_color(e.color),
        })
        .collect()
}

/// Centered phase overlay (title, subtitle, tip), empty while playing
pub fn overlay_text(snapshot: &Snapshot, tuning: &Tuning) -> Vec<TextItem> {
    let Some(overlay) = hud::overlay(snapshot, tuning) else {
        return Vec::new();
    };
    let center = Vec2::new(tuning.window_width, tuning.window_height) * 0.5;
    [
        (overlay.title, -64.0, colors::WHITE),
        (overlay.subtitle, -16.0, colors::MUTED),
        (overlay.tip, 20.0, colors::MUTED),
    ]
    .into_iter()
    .filter(|(text, _, _)| !text.is_empty())
    .map(|(text, dy, color)| TextItem {
        text,
        pos: center + Vec2::new(0.0, dy),
        color,
    })
    .collect()
}
