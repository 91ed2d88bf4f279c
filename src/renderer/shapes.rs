//! Shape generation for 2D primitives (triangle lists)

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::vertex::Vertex;

/// Point on a circle, angle measured clockwise on screen from +x
#[inline]
fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    center + Vec2::new(theta.cos(), theta.sin()) * radius
}

fn push_quad(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
    // a-b inner edge, c-d outer edge
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));

    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    out.reserve((segments * 3) as usize);
    for i in 0..segments {
        let p1 = on_circle(center, radius, i as f32 / segments as f32 * TAU);
        let p2 = on_circle(center, radius, (i + 1) as f32 / segments as f32 * TAU);

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(p1.x, p1.y, color));
        out.push(Vertex::new(p2.x, p2.y, color));
    }
}

/// Outline circle of the given stroke width (stroke grows inward)
pub fn ring(out: &mut Vec<Vertex>, center: Vec2, radius: f32, width: f32, color: [f32; 4], segments: u32) {
    arc(out, center, radius, width, 0.0, TAU, color, segments);
}

/// Stroke along a circle from `start` sweeping `sweep` radians
#[allow(clippy::too_many_arguments)]
pub fn arc(
    out: &mut Vec<Vertex>,
    center: Vec2,
    radius: f32,
    width: f32,
    start: f32,
    sweep: f32,
    color: [f32; 4],
    segments: u32,
) {
    if segments == 0 || sweep == 0.0 {
        return;
    }
    let inner_r = (radius - width).max(0.0);
    out.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start + sweep * i as f32 / segments as f32;
        let theta2 = start + sweep * (i + 1) as f32 / segments as f32;
        push_quad(
            out,
            on_circle(center, inner_r, theta1),
            on_circle(center, inner_r, theta2),
            on_circle(center, radius, theta1),
            on_circle(center, radius, theta2),
            color,
        );
    }
}

/// Timeout indicator: arc starting at 12 o'clock, growing clockwise with `progress`
pub fn countdown_arc(out: &mut Vec<Vertex>, center: Vec2, radius: f32, progress: f32, color: [f32; 4]) {
    let progress = progress.clamp(0.0, 1.0);
    let segments = ((48.0 * progress).ceil() as u32).max(1);
    arc(out, center, radius, 3.0, -FRAC_PI_2, TAU * progress, color, segments);
}

/// Axis-aligned rectangle
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, max: Vec2, color: [f32; 4]) {
    push_quad(
        out,
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        Vec2::new(max.x, max.y),
        color,
    );
}

/// Thick line segment
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
    push_quad(out, from - perp, to - perp, from + perp, to + perp, color);
}
