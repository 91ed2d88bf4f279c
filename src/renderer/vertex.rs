//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::ColorTag;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Raw bytes of a vertex slice, ready for a GPU buffer upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const BACKGROUND: [f32; 4] = rgb(14, 18, 26);
    pub const WHITE: [f32; 4] = rgb(240, 240, 240);
    pub const GREEN: [f32; 4] = rgb(45, 200, 120);
    pub const RED: [f32; 4] = rgb(230, 60, 70);
    pub const YELLOW: [f32; 4] = rgb(250, 220, 90);
    pub const CYAN: [f32; 4] = rgb(60, 210, 230);
    pub const MUTED: [f32; 4] = rgb(120, 130, 145);
    pub const HUD_BAR: [f32; 4] = rgb(20, 24, 32);
    pub const HUD_LINE: [f32; 4] = rgb(40, 46, 58);
}

/// Palette entry for a feedback popup
pub fn tag_color(tag: ColorTag) -> [f32; 4] {
    match tag {
        ColorTag::Bullseye => colors::GREEN,
        ColorTag::Middle => colors::CYAN,
        ColorTag::Outer => colors::WHITE,
        ColorTag::Penalty => colors::RED,
    }
}
