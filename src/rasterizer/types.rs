//! Core types for the rasterizer

use serde::{Deserialize, Serialize};

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Subtract `amount` from every channel, stopping at 0
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Opaque RGBA bytes, for uploading to a display texture
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// How triangles are rasterized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Three edge lines, interior untouched
    Wireframe,
    /// Every pixel inside the triangle
    #[default]
    Filled,
}

/// Which boundary pixels a filled triangle owns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRule {
    /// Pixels on any edge are included (s >= 0, t >= 0, s + t <= 1).
    /// Adjacent triangles both color their shared edge.
    #[default]
    Inclusive,
    /// Pixels on an edge are included only for top and left edges,
    /// so triangles sharing an edge never overlap.
    TopLeft,
}

/// Rasterizer settings, passed alongside each triangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterSettings {
    pub fill_mode: FillMode,
    pub edge_rule: EdgeRule,
}

impl RasterSettings {
    pub fn new(fill_mode: FillMode, edge_rule: EdgeRule) -> Self {
        Self {
            fill_mode,
            edge_rule,
        }
    }

    pub fn with_fill_mode(self, fill_mode: FillMode) -> Self {
        Self { fill_mode, ..self }
    }
}
