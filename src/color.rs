// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # GL Color
//!
//! RGBA color used for clear colors, fill uniforms and the quadrant
//! palette of the colored-points demo.

use serde::{Deserialize, Serialize};

/// RGBA color, each component in [0.0, 1.0]
///
/// Serialized as a plain `[r, g, b, a]` array so config files stay short.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct GlColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl GlColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    pub const fn blue() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    pub const fn magenta() -> Self {
        Self::new(1.0, 0.0, 1.0, 1.0)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS `rgba()` form, components scaled to 0..255 except alpha
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.1})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a
        )
    }
}

impl From<[f32; 4]> for GlColor {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<GlColor> for [f32; 4] {
    fn from(c: GlColor) -> Self {
        c.to_array()
    }
}
