// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Demo configuration, read from TOML.
//!
//! Every field has a default equal to the constant the demos were
//! written with, so an empty file (or no file) reproduces them exactly.
//!
//! ```toml
//! surface_id = "webgl"
//! clear_color = [0.0, 0.0, 0.0, 1.0]
//! translation = [0.5, 0.5, 0.0]
//!
//! [palette]
//! non_negative = [1.0, 0.0, 0.0, 1.0]
//!
//! [headless]
//! width = 400
//! height = 400
//! ```

use crate::color::GlColor;
use crate::error::{GlError, GlResult};
use crate::input::QuadrantPalette;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub clear_color: GlColor,
    pub point_color: GlColor,
    pub coords: [f32; 3],
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            clear_color: GlColor::blue(),
            point_color: GlColor::magenta(),
            coords: [0.5, 0.5, 0.0],
        }
    }
}

/// Size of the in-memory surfaces used by native runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadlessConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimerConfig {
    /// overrides each demo's own surface id
    pub surface_id: Option<String>,
    pub clear_color: GlColor,
    pub translation: [f32; 3],
    pub palette: QuadrantPalette,
    pub pulse: PulseConfig,
    pub headless: HeadlessConfig,
}

impl Default for PrimerConfig {
    fn default() -> Self {
        Self {
            surface_id: None,
            clear_color: GlColor::black(),
            translation: [0.5, 0.5, 0.0],
            palette: QuadrantPalette::default(),
            pulse: PulseConfig::default(),
            headless: HeadlessConfig::default(),
        }
    }
}

impl PrimerConfig {
    pub fn from_toml_str(s: &str) -> GlResult<Self> {
        toml::from_str(s).map_err(|e| GlError::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> GlResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GlError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> GlResult<String> {
        toml::to_string(self).map_err(|e| GlError::Config(e.to_string()))
    }

    pub fn surface_id<'a>(&'a self, default_id: &'a str) -> &'a str {
        self.surface_id.as_deref().unwrap_or(default_id)
    }
}
