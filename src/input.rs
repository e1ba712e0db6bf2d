// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Pointer Input
//!
//! Turns a pointer press in page (client) pixels into a point in
//! normalized device coordinates and records it, optionally with a
//! color picked by quadrant.
//!
//! ```text
//!  (0,0) ─────────── (w,0)          (-1, 1) ───────── (1, 1)
//!    │    client px    │     ──►       │      NDC       │
//!  (0,h) ─────────── (w,h)          (-1,-1) ───────── (1,-1)
//! ```
//!
//! Points outside the surface are not clamped; they simply land outside
//! [-1, 1] and are clipped by the device.

use crate::color::GlColor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Pointer press in client coordinates plus the pressed element's
/// bounding rectangle origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub rect_left: f64,
    pub rect_top: f64,
}

impl PressEvent {
    /// Press at surface-local pixel position (rect at the page origin)
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            client_x: x,
            client_y: y,
            rect_left: 0.0,
            rect_top: 0.0,
        }
    }

    pub fn local(&self) -> (f64, f64) {
        (self.client_x - self.rect_left, self.client_y - self.rect_top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

/// Moves the origin to the surface centre, flips y, then divides each
/// axis by half the surface size
pub fn normalize_coordinates(x: f64, y: f64, width: u32, height: u32) -> NormalizedPoint {
    let half_w = width as f64 / 2.0;
    let half_h = height as f64 / 2.0;
    NormalizedPoint {
        x: ((x - half_w) / half_w) as f32,
        y: ((half_h - y) / half_h) as f32,
    }
}

/// Three-way partition of the plane: both coordinates >= 0, both < 0,
/// mixed signs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantPalette {
    pub non_negative: GlColor,
    pub negative: GlColor,
    pub mixed: GlColor,
}

impl Default for QuadrantPalette {
    fn default() -> Self {
        Self {
            non_negative: GlColor::red(),
            negative: GlColor::green(),
            mixed: GlColor::white(),
        }
    }
}

impl QuadrantPalette {
    pub fn color_of(&self, p: NormalizedPoint) -> GlColor {
        if p.x >= 0.0 && p.y >= 0.0 {
            self.non_negative
        } else if p.x < 0.0 && p.y < 0.0 {
            self.negative
        } else {
            self.mixed
        }
    }
}

/// Append-only points with their colors, index-aligned
#[derive(Debug, Clone, Default)]
pub struct PointHistory {
    points: Vec<NormalizedPoint>,
    colors: Vec<GlColor>,
}

impl PointHistory {
    pub fn push(&mut self, point: NormalizedPoint, color: GlColor) {
        self.points.push(point);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[NormalizedPoint] {
        &self.points
    }

    pub fn colors(&self) -> &[GlColor] {
        &self.colors
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NormalizedPoint, &GlColor)> {
        self.points.iter().zip(self.colors.iter())
    }
}

pub struct InputBridge {
    width: u32,
    height: u32,
    palette: Option<QuadrantPalette>,
    default_color: GlColor,
    history: PointHistory,
}

impl InputBridge {
    /// Every point gets `color`
    pub fn new(width: u32, height: u32, color: GlColor) -> Self {
        Self {
            width,
            height,
            palette: None,
            default_color: color,
            history: PointHistory::default(),
        }
    }

    /// Color picked per point from `palette`
    pub fn with_palette(width: u32, height: u32, palette: QuadrantPalette) -> Self {
        Self {
            palette: Some(palette),
            ..Self::new(width, height, GlColor::white())
        }
    }

    pub fn on_press(&mut self, event: &PressEvent) -> NormalizedPoint {
        let (x, y) = event.local();
        let point = normalize_coordinates(x, y, self.width, self.height);
        let color = match &self.palette {
            Some(p) => p.color_of(point),
            None => self.default_color,
        };
        debug!("press ({}, {}) -> ({}, {}) {:?}", x, y, point.x, point.y, color);
        self.history.push(point, color);
        point
    }

    pub fn history(&self) -> &PointHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn np(x: f32, y: f32) -> NormalizedPoint {
        NormalizedPoint { x, y }
    }

    #[test]
    fn corners_and_centre_map_to_ndc() {
        assert_eq!(normalize_coordinates(200.0, 150.0, 400, 300), np(0.0, 0.0));
        assert_eq!(normalize_coordinates(0.0, 0.0, 400, 300), np(-1.0, 1.0));
        assert_eq!(normalize_coordinates(400.0, 300.0, 400, 300), np(1.0, -1.0));
        assert_eq!(normalize_coordinates(300.0, 75.0, 400, 300), np(0.5, 0.5));
    }

    #[test]
    fn out_of_surface_points_pass_through() {
        let p = normalize_coordinates(600.0, -150.0, 400, 300);
        assert_eq!(p, np(2.0, 2.0));
    }

    #[test]
    fn press_is_relative_to_bounding_rect() {
        let ev = PressEvent {
            client_x: 258.0,
            client_y: 208.0,
            rect_left: 58.0,
            rect_top: 8.0,
        };
        let mut bridge = InputBridge::new(400, 400, GlColor::red());
        assert_eq!(bridge.on_press(&ev), np(0.0, 0.0));
    }

    #[test]
    fn quadrant_partition() {
        let palette = QuadrantPalette::default();
        assert_eq!(palette.color_of(np(0.2, 0.3)), GlColor::red());
        assert_eq!(palette.color_of(np(-0.1, -0.4)), GlColor::green());
        assert_eq!(palette.color_of(np(0.5, -0.2)), GlColor::white());
        assert_eq!(palette.color_of(np(-0.5, 0.2)), GlColor::white());
        // zero counts as non-negative
        assert_eq!(palette.color_of(np(0.0, 0.0)), GlColor::red());
        assert_eq!(palette.color_of(np(0.0, -0.1)), GlColor::white());
    }

    #[test]
    fn history_stays_aligned() {
        let mut bridge = InputBridge::with_palette(400, 400, QuadrantPalette::default());
        bridge.on_press(&PressEvent::at(300.0, 100.0));
        bridge.on_press(&PressEvent::at(100.0, 300.0));
        bridge.on_press(&PressEvent::at(300.0, 300.0));
        let h = bridge.history();
        assert_eq!(h.len(), 3);
        assert_eq!(h.points().len(), h.colors().len());
        assert_eq!(
            h.colors(),
            &[GlColor::red(), GlColor::green(), GlColor::white()]
        );
    }
}
