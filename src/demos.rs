// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Demos
//!
//! Each demo is the same short pipeline with one new idea added:
//!
//! | demo                 | surface   | adds                                    |
//! |----------------------|-----------|-----------------------------------------|
//! | hello_canvas         | `webgl`   | context + clear                         |
//! | hello_point1         | `webgl`   | program, one fixed point                |
//! | hello_point2         | `webgl`   | attribute constants                     |
//! | draw_rectangle       | `example` | 2D context instead of WebGL             |
//! | clicked_points       | `webgl`   | pointer input, history replay           |
//! | colored_points       | `webgl`   | per-point color uniform                 |
//! | translated_triangle  | `webgl`   | vertex buffer, uniform, topology switch |
//! | pulse                | `canvas`  | animation loop                          |
//!
//! Demos are generic over the host, so the same code drives a browser
//! page and the headless runner.

use crate::surface::ContextKind;
use std::fmt;
use std::str::FromStr;

pub mod hello;
pub mod points;
pub mod pulse;
pub mod rectangle;
pub mod shader_source;
pub mod triangle;

pub use hello::{HelloCanvas, HelloPoint1, HelloPoint2};
pub use points::PointDemo;
pub use pulse::{Pulse, PulseState};
pub use rectangle::DrawRectangle;
pub use triangle::TranslatedTriangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    HelloCanvas,
    HelloPoint1,
    HelloPoint2,
    DrawRectangle,
    ClickedPoints,
    ColoredPoints,
    TranslatedTriangle,
    Pulse,
}

impl DemoKind {
    pub const ALL: [DemoKind; 8] = [
        DemoKind::HelloCanvas,
        DemoKind::HelloPoint1,
        DemoKind::HelloPoint2,
        DemoKind::DrawRectangle,
        DemoKind::ClickedPoints,
        DemoKind::ColoredPoints,
        DemoKind::TranslatedTriangle,
        DemoKind::Pulse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::HelloCanvas => "hello_canvas",
            DemoKind::HelloPoint1 => "hello_point1",
            DemoKind::HelloPoint2 => "hello_point2",
            DemoKind::DrawRectangle => "draw_rectangle",
            DemoKind::ClickedPoints => "clicked_points",
            DemoKind::ColoredPoints => "colored_points",
            DemoKind::TranslatedTriangle => "translated_triangle",
            DemoKind::Pulse => "pulse",
        }
    }

    /// id of the page element the demo draws into
    pub fn default_surface_id(self) -> &'static str {
        match self {
            DemoKind::DrawRectangle => "example",
            DemoKind::Pulse => "canvas",
            _ => "webgl",
        }
    }

    pub fn context_kind(self) -> ContextKind {
        match self {
            DemoKind::DrawRectangle => ContextKind::TwoD,
            _ => ContextKind::WebGl,
        }
    }

    /// demos that react to pointer presses
    pub fn accepts_clicks(self) -> bool {
        matches!(self, DemoKind::ClickedPoints | DemoKind::ColoredPoints)
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        DemoKind::ALL
            .iter()
            .copied()
            .find(|d| d.name() == key)
            .ok_or_else(|| {
                let names: Vec<&str> = DemoKind::ALL.iter().map(|d| d.name()).collect();
                format!("unknown demo '{}', expected one of: {}", s, names.join(", "))
            })
    }
}
