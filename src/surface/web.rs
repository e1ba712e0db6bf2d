// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Browser surfaces: `<canvas>` elements of the current document.
//! A WebGL context is wrapped into a `glow::Context` so it can serve as
//! the pipeline's `GlDevice`.

use super::{Canvas2d, Surface, SurfaceHost};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, WebGlRenderingContext};

pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// None when there is no window or document (e.g. inside a worker)
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn canvas(&self, id: &str) -> Option<HtmlCanvasElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl SurfaceHost for WebHost {
    type Device = glow::Context;
    type Canvas = CanvasRenderingContext2d;

    fn lookup(&self, id: &str) -> Option<Surface> {
        let canvas = self.canvas(id)?;
        Some(Surface {
            id: id.to_string(),
            width: canvas.width(),
            height: canvas.height(),
        })
    }

    // the browser returns the same context object on every call, so the
    // glow wrapper built here always drives the same GL state
    fn webgl_context(&self, surface: &Surface) -> Option<glow::Context> {
        let webgl = self
            .canvas(&surface.id)?
            .get_context("webgl")
            .ok()??
            .dyn_into::<WebGlRenderingContext>()
            .ok()?;
        Some(glow::Context::from_webgl1_context(webgl))
    }

    fn context_2d(&self, surface: &Surface) -> Option<CanvasRenderingContext2d> {
        self.canvas(&surface.id)?
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()
    }
}

impl Canvas2d for CanvasRenderingContext2d {
    fn set_fill_style(&self, css: &str) {
        self.set_fill_style_str(css);
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }
}
