// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! In-memory surfaces for native runs and tests.

use super::{Canvas2d, ContextKind, Surface, SurfaceHost};
use crate::device::HeadlessDevice;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One recorded 2D fill
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub style: String,
    pub rect: [f64; 4],
}

#[derive(Debug, Default)]
struct CanvasState {
    fill_style: String,
    fills: Vec<Fill>,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessCanvas2d {
    state: Rc<RefCell<CanvasState>>,
}

impl HeadlessCanvas2d {
    pub fn fills(&self) -> Vec<Fill> {
        self.state.borrow().fills.clone()
    }
}

impl Canvas2d for HeadlessCanvas2d {
    fn set_fill_style(&self, css: &str) {
        self.state.borrow_mut().fill_style = css.to_string();
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        let mut st = self.state.borrow_mut();
        let style = st.fill_style.clone();
        st.fills.push(Fill {
            style,
            rect: [x, y, width, height],
        });
    }
}

struct HeadlessSurface {
    surface: Surface,
    kinds: Vec<ContextKind>,
    // created on first request, then handed out again
    gl: RefCell<Option<HeadlessDevice>>,
    canvas: RefCell<Option<HeadlessCanvas2d>>,
}

#[derive(Default)]
pub struct HeadlessHost {
    surfaces: HashMap<String, HeadlessSurface>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a surface supporting both 2D and WebGL contexts
    pub fn with_surface(self, id: &str, width: u32, height: u32) -> Self {
        self.with_surface_kinds(id, width, height, &[ContextKind::TwoD, ContextKind::WebGl])
    }

    pub fn with_surface_kinds(
        mut self,
        id: &str,
        width: u32,
        height: u32,
        kinds: &[ContextKind],
    ) -> Self {
        self.surfaces.insert(
            id.to_string(),
            HeadlessSurface {
                surface: Surface {
                    id: id.to_string(),
                    width,
                    height,
                },
                kinds: kinds.to_vec(),
                gl: RefCell::new(None),
                canvas: RefCell::new(None),
            },
        );
        self
    }

    /// Device of a surface whose WebGL context was already acquired
    pub fn device(&self, id: &str) -> Option<HeadlessDevice> {
        self.surfaces.get(id)?.gl.borrow().clone()
    }

    pub fn canvas(&self, id: &str) -> Option<HeadlessCanvas2d> {
        self.surfaces.get(id)?.canvas.borrow().clone()
    }
}

impl SurfaceHost for HeadlessHost {
    type Device = HeadlessDevice;
    type Canvas = HeadlessCanvas2d;

    fn lookup(&self, id: &str) -> Option<Surface> {
        self.surfaces.get(id).map(|hs| hs.surface.clone())
    }

    fn webgl_context(&self, surface: &Surface) -> Option<HeadlessDevice> {
        let hs = self.surfaces.get(&surface.id)?;
        // a canvas hands out one kind of context for its whole life
        if !hs.kinds.contains(&ContextKind::WebGl) || hs.canvas.borrow().is_some() {
            return None;
        }
        let mut gl = hs.gl.borrow_mut();
        Some(gl.get_or_insert_with(HeadlessDevice::new).clone())
    }

    fn context_2d(&self, surface: &Surface) -> Option<HeadlessCanvas2d> {
        let hs = self.surfaces.get(&surface.id)?;
        if !hs.kinds.contains(&ContextKind::TwoD) || hs.gl.borrow().is_some() {
            return None;
        }
        let mut canvas = hs.canvas.borrow_mut();
        Some(canvas.get_or_insert_with(HeadlessCanvas2d::default).clone())
    }
}
