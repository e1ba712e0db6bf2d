// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Surface Resolution
//!
//! A surface is a drawing target owned by the host page. It is looked up
//! by id, never created here. Resolution hands back a context bound to
//! exactly one surface:
//!
//! - [`resolve_gl`] for a WebGL context wrapped as a [`GlDevice`];
//! - [`resolve_2d`] for a 2D canvas context.
//!
//! Acquisition is idempotent per surface: resolving the same id twice
//! yields an equivalent, usable context.

use crate::device::GlDevice;
use crate::error::{GlError, GlResult};
use log::info;
use std::fmt;

pub mod headless;
#[cfg(wasm)]
pub mod web;

pub use headless::{HeadlessCanvas2d, HeadlessHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    TwoD,
    WebGl,
}

impl ContextKind {
    /// identifier passed to `canvas.getContext`
    pub fn context_id(self) -> &'static str {
        match self {
            ContextKind::TwoD => "2d",
            ContextKind::WebGl => "webgl",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.context_id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// The 2D drawing calls the rectangle demo needs
pub trait Canvas2d {
    fn set_fill_style(&self, css: &str);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
}

/// DOM-like boundary: surfaces by id and context creation on them
pub trait SurfaceHost {
    type Device: GlDevice;
    type Canvas: Canvas2d;

    fn lookup(&self, id: &str) -> Option<Surface>;
    fn webgl_context(&self, surface: &Surface) -> Option<Self::Device>;
    fn context_2d(&self, surface: &Surface) -> Option<Self::Canvas>;
}

pub struct RenderingContext<D: GlDevice> {
    pub surface: Surface,
    pub gl: D,
}

pub struct Canvas2dContext<C: Canvas2d> {
    pub surface: Surface,
    pub ctx: C,
}

fn lookup<H: SurfaceHost>(host: &H, id: &str) -> GlResult<Surface> {
    host.lookup(id)
        .ok_or_else(|| GlError::SurfaceNotFound(id.to_string()))
}

pub fn resolve_gl<H: SurfaceHost>(host: &H, id: &str) -> GlResult<RenderingContext<H::Device>> {
    let surface = lookup(host, id)?;
    let gl = host
        .webgl_context(&surface)
        .ok_or_else(|| GlError::ContextUnavailable {
            id: id.to_string(),
            kind: ContextKind::WebGl,
        })?;
    info!("webgl context ok: {} {}x{}", surface.id, surface.width, surface.height);
    Ok(RenderingContext { surface, gl })
}

pub fn resolve_2d<H: SurfaceHost>(host: &H, id: &str) -> GlResult<Canvas2dContext<H::Canvas>> {
    let surface = lookup(host, id)?;
    let ctx = host
        .context_2d(&surface)
        .ok_or_else(|| GlError::ContextUnavailable {
            id: id.to_string(),
            kind: ContextKind::TwoD,
        })?;
    info!("2d context ok: {} {}x{}", surface.id, surface.width, surface.height);
    Ok(Canvas2dContext { surface, ctx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::GlCall;

    #[test]
    fn unknown_surface_is_not_found() {
        let host = HeadlessHost::new().with_surface("webgl", 400, 400);
        let err = resolve_gl(&host, "nope").err().unwrap();
        assert_eq!(err, GlError::SurfaceNotFound("nope".to_string()));
        let err = resolve_2d(&host, "").err().unwrap();
        assert_eq!(err, GlError::SurfaceNotFound(String::new()));
    }

    #[test]
    fn missing_context_kind_is_unavailable() {
        let host = HeadlessHost::new().with_surface_kinds("example", 400, 400, &[ContextKind::TwoD]);
        let err = resolve_gl(&host, "example").err().unwrap();
        assert_eq!(
            err,
            GlError::ContextUnavailable {
                id: "example".to_string(),
                kind: ContextKind::WebGl
            }
        );
        assert!(resolve_2d(&host, "example").is_ok());
    }

    #[test]
    fn resolution_is_idempotent() {
        let host = HeadlessHost::new().with_surface("webgl", 320, 240);
        let a = resolve_gl(&host, "webgl").unwrap();
        let b = resolve_gl(&host, "webgl").unwrap();
        assert_eq!(a.surface, b.surface);
        assert!(a.gl.same_device(&b.gl));

        a.gl.clear();
        assert_eq!(b.gl.calls(), vec![GlCall::Clear]);
    }

    #[test]
    fn surface_keeps_its_first_context_kind() {
        let host = HeadlessHost::new().with_surface("webgl", 320, 240);
        assert!(resolve_gl(&host, "webgl").is_ok());
        assert!(matches!(
            resolve_2d(&host, "webgl"),
            Err(GlError::ContextUnavailable { kind: ContextKind::TwoD, .. })
        ));
    }

    #[test]
    fn resolution_issues_no_device_calls() {
        let host = HeadlessHost::new().with_surface("webgl", 320, 240);
        let ctx = resolve_gl(&host, "webgl").unwrap();
        assert!(ctx.gl.calls().is_empty());
        assert_eq!((ctx.surface.width, ctx.surface.height), (320, 240));
    }
}
