// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use crate::color::GlColor;
use crate::config::PrimerConfig;
use crate::error::GlResult;
use crate::surface::{resolve_2d, Canvas2d, Canvas2dContext, SurfaceHost};
use log::info;

/// A filled rectangle through the 2D context; no shaders involved.
pub struct DrawRectangle<C: Canvas2d> {
    pub ctx: Canvas2dContext<C>,
}

impl<C: Canvas2d> DrawRectangle<C> {
    pub const RECT: [f64; 4] = [120.0, 10.0, 150.0, 150.0];

    pub fn run<H: SurfaceHost<Canvas = C>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_2d(host, cfg.surface_id("example"))?;
        let [x, y, w, h] = Self::RECT;
        ctx.ctx.set_fill_style(&GlColor::blue().to_css());
        ctx.ctx.fill_rect(x, y, w, h);
        info!("rectangle drawn on {}", ctx.surface.id);
        Ok(Self { ctx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlError;
    use crate::surface::headless::Fill;
    use crate::surface::{ContextKind, HeadlessHost};

    #[test]
    fn fills_one_blue_rectangle() {
        let host = HeadlessHost::new().with_surface_kinds("example", 400, 400, &[ContextKind::TwoD]);
        let demo = DrawRectangle::run(&host, &PrimerConfig::default()).unwrap();
        assert_eq!(
            demo.ctx.ctx.fills(),
            vec![Fill {
                style: "rgba(0, 0, 255, 1.0)".to_string(),
                rect: [120.0, 10.0, 150.0, 150.0],
            }]
        );
    }

    #[test]
    fn webgl_only_surface_is_unavailable() {
        let host = HeadlessHost::new().with_surface_kinds("example", 400, 400, &[ContextKind::WebGl]);
        let err = DrawRectangle::run(&host, &PrimerConfig::default()).err().unwrap();
        assert!(matches!(err, GlError::ContextUnavailable { kind: ContextKind::TwoD, .. }));
    }
}
