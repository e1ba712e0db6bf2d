// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! The three static hello demos: a cleared canvas, a point fixed in the
//! shader, and a point positioned and sized through attribute constants.

use super::shader_source;
use crate::config::PrimerConfig;
use crate::device::{AttribConstant, GlDevice, Topology};
use crate::error::GlResult;
use crate::geometry::set_constant;
use crate::program::{Program, ProgramBuilder};
use crate::renderer::FrameRenderer;
use crate::surface::{resolve_gl, RenderingContext, SurfaceHost};
use log::info;

const DEFAULT_SURFACE: &str = "webgl";

pub struct HelloCanvas<D: GlDevice> {
    pub ctx: RenderingContext<D>,
}

impl<D: GlDevice> HelloCanvas<D> {
    pub fn run<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id(DEFAULT_SURFACE))?;
        FrameRenderer::new(cfg.clear_color).clear(&ctx.gl);
        info!("hello_canvas ready");
        Ok(Self { ctx })
    }
}

pub struct HelloPoint1<D: GlDevice> {
    pub ctx: RenderingContext<D>,
    pub program: Program<D>,
}

impl<D: GlDevice> HelloPoint1<D> {
    pub fn run<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id(DEFAULT_SURFACE))?;
        let program = ProgramBuilder::new().build(&ctx.gl, &shader_source::HELLO_POINT1)?;
        FrameRenderer::new(cfg.clear_color).draw(&ctx.gl, Topology::Points, 1, &[]);
        Ok(Self { ctx, program })
    }
}

pub struct HelloPoint2<D: GlDevice> {
    pub ctx: RenderingContext<D>,
    pub program: Program<D>,
}

impl<D: GlDevice> HelloPoint2<D> {
    pub const POSITION: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const POINT_SIZE: f32 = 5.0;

    pub fn run<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id(DEFAULT_SURFACE))?;
        let gl = &ctx.gl;
        let program = ProgramBuilder::new().build(gl, &shader_source::HELLO_POINT2)?;
        set_constant(gl, &program, "a_Position", AttribConstant::F4(Self::POSITION))?;
        set_constant(gl, &program, "a_PointSize", AttribConstant::F1(Self::POINT_SIZE))?;
        FrameRenderer::new(cfg.clear_color).draw(gl, Topology::Points, 1, &[]);
        Ok(Self { ctx, program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, HeadlessDevice};
    use crate::error::GlError;
    use crate::surface::HeadlessHost;

    fn host() -> HeadlessHost {
        HeadlessHost::new().with_surface("webgl", 400, 400)
    }

    #[test]
    fn hello_canvas_only_clears() {
        let demo = HelloCanvas::run(&host(), &PrimerConfig::default()).unwrap();
        assert_eq!(
            demo.ctx.gl.calls(),
            vec![GlCall::ClearColor([0.0, 0.0, 0.0, 1.0]), GlCall::Clear]
        );
    }

    #[test]
    fn hello_canvas_needs_its_surface() {
        let host = HeadlessHost::new().with_surface("other", 10, 10);
        let err = HelloCanvas::<HeadlessDevice>::run(&host, &PrimerConfig::default())
            .err()
            .unwrap();
        assert_eq!(err, GlError::SurfaceNotFound("webgl".to_string()));
    }

    #[test]
    fn hello_point1_draws_one_point() {
        let demo = HelloPoint1::run(&host(), &PrimerConfig::default()).unwrap();
        assert_eq!(demo.ctx.gl.draws(), vec![(Topology::Points, 0, 1)]);
        assert_eq!(demo.ctx.gl.current_program(), Some(demo.program.raw().0));
    }

    #[test]
    fn hello_point2_sets_both_constants_before_drawing() {
        let demo = HelloPoint2::run(&host(), &PrimerConfig::default()).unwrap();
        let calls = demo.ctx.gl.calls();
        let constants: Vec<&GlCall> = calls
            .iter()
            .filter(|c| matches!(c, GlCall::VertexAttrib { .. }))
            .collect();
        assert_eq!(
            constants,
            vec![
                &GlCall::VertexAttrib {
                    location: 0,
                    value: AttribConstant::F4([0.0, 0.0, 0.0, 1.0])
                },
                &GlCall::VertexAttrib {
                    location: 1,
                    value: AttribConstant::F1(5.0)
                },
            ]
        );
        assert!(matches!(calls.last(), Some(GlCall::DrawArrays { count: 1, .. })));
    }

    #[test]
    fn surface_override_comes_from_config() {
        let cfg = PrimerConfig::from_toml_str("surface_id = \"main\"").unwrap();
        let host = HeadlessHost::new().with_surface("main", 300, 150);
        let demo = HelloCanvas::run(&host, &cfg).unwrap();
        assert_eq!(demo.ctx.surface.id, "main");
    }
}
