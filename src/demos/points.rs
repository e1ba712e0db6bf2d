// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Click-to-draw points.
//!
//! `clicked` draws every point red from a constant fragment shader;
//! `colored` feeds each point's quadrant color through `u_FragColor`.
//! Every press redraws the whole history.

use super::shader_source;
use crate::color::GlColor;
use crate::config::PrimerConfig;
use crate::device::GlDevice;
use crate::error::GlResult;
use crate::input::{InputBridge, NormalizedPoint, PressEvent};
use crate::program::{AttributeLocation, Program, ProgramBuilder, UniformSlot};
use crate::renderer::FrameRenderer;
use crate::surface::{resolve_gl, RenderingContext, SurfaceHost};
use log::info;

pub struct PointDemo<D: GlDevice> {
    pub ctx: RenderingContext<D>,
    pub program: Program<D>,
    position: AttributeLocation,
    color: Option<UniformSlot<D>>,
    bridge: InputBridge,
    renderer: FrameRenderer,
}

impl<D: GlDevice> PointDemo<D> {
    pub fn clicked<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id("webgl"))?;
        let program = ProgramBuilder::new().build(&ctx.gl, &shader_source::CLICKED_POINTS)?;
        let position = program.attribute(&ctx.gl, "a_Position")?;
        let bridge = InputBridge::new(ctx.surface.width, ctx.surface.height, GlColor::red());
        Ok(Self::ready(ctx, program, position, None, bridge, cfg))
    }

    pub fn colored<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id("webgl"))?;
        let program = ProgramBuilder::new().build(&ctx.gl, &shader_source::COLORED_POINTS)?;
        let position = program.attribute(&ctx.gl, "a_Position")?;
        let color = program.uniform(&ctx.gl, "u_FragColor")?;
        let bridge = InputBridge::with_palette(ctx.surface.width, ctx.surface.height, cfg.palette);
        Ok(Self::ready(ctx, program, position, Some(color), bridge, cfg))
    }

    // initial frame is an empty clear
    fn ready(
        ctx: RenderingContext<D>,
        program: Program<D>,
        position: AttributeLocation,
        color: Option<UniformSlot<D>>,
        bridge: InputBridge,
        cfg: &PrimerConfig,
    ) -> Self {
        let renderer = FrameRenderer::new(cfg.clear_color);
        renderer.clear(&ctx.gl);
        info!("point demo ready on {}", ctx.surface.id);
        Self {
            ctx,
            program,
            position,
            color,
            bridge,
            renderer,
        }
    }

    pub fn on_press(&mut self, event: &PressEvent) -> NormalizedPoint {
        let point = self.bridge.on_press(event);
        self.renderer.replay(
            &self.ctx.gl,
            self.position,
            self.color.as_ref(),
            self.bridge.history(),
        );
        point
    }

    pub fn bridge(&self) -> &InputBridge {
        &self.bridge
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, Topology, UniformValue};
    use crate::surface::HeadlessHost;

    fn host() -> HeadlessHost {
        HeadlessHost::new().with_surface("webgl", 400, 400)
    }

    #[test]
    fn every_press_replays_everything() {
        let mut demo = PointDemo::clicked(&host(), &PrimerConfig::default()).unwrap();
        let gl = demo.ctx.gl.clone();
        gl.take_calls();

        demo.on_press(&PressEvent::at(200.0, 200.0));
        demo.on_press(&PressEvent::at(300.0, 100.0));
        demo.on_press(&PressEvent::at(100.0, 300.0));
        assert_eq!(gl.clear_count(), 3);
        // 1 + 2 + 3
        assert_eq!(gl.draws(), vec![(Topology::Points, 0, 1); 6]);
        assert!(!gl.calls().iter().any(|c| matches!(c, GlCall::Uniform { .. })));
        assert_eq!(demo.bridge().history().colors(), &[GlColor::red(); 3]);
    }

    #[test]
    fn colored_points_pick_quadrant_colors() {
        let mut demo = PointDemo::colored(&host(), &PrimerConfig::default()).unwrap();
        let gl = demo.ctx.gl.clone();
        demo.on_press(&PressEvent::at(100.0, 300.0));
        gl.take_calls();
        let p = demo.on_press(&PressEvent::at(300.0, 100.0));
        assert_eq!(p, NormalizedPoint { x: 0.5, y: 0.5 });

        let colors: Vec<UniformValue> = gl
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                GlCall::Uniform { value, .. } => Some(value),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![
                UniformValue::F4(GlColor::green().to_array()),
                UniformValue::F4(GlColor::red().to_array()),
            ]
        );
    }

    #[test]
    fn setup_clears_once_and_draws_nothing() {
        let demo = PointDemo::colored(&host(), &PrimerConfig::default()).unwrap();
        assert_eq!(demo.ctx.gl.clear_count(), 1);
        assert!(demo.ctx.gl.draws().is_empty());
    }
}
