// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! A single point whose size breathes with the frame counter.
//!
//! The animation state is a plain value: each frame computes the next
//! [`PulseState`] from the previous one and the frame number, then
//! renders it.

use super::shader_source;
use crate::color::GlColor;
use crate::config::PrimerConfig;
use crate::device::{AttribConstant, GlDevice, Topology, UniformValue};
use crate::error::GlResult;
use crate::geometry::set_constant;
use crate::program::{Program, ProgramBuilder, UniformSlot};
use crate::renderer::FrameRenderer;
use crate::scheduler::FrameTask;
use crate::surface::{resolve_gl, RenderingContext, SurfaceHost};
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseState {
    pub frame: u64,
    pub coords: [f32; 3],
    pub point_size: f32,
}

impl PulseState {
    pub fn new(coords: [f32; 3]) -> Self {
        Self {
            frame: 0,
            coords,
            point_size: 100.0,
        }
    }

    pub fn advance(self, frame: u64) -> Self {
        Self {
            frame,
            point_size: Self::size_at(frame),
            ..self
        }
    }

    /// oscillates between 10 and 30 with a period of 20π frames
    pub fn size_at(frame: u64) -> f32 {
        ((frame as f64 / 10.0).cos() * 10.0 + 20.0) as f32
    }
}

pub struct Pulse<D: GlDevice> {
    pub ctx: RenderingContext<D>,
    pub program: Program<D>,
    color: UniformSlot<D>,
    point_color: GlColor,
    renderer: FrameRenderer,
    state: PulseState,
}

impl<D: GlDevice> Pulse<D> {
    pub fn setup<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id("canvas"))?;
        let gl = &ctx.gl;
        gl.viewport(0, 0, ctx.surface.width as i32, ctx.surface.height as i32);
        let bg = cfg.pulse.clear_color;
        gl.clear_color(bg.r, bg.g, bg.b, bg.a);
        let program = ProgramBuilder::new().build(gl, &shader_source::PULSE)?;
        let color = program.uniform(gl, "color")?;
        info!("pulse ready on {}", ctx.surface.id);
        Ok(Self {
            program,
            color,
            point_color: cfg.pulse.point_color,
            renderer: FrameRenderer::new(bg),
            state: PulseState::new(cfg.pulse.coords),
            ctx,
        })
    }

    pub fn state(&self) -> PulseState {
        self.state
    }

    pub fn render(&self) -> GlResult<()> {
        let gl = &self.ctx.gl;
        set_constant(gl, &self.program, "coords", AttribConstant::F3(self.state.coords))?;
        set_constant(
            gl,
            &self.program,
            "pointSize",
            AttribConstant::F1(self.state.point_size),
        )?;
        self.renderer.draw(
            gl,
            Topology::Points,
            1,
            &[(&self.color, UniformValue::F4(self.point_color.to_array()))],
        );
        Ok(())
    }
}

impl<D: GlDevice> FrameTask for Pulse<D> {
    fn on_frame(&mut self, frame: u64) -> GlResult<()> {
        self.state = self.state.advance(frame);
        debug!("pulse frame {} size {:.2}", frame, self.state.point_size);
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, HeadlessDevice};
    use crate::scheduler::ManualScheduler;
    use crate::surface::HeadlessHost;

    fn pulse() -> Pulse<HeadlessDevice> {
        let host = HeadlessHost::new().with_surface("canvas", 300, 200);
        Pulse::setup(&host, &PrimerConfig::default()).unwrap()
    }

    #[test]
    fn size_follows_the_cosine() {
        assert_eq!(PulseState::size_at(0), 30.0);
        let half = (10.0 * std::f64::consts::PI).round() as u64;
        assert!((PulseState::size_at(half) - 10.0).abs() < 0.01);
        let s = PulseState::new([0.5, 0.5, 0.0]).advance(7);
        assert_eq!(s.frame, 7);
        assert_eq!(s.coords, [0.5, 0.5, 0.0]);
    }

    #[test]
    fn setup_sets_viewport_and_blue_background() {
        let p = pulse();
        let calls = p.ctx.gl.calls();
        assert_eq!(
            calls[0],
            GlCall::Viewport {
                x: 0,
                y: 0,
                width: 300,
                height: 200
            }
        );
        assert_eq!(calls[1], GlCall::ClearColor([0.0, 0.0, 1.0, 1.0]));
        assert!(p.ctx.gl.draws().is_empty());
    }

    #[test]
    fn each_frame_draws_one_magenta_point() {
        let mut p = pulse();
        p.ctx.gl.take_calls();
        ManualScheduler::new().run(&mut p, 3).unwrap();
        assert_eq!(p.state().frame, 2);
        assert_eq!(p.ctx.gl.draws(), vec![(Topology::Points, 0, 1); 3]);
        assert_eq!(p.ctx.gl.clear_count(), 3);

        let calls = p.ctx.gl.calls();
        assert!(calls.contains(&GlCall::VertexAttrib {
            location: 1,
            value: AttribConstant::F1(PulseState::size_at(2)),
        }));
        assert!(calls.contains(&GlCall::Uniform {
            name: "color".to_string(),
            value: UniformValue::F4([1.0, 0.0, 1.0, 1.0]),
        }));
    }
}
