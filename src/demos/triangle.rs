// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Three vertices in a buffer, shifted by a uniform, drawn with a
//! topology picked from the page's mode selector.

use super::shader_source;
use crate::config::PrimerConfig;
use crate::device::{GlDevice, Topology, UniformValue};
use crate::error::GlResult;
use crate::geometry::{upload, AttributeBinding, GeometryBuffer};
use crate::program::{Program, ProgramBuilder, UniformSlot};
use crate::renderer::FrameRenderer;
use crate::surface::{resolve_gl, RenderingContext, SurfaceHost};
use log::{info, warn};

pub const TRIANGLE_VERTICES: [f32; 6] = [0.0, 0.5, -0.5, -0.5, 0.5, -0.5];

pub struct TranslatedTriangle<D: GlDevice> {
    pub ctx: RenderingContext<D>,
    pub program: Program<D>,
    pub binding: AttributeBinding<D>,
    translation: UniformSlot<D>,
    offset: [f32; 4],
    renderer: FrameRenderer,
    topology: Topology,
}

impl<D: GlDevice> TranslatedTriangle<D> {
    pub fn run<H: SurfaceHost<Device = D>>(host: &H, cfg: &PrimerConfig) -> GlResult<Self> {
        let ctx = resolve_gl(host, cfg.surface_id("webgl"))?;
        let gl = &ctx.gl;
        let program = ProgramBuilder::new().build(gl, &shader_source::TRANSLATED_TRIANGLE)?;
        let geometry = GeometryBuffer::new(TRIANGLE_VERTICES.to_vec(), 2)?;
        let binding = upload(gl, &program, "a_Position", &geometry)?;
        let translation = program.uniform(gl, "u_Translation")?;
        let [tx, ty, tz] = cfg.translation;
        let demo = Self {
            program,
            binding,
            translation,
            offset: [tx, ty, tz, 0.0],
            renderer: FrameRenderer::new(cfg.clear_color),
            topology: Topology::Points,
            ctx,
        };
        demo.render();
        info!("translated_triangle ready, {} vertices", demo.binding.vertex_count);
        Ok(demo)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn render(&self) {
        self.renderer.draw(
            &self.ctx.gl,
            self.topology,
            self.binding.vertex_count,
            &[(&self.translation, UniformValue::F4(self.offset))],
        );
    }

    /// Switches topology by its mode-select name and redraws. Unknown
    /// names draw POINTS.
    pub fn select_mode(&mut self, mode: &str) -> Topology {
        self.topology = mode.parse().unwrap_or_else(|e| {
            warn!("{}, falling back to POINTS", e);
            Topology::Points
        });
        self.render();
        self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::GlCall;
    use crate::surface::HeadlessHost;

    fn demo() -> TranslatedTriangle<crate::device::HeadlessDevice> {
        let host = HeadlessHost::new().with_surface("webgl", 400, 400);
        TranslatedTriangle::run(&host, &PrimerConfig::default()).unwrap()
    }

    #[test]
    fn initial_frame_is_three_points() {
        let demo = demo();
        let gl = &demo.ctx.gl;
        assert_eq!(gl.draws(), vec![(Topology::Points, 0, 3)]);
        assert!(gl.calls().contains(&GlCall::Uniform {
            name: "u_Translation".to_string(),
            value: UniformValue::F4([0.5, 0.5, 0.0, 0.0]),
        }));
        assert!(gl.calls().contains(&GlCall::BufferData {
            buffer: demo.binding.buffer.0,
            values: TRIANGLE_VERTICES.to_vec(),
        }));
    }

    #[test]
    fn mode_change_redraws_with_new_topology() {
        let mut demo = demo();
        demo.ctx.gl.take_calls();
        assert_eq!(demo.select_mode("TRIANGLE_FAN"), Topology::TriangleFan);
        assert_eq!(demo.ctx.gl.draws(), vec![(Topology::TriangleFan, 0, 3)]);
        assert_eq!(demo.ctx.gl.clear_count(), 1);
        // the buffer is uploaded once only
        assert!(!demo
            .ctx
            .gl
            .calls()
            .iter()
            .any(|c| matches!(c, GlCall::BufferData { .. })));
    }

    #[test]
    fn unknown_mode_falls_back_to_points() {
        let mut demo = demo();
        demo.select_mode("LINES");
        assert_eq!(demo.select_mode("QUADS"), Topology::Points);
        assert_eq!(demo.topology(), Topology::Points);
        assert_eq!(demo.ctx.gl.draws().last(), Some(&(Topology::Points, 0, 3)));
    }
}
