// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Frame Renderer
//!
//! A frame is always: clear to the background color, set uniforms, draw
//! `[0, vertex_count)`. Point histories are not batched; every redraw
//! replays the whole history from index 0, one single-vertex draw per
//! point.

use crate::color::GlColor;
use crate::device::{AttribConstant, GlDevice, Topology, UniformValue};
use crate::input::PointHistory;
use crate::program::{AttributeLocation, UniformSlot};
use log::debug;

pub struct FrameRenderer {
    clear_color: GlColor,
}

impl FrameRenderer {
    pub fn new(clear_color: GlColor) -> Self {
        Self { clear_color }
    }

    pub fn clear_color(&self) -> GlColor {
        self.clear_color
    }

    pub fn clear<D: GlDevice>(&self, gl: &D) {
        let c = self.clear_color;
        gl.clear_color(c.r, c.g, c.b, c.a);
        gl.clear();
    }

    pub fn draw<D: GlDevice>(
        &self,
        gl: &D,
        topology: Topology,
        vertex_count: usize,
        uniforms: &[(&UniformSlot<D>, UniformValue)],
    ) {
        self.clear(gl);
        for (slot, value) in uniforms {
            gl.uniform(&slot.location, *value);
        }
        gl.draw_arrays(topology, 0, vertex_count as i32);
    }

    /// One clear, then per point: position constant, optional color
    /// uniform, one POINTS draw of a single vertex
    pub fn replay<D: GlDevice>(
        &self,
        gl: &D,
        position: AttributeLocation,
        color: Option<&UniformSlot<D>>,
        history: &PointHistory,
    ) {
        self.clear(gl);
        for (p, rgba) in history.iter() {
            gl.vertex_attrib(position.0, AttribConstant::F3([p.x, p.y, 0.0]));
            if let Some(slot) = color {
                gl.uniform(&slot.location, UniformValue::F4(rgba.to_array()));
            }
            gl.draw_arrays(Topology::Points, 0, 1);
        }
        debug!("replayed {} points", history.len());
    }
}
