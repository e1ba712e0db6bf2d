// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Geometry Upload
//!
//! Two distinct ways of feeding a vertex attribute:
//!
//! - [`upload`]: pack a [`GeometryBuffer`] into a device buffer once and
//!   point the attribute at it (tightly packed floats, offset 0);
//! - [`set_constant`]: no buffer at all, the attribute takes one constant
//!   value for every vertex (`vertexAttrib*f`).
//!
//! Both resolve the attribute location first and stop with
//! `AttributeNotFound` before touching the device otherwise.

use crate::device::{AttribConstant, GlDevice};
use crate::error::{GlError, GlResult};
use crate::program::{AttributeLocation, Program};
use log::info;

/// Flat per-vertex floats, `vertex_size` components per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryBuffer {
    values: Vec<f32>,
    vertex_size: usize,
}

impl GeometryBuffer {
    pub fn new(values: Vec<f32>, vertex_size: usize) -> GlResult<Self> {
        if !(1..=4).contains(&vertex_size) {
            return Err(GlError::InvalidGeometry(format!(
                "vertex size {} not in 1..=4",
                vertex_size
            )));
        }
        if values.is_empty() || values.len() % vertex_size != 0 {
            return Err(GlError::InvalidGeometry(format!(
                "{} values do not pack into vertices of {}",
                values.len(),
                vertex_size
            )));
        }
        Ok(Self {
            values,
            vertex_size,
        })
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    pub fn vertex_count(&self) -> usize {
        self.values.len() / self.vertex_size
    }
}

/// An attribute fed from an uploaded buffer
#[derive(Debug)]
pub struct AttributeBinding<D: GlDevice> {
    pub location: AttributeLocation,
    pub buffer: D::Buffer,
    pub vertex_count: usize,
}

pub fn upload<D: GlDevice>(
    gl: &D,
    program: &Program<D>,
    name: &str,
    geometry: &GeometryBuffer,
) -> GlResult<AttributeBinding<D>> {
    let location = program.attribute(gl, name)?;
    let buffer = gl.create_buffer().map_err(GlError::ResourceAllocation)?;
    gl.array_buffer_data(buffer, geometry.values());
    gl.vertex_attrib_pointer(location.0, geometry.vertex_size() as i32, 0, 0);
    gl.enable_vertex_attrib_array(location.0);
    info!(
        "uploaded {} vertices to {} (location {})",
        geometry.vertex_count(),
        name,
        location.0
    );
    Ok(AttributeBinding {
        location,
        buffer,
        vertex_count: geometry.vertex_count(),
    })
}

pub fn set_constant<D: GlDevice>(
    gl: &D,
    program: &Program<D>,
    name: &str,
    value: AttribConstant,
) -> GlResult<AttributeLocation> {
    let location = program.attribute(gl, name)?;
    gl.vertex_attrib(location.0, value);
    Ok(location)
}
