// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! `GlDevice` over a real `glow::Context` (WebGL on wasm32, desktop GL
//! when the caller builds the context from a loader).

use super::{AttribConstant, GlDevice, ShaderStage, Topology, UniformValue};
use glow::HasContext;

impl GlDevice for glow::Context {
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type UniformLocation = <glow::Context as HasContext>::UniformLocation;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self) {
        unsafe { HasContext::clear(self, glow::COLOR_BUFFER_BIT) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.to_gl()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> i32 {
        unsafe { self.get_attrib_location(program, name) }
            .map(|loc| loc as i32)
            .unwrap_or(-1)
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn array_buffer_data(&self, buffer: Self::Buffer, data: &[f32]) {
        unsafe {
            self.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STATIC_DRAW,
            );
        }
    }

    fn vertex_attrib_pointer(&self, location: u32, size: i32, stride: i32, offset: i32) {
        unsafe { self.vertex_attrib_pointer_f32(location, size, glow::FLOAT, false, stride, offset) }
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, location) }
    }

    fn vertex_attrib(&self, location: u32, value: AttribConstant) {
        unsafe {
            match value {
                AttribConstant::F1(x) => self.vertex_attrib_1_f32(location, x),
                AttribConstant::F2([x, y]) => self.vertex_attrib_2_f32(location, x, y),
                AttribConstant::F3([x, y, z]) => self.vertex_attrib_3_f32(location, x, y, z),
                AttribConstant::F4([x, y, z, w]) => {
                    self.vertex_attrib_4_f32(location, x, y, z, w)
                }
            }
        }
    }

    fn uniform(&self, location: &Self::UniformLocation, value: UniformValue) {
        unsafe {
            match value {
                UniformValue::F1(x) => self.uniform_1_f32(Some(location), x),
                UniformValue::F2([x, y]) => self.uniform_2_f32(Some(location), x, y),
                UniformValue::F4([x, y, z, w]) => self.uniform_4_f32(Some(location), x, y, z, w),
            }
        }
    }

    fn draw_arrays(&self, topology: Topology, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, topology.to_gl(), first, count) }
    }
}
