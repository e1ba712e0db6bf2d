// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Graphics Device
//!
//! `GlDevice` is the whole "wire protocol" the demos speak to the GPU:
//! clear, compile, link, bind, upload and draw. It mirrors the subset of
//! `glow::HasContext` that a WebGL 1 primer touches, with associated
//! handle types so both a real `glow::Context` and the in-memory
//! [`HeadlessDevice`](headless::HeadlessDevice) can stand behind it.
//!
//! All methods take `&self`. A device is owned by the single thread that
//! drives rendering and is never shared across threads.

use std::fmt;
use std::str::FromStr;

pub mod gl_context;
pub mod headless;

pub use headless::{GlCall, HeadlessDevice};

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn to_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

/// Primitive assembly mode for `draw_arrays`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl Topology {
    pub const ALL: [Topology; 7] = [
        Topology::Points,
        Topology::Lines,
        Topology::LineStrip,
        Topology::LineLoop,
        Topology::Triangles,
        Topology::TriangleStrip,
        Topology::TriangleFan,
    ];

    pub fn to_gl(self) -> u32 {
        match self {
            Topology::Points => glow::POINTS,
            Topology::Lines => glow::LINES,
            Topology::LineStrip => glow::LINE_STRIP,
            Topology::LineLoop => glow::LINE_LOOP,
            Topology::Triangles => glow::TRIANGLES,
            Topology::TriangleStrip => glow::TRIANGLE_STRIP,
            Topology::TriangleFan => glow::TRIANGLE_FAN,
        }
    }

    /// Name used by the GL enum and the page's mode selector
    pub fn name(self) -> &'static str {
        match self {
            Topology::Points => "POINTS",
            Topology::Lines => "LINES",
            Topology::LineStrip => "LINE_STRIP",
            Topology::LineLoop => "LINE_LOOP",
            Topology::Triangles => "TRIANGLES",
            Topology::TriangleStrip => "TRIANGLE_STRIP",
            Topology::TriangleFan => "TRIANGLE_FAN",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Topology::ALL
            .iter()
            .copied()
            .find(|t| t.name() == upper)
            .ok_or_else(|| format!("unknown topology '{}'", s))
    }
}

/// Constant value fed to an attribute that has no buffer behind it
/// (`vertexAttrib1f` .. `vertexAttrib4f`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttribConstant {
    F1(f32),
    F2([f32; 2]),
    F3([f32; 3]),
    F4([f32; 4]),
}

/// Per-draw uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    F1(f32),
    F2([f32; 2]),
    F4([f32; 4]),
}

pub trait GlDevice {
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type UniformLocation: Clone + fmt::Debug;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// clears the color buffer only
    fn clear(&self);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);

    /// WebGL semantics: -1 when the program has no such attribute
    fn attrib_location(&self, program: Self::Program, name: &str) -> i32;
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    /// binds `buffer` to ARRAY_BUFFER and uploads `data` with STATIC_DRAW
    fn array_buffer_data(&self, buffer: Self::Buffer, data: &[f32]);
    /// float components, not normalized
    fn vertex_attrib_pointer(&self, location: u32, size: i32, stride: i32, offset: i32);
    fn enable_vertex_attrib_array(&self, location: u32);
    fn vertex_attrib(&self, location: u32, value: AttribConstant);

    fn uniform(&self, location: &Self::UniformLocation, value: UniformValue);
    fn draw_arrays(&self, topology: Topology, first: i32, count: i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_parses_mode_select_names() {
        assert_eq!("LINE_LOOP".parse::<Topology>(), Ok(Topology::LineLoop));
        assert_eq!("triangle_fan".parse::<Topology>(), Ok(Topology::TriangleFan));
        assert!("QUADS".parse::<Topology>().is_err());
        for t in Topology::ALL {
            assert_eq!(t.name().parse::<Topology>(), Ok(t));
        }
    }

    #[test]
    fn topology_maps_to_gl_enums() {
        assert_eq!(Topology::Points.to_gl(), 0x0000);
        assert_eq!(Topology::TriangleFan.to_gl(), 0x0006);
    }
}
