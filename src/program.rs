// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Shader Program
//!
//! `ProgramBuilder::build` is the only way to obtain a [`Program`]:
//! vertex compile, fragment compile and link are each checked
//! explicitly, so a `Program` value always refers to a linked program
//! that has been made current.
//!
//! ```text
//!  vertex src ──► create ► source ► compile ► status? ─┐
//!                                                       ├─► attach ► link ► status? ► use
//!  fragment src ► create ► source ► compile ► status? ─┘
//! ```

use crate::device::{GlDevice, ShaderStage};
use crate::error::{GlError, GlResult};
use log::{error, info};

/// Vertex / fragment source pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSource<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl<'a> ShaderSource<'a> {
    pub const fn new(vertex: &'a str, fragment: &'a str) -> Self {
        Self { vertex, fragment }
    }
}

/// Resolved, non-negative attribute location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeLocation(pub u32);

/// Resolved uniform, name kept for diagnostics
#[derive(Debug)]
pub struct UniformSlot<D: GlDevice> {
    pub name: String,
    pub location: D::UniformLocation,
}

impl<D: GlDevice> Clone for UniformSlot<D> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
}

/// A linked program. Copyable handle; the device owns the GL object.
#[derive(Debug)]
pub struct Program<D: GlDevice> {
    raw: D::Program,
}

impl<D: GlDevice> Clone for Program<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: GlDevice> Copy for Program<D> {}

impl<D: GlDevice> Program<D> {
    pub fn raw(&self) -> D::Program {
        self.raw
    }

    pub fn bind(&self, gl: &D) {
        gl.use_program(Some(self.raw));
    }

    pub fn attribute(&self, gl: &D, name: &str) -> GlResult<AttributeLocation> {
        let loc = gl.attrib_location(self.raw, name);
        if loc < 0 {
            return Err(GlError::AttributeNotFound(name.to_string()));
        }
        Ok(AttributeLocation(loc as u32))
    }

    pub fn uniform(&self, gl: &D, name: &str) -> GlResult<UniformSlot<D>> {
        let location = gl
            .uniform_location(self.raw, name)
            .ok_or_else(|| GlError::UniformNotFound(name.to_string()))?;
        Ok(UniformSlot {
            name: name.to_string(),
            location,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProgramBuilder {
    version: Option<String>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a `#version` line to both stages, e.g. `#version 300 es`
    pub fn with_version(mut self, ver: &str) -> Self {
        self.version = Some(ver.to_string());
        self
    }

    fn full_source(&self, src: &str) -> String {
        match &self.version {
            Some(ver) => format!("{}\n{}", ver, src),
            None => src.to_string(),
        }
    }

    fn compile<D: GlDevice>(&self, gl: &D, stage: ShaderStage, src: &str) -> GlResult<D::Shader> {
        let shader = gl
            .create_shader(stage)
            .map_err(GlError::ResourceAllocation)?;
        gl.shader_source(shader, &self.full_source(src));
        gl.compile_shader(shader);
        if !gl.shader_compile_status(shader) {
            let log = gl.shader_info_log(shader);
            error!("{} Shader Compilation Error: {}", stage, log);
            gl.delete_shader(shader);
            return Err(GlError::ShaderCompile { stage, log });
        }
        Ok(shader)
    }

    pub fn build<D: GlDevice>(&self, gl: &D, source: &ShaderSource<'_>) -> GlResult<Program<D>> {
        let vertex_shader = self.compile(gl, ShaderStage::Vertex, source.vertex)?;
        let fragment_shader = match self.compile(gl, ShaderStage::Fragment, source.fragment) {
            Ok(s) => s,
            Err(e) => {
                gl.delete_shader(vertex_shader);
                return Err(e);
            }
        };

        let program = match gl.create_program() {
            Ok(p) => p,
            Err(msg) => {
                gl.delete_shader(vertex_shader);
                gl.delete_shader(fragment_shader);
                return Err(GlError::ResourceAllocation(msg));
            }
        };
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);
        let linked = gl.program_link_status(program);
        let log = if linked {
            String::new()
        } else {
            gl.program_info_log(program)
        };

        gl.detach_shader(program, vertex_shader);
        gl.detach_shader(program, fragment_shader);
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        if !linked {
            error!("Program Linking Error: {}", log);
            gl.delete_program(program);
            return Err(GlError::ProgramLink { log });
        }

        gl.use_program(Some(program));
        info!("shader program linked: {:?}", program);
        Ok(Program { raw: program })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{GlCall, HeadlessDevice};

    const VS: &str = r#"
        attribute vec4 a_Position;
        void main() {
            gl_Position = a_Position;
            gl_PointSize = 10.0;
        }
    "#;

    const FS: &str = r#"
        precision mediump float;
        uniform vec4 u_FragColor;
        void main() {
            gl_FragColor = u_FragColor;
        }
    "#;

    #[test]
    fn build_links_and_binds() {
        let gl = HeadlessDevice::new();
        let program = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new(VS, FS))
            .unwrap();
        assert_eq!(gl.current_program(), Some(program.raw().0));
        assert_eq!(
            gl.calls().last(),
            Some(&GlCall::UseProgram {
                program: Some(program.raw().0)
            })
        );
        assert_eq!(program.attribute(&gl, "a_Position").unwrap(), AttributeLocation(0));
        assert_eq!(program.uniform(&gl, "u_FragColor").unwrap().name, "u_FragColor");
    }

    #[test]
    fn invalid_fragment_source_never_yields_a_program() {
        let gl = HeadlessDevice::new();
        let bad = "void main() { gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0; }";
        let err = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new(VS, bad))
            .unwrap_err();
        assert!(matches!(
            err,
            GlError::ShaderCompile {
                stage: ShaderStage::Fragment,
                ..
            }
        ));
        let calls = gl.calls();
        assert!(!calls.iter().any(|c| matches!(c, GlCall::CreateProgram { .. })));
        assert!(!calls.iter().any(|c| matches!(c, GlCall::UseProgram { .. })));
        assert_eq!(gl.current_program(), None);
    }

    #[test]
    fn invalid_vertex_source_stops_before_fragment() {
        let gl = HeadlessDevice::new();
        let err = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new("void main( {", FS))
            .unwrap_err();
        assert!(matches!(
            err,
            GlError::ShaderCompile {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
        let created = gl
            .calls()
            .into_iter()
            .filter(|c| matches!(c, GlCall::CreateShader { .. }))
            .count();
        assert_eq!(created, 1);
    }

    #[test]
    fn link_failure_is_reported_and_program_deleted() {
        let gl = HeadlessDevice::new();
        let fs = "precision mediump float; varying vec4 v_Color; void main() { gl_FragColor = v_Color; }";
        let err = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new(VS, fs))
            .unwrap_err();
        match err {
            GlError::ProgramLink { log } => assert!(log.contains("v_Color")),
            other => panic!("unexpected error {:?}", other),
        }
        let calls = gl.calls();
        assert!(calls.iter().any(|c| matches!(c, GlCall::DeleteProgram { .. })));
        assert!(!calls.iter().any(|c| matches!(c, GlCall::UseProgram { .. })));
    }

    #[test]
    fn missing_attribute_and_uniform_are_errors() {
        let gl = HeadlessDevice::new();
        let program = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new(VS, FS))
            .unwrap();
        assert_eq!(
            program.attribute(&gl, "a_PointSize"),
            Err(GlError::AttributeNotFound("a_PointSize".to_string()))
        );
        assert!(matches!(
            program.uniform(&gl, "u_Translation"),
            Err(GlError::UniformNotFound(_))
        ));
    }

    #[test]
    fn allocation_failure_is_surfaced() {
        let gl = HeadlessDevice::new();
        gl.set_fail_allocations(true);
        let err = ProgramBuilder::new()
            .build(&gl, &ShaderSource::new(VS, FS))
            .unwrap_err();
        assert!(matches!(err, GlError::ResourceAllocation(_)));
    }

    #[test]
    fn version_header_is_prepended() {
        let gl = HeadlessDevice::new();
        let vs = "layout(location = 0) in vec2 aPos; void main() { gl_Position = vec4(aPos, 0.0, 1.0); }";
        let fs = "precision highp float; out vec4 color; void main() { color = vec4(1.0); }";
        let program = ProgramBuilder::new()
            .with_version("#version 300 es")
            .build(&gl, &ShaderSource::new(vs, fs))
            .unwrap();
        assert_eq!(program.attribute(&gl, "aPos").unwrap(), AttributeLocation(0));
    }
}
