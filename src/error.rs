// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error taxonomy of the surface → program → geometry → draw pipeline.
//!
//! Every variant is terminal for the entry point that produced it: the
//! caller logs it and abandons the rest of its setup.

use crate::device::ShaderStage;
use crate::surface::ContextKind;

pub type GlResult<T> = Result<T, GlError>;

#[derive(Debug, Clone, PartialEq)]
pub enum GlError {
    /// no surface registered under this id
    SurfaceNotFound(String),
    /// surface exists but cannot hand out a context of this kind
    ContextUnavailable { id: String, kind: ContextKind },
    ShaderCompile { stage: ShaderStage, log: String },
    ProgramLink { log: String },
    AttributeNotFound(String),
    UniformNotFound(String),
    /// the device refused to allocate a shader, program or buffer object
    ResourceAllocation(String),
    InvalidGeometry(String),
    Config(String),
}

impl std::fmt::Display for GlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GlError::SurfaceNotFound(id) => {
                write!(f, "Failed to retrieve the surface '{}'", id)
            }
            GlError::ContextUnavailable { id, kind } => {
                write!(f, "Couldn't create {} context for surface '{}'", kind, id)
            }
            GlError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation error: {}", stage, log)
            }
            GlError::ProgramLink { log } => write!(f, "Program linking error: {}", log),
            GlError::AttributeNotFound(name) => {
                write!(f, "Failed to get the storage location of {}", name)
            }
            GlError::UniformNotFound(name) => {
                write!(f, "Failed to get the storage location of {}", name)
            }
            GlError::ResourceAllocation(msg) => write!(f, "Failed to allocate: {}", msg),
            GlError::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            GlError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for GlError {}
