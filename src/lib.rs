// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! pixel_glprimer is a set of WebGL primer demos rebuilt as a small typed
//! library. Every demo follows the same pipeline:
//!
//! ```text
//! SurfaceResolver ──► ProgramBuilder ──► GeometryUploader ──► FrameRenderer
//!        ▲                                                         ▲
//!        │ surface id                          InputBridge ────────┘
//! ```
//!
//! The pipeline talks to the GPU only through the [`device::GlDevice`]
//! trait. In the browser it is backed by `glow` over WebGL 1; natively
//! it is backed by an in-memory [`device::HeadlessDevice`] that records
//! every call, so demos can be run and tested without a browser.
//!
//! Build for the web with
//! `wasm-pack build --target web -- --no-default-features --features web`,
//! or run a demo headlessly with `cargo run -- colored_points --click 300,100`.

/// colors as RGBA floats
pub mod color;

/// toml configuration of the demos
pub mod config;

/// the demos themselves, generic over the host
pub mod demos;

/// device trait, glow backend and recording headless backend
pub mod device;

/// error type shared by the whole pipeline
pub mod error;

/// vertex buffers and attribute constants
pub mod geometry;

/// pointer press to normalized device coordinates
pub mod input;

/// log
pub mod log;

/// shader compile and link
pub mod program;

/// clear, uniforms, draw
pub mod renderer;

/// frame driver for animations
pub mod scheduler;

/// surface lookup and context acquisition
pub mod surface;

/// wasm exports
#[cfg(wasm)]
pub mod web;

pub use color::GlColor;
pub use config::PrimerConfig;
pub use error::{GlError, GlResult};
