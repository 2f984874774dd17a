//! Top-level error type aggregating the per-module failures
//!
//! Startup code propagates these up to `main` so the caller decides how to
//! log and which exit code to use.

use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::render::context::ContextError;
use crate::render::ResourceError;
use crate::render::overlay::OverlayError;
use crate::render::shader::ShaderError;
use crate::render::window::WindowError;

/// Any failure that can abort engine startup
#[derive(Error, Debug)]
pub enum EngineError {
    /// Window system initialization or window creation failed
    #[error("window error: {0}")]
    Window(#[from] WindowError),

    /// Loading the OpenGL function pointers failed
    #[error("context error: {0}")]
    Context(#[from] ContextError),

    /// GPU object creation failed
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Shader loading, compilation or linking failed
    #[error("shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Asset loading failed
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration loading failed
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Debug overlay initialization failed
    #[error("overlay error: {0}")]
    Overlay(#[from] OverlayError),
}
