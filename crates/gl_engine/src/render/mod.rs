//! Rendering layer
//!
//! RAII wrappers around OpenGL objects plus the window, context and debug
//! overlay plumbing that the application loop composes.

pub mod buffer;
pub mod context;
pub mod layout;
pub mod overlay;
pub mod renderer;
pub mod shader;
pub mod texture;
pub mod vertex_array;
pub mod window;

pub use buffer::{IndexBuffer, VertexBuffer};
pub use context::GlContext;
pub use layout::{AttributeType, VertexAttribute, VertexBufferLayout};
pub use overlay::Overlay;
pub use renderer::Renderer;
pub use shader::{Shader, ShaderSource};
pub use texture::Texture;
pub use vertex_array::VertexArray;
pub use window::Window;

use thiserror::Error;

/// GPU resource creation errors
///
/// Creation is the only GL operation with a recoverable error path; once a
/// wrapper exists its GPU calls are checked by [`GlContext::check_errors`]
/// in debug builds only.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The driver refused to create the object
    #[error("failed to create GPU object: {0}")]
    Creation(String),
}
