//! # GL Engine
//!
//! A small OpenGL rendering layer built around RAII resource wrappers.
//!
//! ## Features
//!
//! - **Resource Wrappers**: Vertex/index buffers, vertex arrays, shaders and
//!   textures that own their GPU handle and release it on drop
//! - **Explicit Context**: every GL call goes through a [`render::GlContext`]
//!   handle instead of a hidden global
//! - **Window Management**: GLFW window creation and event plumbing
//! - **Debug Overlay**: Dear ImGui glue for immediate-mode widgets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gl_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut window = Window::new("Demo", 800, 800, true)?;
//!     let ctx = window.load_gl()?;
//!     let renderer = Renderer::new(&ctx);
//!     while !window.should_close() {
//!         renderer.clear();
//!         window.swap_buffers();
//!         window.poll_events();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod render;

mod error;

pub use error::EngineError;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        EngineError,
        assets::ImageData,
        config::AppConfig,
        foundation::math::{Mat4, Vec3},
        render::{
            GlContext, IndexBuffer, Overlay, Renderer, Shader, Texture, VertexArray,
            VertexBuffer, VertexBufferLayout, Window,
        },
    };
}
