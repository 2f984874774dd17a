//! Stateless rendering façade
//!
//! Owns no GPU objects beyond its context handle: callers pass the vertex
//! array, index buffer and shader for each draw. No batching, sorting or
//! culling.

use glow::HasContext;

use crate::render::buffer::IndexBuffer;
use crate::render::context::GlContext;
use crate::render::shader::Shader;
use crate::render::vertex_array::VertexArray;

/// Issues clears and indexed draw calls
pub struct Renderer {
    ctx: GlContext,
}

impl Renderer {
    /// Create the renderer and apply one-time pipeline state
    ///
    /// Enables standard alpha blending, which the quad shader relies on.
    #[must_use]
    pub fn new(ctx: &GlContext) -> Self {
        let gl = ctx.raw();
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }
        ctx.check_errors("renderer setup");

        Self { ctx: ctx.clone() }
    }

    /// Set the color the next [`Self::clear`] writes
    pub fn set_clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe {
            self.ctx.raw().clear_color(r, g, b, a);
        }
    }

    /// Clear the color buffer
    pub fn clear(&self) {
        unsafe {
            self.ctx.raw().clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Update the viewport after a framebuffer resize
    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe {
            self.ctx.raw().viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Bind the three objects and issue one indexed draw over the index
    /// buffer's full element count
    pub fn draw(&self, vertex_array: &VertexArray, index_buffer: &IndexBuffer, shader: &Shader) {
        shader.bind();
        vertex_array.bind();
        index_buffer.bind();

        unsafe {
            self.ctx.raw().draw_elements(
                glow::TRIANGLES,
                index_buffer.count() as i32,
                glow::UNSIGNED_INT,
                0,
            );
        }
        self.ctx.check_errors("draw call");
    }
}
