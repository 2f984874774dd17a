//! GPU buffer wrappers for vertex and index data
//!
//! Each wrapper owns its buffer handle exclusively: data is uploaded
//! synchronously at construction and the handle is deleted exactly once on
//! drop. Binding mutates the process-wide binding slot, never the wrapper.

use glow::HasContext;

use crate::render::context::GlContext;
use crate::render::ResourceError;

/// Vertex buffer object
///
/// Not `Clone`: copying would duplicate ownership of one GPU resource.
pub struct VertexBuffer {
    ctx: GlContext,
    handle: glow::NativeBuffer,
}

impl VertexBuffer {
    /// Create a buffer and upload `vertices` as raw bytes
    pub fn new<V: bytemuck::Pod>(ctx: &GlContext, vertices: &[V]) -> Result<Self, ResourceError> {
        let gl = ctx.raw();
        let handle = unsafe { gl.create_buffer() }.map_err(ResourceError::Creation)?;
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(handle));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
        }
        ctx.check_errors("vertex buffer upload");

        Ok(Self {
            ctx: ctx.clone(),
            handle,
        })
    }

    /// Make this buffer current on the `ARRAY_BUFFER` slot
    pub fn bind(&self) {
        unsafe {
            self.ctx
                .raw()
                .bind_buffer(glow::ARRAY_BUFFER, Some(self.handle));
        }
    }

    /// Clear the `ARRAY_BUFFER` slot
    pub fn unbind(&self) {
        unsafe {
            self.ctx.raw().bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }
}

impl Drop for VertexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_buffer(self.handle);
        }
    }
}

/// Index buffer object holding `u32` indices
pub struct IndexBuffer {
    ctx: GlContext,
    handle: glow::NativeBuffer,
    count: u32,
}

impl IndexBuffer {
    /// Create a buffer and upload `indices`
    pub fn new(ctx: &GlContext, indices: &[u32]) -> Result<Self, ResourceError> {
        let gl = ctx.raw();
        let handle = unsafe { gl.create_buffer() }.map_err(ResourceError::Creation)?;
        unsafe {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(handle));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STATIC_DRAW,
            );
        }
        ctx.check_errors("index buffer upload");

        Ok(Self {
            ctx: ctx.clone(),
            handle,
            count: indices.len() as u32,
        })
    }

    /// Number of indices in the buffer
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Make this buffer current on the `ELEMENT_ARRAY_BUFFER` slot
    pub fn bind(&self) {
        unsafe {
            self.ctx
                .raw()
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.handle));
        }
    }

    /// Clear the `ELEMENT_ARRAY_BUFFER` slot
    pub fn unbind(&self) {
        unsafe {
            self.ctx.raw().bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }
    }
}

impl Drop for IndexBuffer {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_buffer(self.handle);
        }
    }
}
