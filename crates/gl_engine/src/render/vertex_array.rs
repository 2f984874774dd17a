//! Vertex array object wrapper
//!
//! Ties a vertex buffer to a layout by configuring one attribute pointer
//! per descriptor, in push order.

use glow::HasContext;

use crate::render::buffer::VertexBuffer;
use crate::render::context::GlContext;
use crate::render::layout::VertexBufferLayout;
use crate::render::ResourceError;

/// Vertex array object
pub struct VertexArray {
    ctx: GlContext,
    handle: glow::NativeVertexArray,
}

impl VertexArray {
    /// Create an empty vertex array
    pub fn new(ctx: &GlContext) -> Result<Self, ResourceError> {
        let handle = unsafe { ctx.raw().create_vertex_array() }.map_err(ResourceError::Creation)?;
        Ok(Self {
            ctx: ctx.clone(),
            handle,
        })
    }

    /// Attach `buffer` with `layout`, enabling one attribute slot per
    /// descriptor
    ///
    /// Attribute indices follow descriptor order; offsets and stride come
    /// from the layout. The layout must match the vertex data already
    /// uploaded to `buffer`.
    pub fn add_buffer(&self, buffer: &VertexBuffer, layout: &VertexBufferLayout) {
        self.bind();
        buffer.bind();

        let gl = self.ctx.raw();
        for (index, attribute) in layout.attributes().iter().enumerate() {
            unsafe {
                gl.enable_vertex_attrib_array(index as u32);
                gl.vertex_attrib_pointer_f32(
                    index as u32,
                    attribute.count as i32,
                    attribute.ty.gl_type(),
                    attribute.normalized,
                    layout.stride() as i32,
                    attribute.offset as i32,
                );
            }
        }
        self.ctx.check_errors("vertex attribute setup");
    }

    /// Make this vertex array current
    pub fn bind(&self) {
        unsafe {
            self.ctx.raw().bind_vertex_array(Some(self.handle));
        }
    }

    /// Clear the vertex array binding
    pub fn unbind(&self) {
        unsafe {
            self.ctx.raw().bind_vertex_array(None);
        }
    }
}

impl Drop for VertexArray {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_vertex_array(self.handle);
        }
    }
}
