//! 2D texture wrapper
//!
//! Uploads decoded RGBA8 image data to a new GPU texture and keeps only the
//! metadata host-side; the pixel buffer is freed with the `ImageData` it
//! came from.

use glow::HasContext;

use crate::assets::ImageData;
use crate::render::context::GlContext;
use crate::render::ResourceError;

/// 2D RGBA8 texture
pub struct Texture {
    ctx: GlContext,
    handle: glow::NativeTexture,
    width: u32,
    height: u32,
    channels: u8,
}

impl Texture {
    /// Create a texture from decoded image data
    ///
    /// Sets linear filtering and clamp-to-edge wrapping. The image is
    /// expected bottom-row first ([`ImageData::from_file`] flips on load).
    pub fn from_image(ctx: &GlContext, image: &ImageData) -> Result<Self, ResourceError> {
        let gl = ctx.raw();
        let handle = unsafe { gl.create_texture() }.map_err(ResourceError::Creation)?;

        unsafe {
            gl.bind_texture(glow::TEXTURE_2D, Some(handle));

            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                image.width as i32,
                image.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(image.data.as_slice()),
            );

            gl.bind_texture(glow::TEXTURE_2D, None);
        }
        ctx.check_errors("texture upload");

        Ok(Self {
            ctx: ctx.clone(),
            handle,
            width: image.width,
            height: image.height,
            channels: image.channels,
        })
    }

    /// Activate texture unit `slot` and bind this texture to it
    pub fn bind(&self, slot: u32) {
        let gl = self.ctx.raw();
        unsafe {
            gl.active_texture(glow::TEXTURE0 + slot);
            gl.bind_texture(glow::TEXTURE_2D, Some(self.handle));
        }
    }

    /// Clear the 2D texture binding on the active unit
    pub fn unbind(&self) {
        unsafe {
            self.ctx.raw().bind_texture(glow::TEXTURE_2D, None);
        }
    }

    /// Texture width in pixels
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture height in pixels
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel count of the source image
    #[must_use]
    pub fn channels(&self) -> u8 {
        self.channels
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_texture(self.handle);
        }
    }
}
