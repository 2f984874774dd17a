//! Window management using GLFW
//!
//! Provides cross-platform window creation, event plumbing and buffer
//! swapping for an OpenGL 3.3 core profile context.

use glfw::Context as _;
use thiserror::Error;

use crate::render::context::{ContextError, GlContext};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed")]
    InitializationFailed,

    #[error("Window creation failed")]
    CreationFailed,
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper with proper resource management
///
/// Dropping the window tears down the GLFW state; GPU wrappers must be
/// dropped first, while the context is still current.
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create a window with a current OpenGL 3.3 core context
    pub fn new(title: &str, width: u32, height: u32, vsync: bool) -> WindowResult<Self> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        glfw.window_hint(glfw::WindowHint::Resizable(true));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();

        // Event polling for input, resize and the debug overlay
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_mouse_button_polling(true);
        window.set_scroll_polling(true);

        glfw.set_swap_interval(if vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Load the OpenGL function pointers for the current context
    ///
    /// Must be called once, after construction (which makes the context
    /// current) and before any GPU wrapper is created.
    pub fn load_gl(&mut self) -> Result<GlContext, ContextError> {
        let gl = unsafe {
            glow::Context::from_loader_function(|s| self.window.get_proc_address(s) as *const _)
        };
        GlContext::new(gl)
    }

    /// Whether the window has been flagged to close
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Flag the window to close (or clear the flag)
    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events gathered by the last [`Self::poll_events`]
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Swap front and back buffers (blocks for vsync when enabled)
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Client area size in screen coordinates
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_size();
        (width as u32, height as u32)
    }

    /// Drawable size in pixels (differs from [`Self::size`] on hidpi displays)
    #[must_use]
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width as u32, height as u32)
    }
}
