//! Explicit OpenGL context handle
//!
//! OpenGL's "current binding" slots are process-wide mutable state. Instead
//! of reaching them through a hidden global, every wrapper and the renderer
//! hold a cheaply cloned [`GlContext`], so each GL call names the context it
//! mutates and drop glue can release handles without extra plumbing.

use std::rc::Rc;

use glow::HasContext;
use thiserror::Error;

/// Context loading errors
#[derive(Error, Debug)]
pub enum ContextError {
    /// The driver reported an OpenGL version below the 3.3 core baseline
    #[error("unsupported OpenGL version {0}.{1}, need at least 3.3")]
    UnsupportedVersion(u32, u32),
}

/// Shared handle to the loaded OpenGL function table
///
/// Cloning is cheap; all clones refer to the same context. The context is
/// single-threaded by construction (`Rc`), matching GLFW's one-context,
/// one-thread model.
#[derive(Clone)]
pub struct GlContext {
    gl: Rc<glow::Context>,
}

impl GlContext {
    /// Wrap a loaded `glow` context, validating the driver version
    pub fn new(gl: glow::Context) -> Result<Self, ContextError> {
        let version = gl.version();
        if (version.major, version.minor) < (3, 3) {
            return Err(ContextError::UnsupportedVersion(
                version.major,
                version.minor,
            ));
        }
        log::info!(
            "OpenGL {}.{} ({})",
            version.major,
            version.minor,
            version.vendor_info
        );
        Ok(Self { gl: Rc::new(gl) })
    }

    /// Access the raw `glow` context
    #[must_use]
    pub fn raw(&self) -> &glow::Context {
        &self.gl
    }

    /// Drain the GL error flag after `op`
    ///
    /// Debug builds log every pending error and halt via `debug_assert!`;
    /// release builds compile this to nothing. Per-call GL errors have no
    /// recoverable path in this layer.
    pub fn check_errors(&self, op: &str) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut clean = true;
        loop {
            let code = unsafe { self.gl.get_error() };
            if code == glow::NO_ERROR {
                break;
            }
            clean = false;
            log::error!("GL error {code:#06x} after {op}");
        }
        debug_assert!(clean, "GL error after {op}");
    }
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext").finish_non_exhaustive()
    }
}
