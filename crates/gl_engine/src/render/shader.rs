//! Shader program wrapper
//!
//! Loads a combined source asset holding both stages behind `#shader`
//! markers, compiles and links it, and exposes typed uniform setters with a
//! cached name-to-location lookup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

use glow::HasContext;
use thiserror::Error;

use crate::foundation::math::Mat4;
use crate::render::context::GlContext;

/// Shader loading, compilation and linking errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Source file could not be read
    #[error("failed to read shader source: {0}")]
    Io(#[from] std::io::Error),

    /// The source contains no recognizable `#shader` stage markers
    #[error("no stage markers found in shader source")]
    MissingStageMarkers,

    /// One stage is missing from the combined source
    #[error("shader source has no {0} stage")]
    MissingStage(&'static str),

    /// A `#shader` line names an unknown stage
    #[error("unknown shader stage {0:?}")]
    UnknownStage(String),

    /// Stage compilation failed; the payload is the driver's info log
    #[error("{stage} shader compilation failed: {log}")]
    Compile {
        /// Stage name ("vertex" or "fragment")
        stage: &'static str,
        /// Compiler diagnostic text
        log: String,
    },

    /// Program linking failed; the payload is the driver's info log
    #[error("shader program link failed: {0}")]
    Link(String),

    /// The driver refused to create a shader or program object
    #[error("failed to create shader object: {0}")]
    Creation(String),
}

/// Split vertex and fragment stage source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Vertex stage GLSL
    pub vertex: String,
    /// Fragment stage GLSL
    pub fragment: String,
}

impl ShaderSource {
    /// Split a combined source text on its `#shader` stage markers
    ///
    /// Lines after `#shader vertex` accumulate into the vertex stage, lines
    /// after `#shader fragment` into the fragment stage. Both stages must be
    /// present; text before the first marker is rejected along with
    /// marker-less sources.
    pub fn parse(source: &str) -> Result<Self, ShaderError> {
        enum Stage {
            None,
            Vertex,
            Fragment,
        }

        let mut stage = Stage::None;
        let mut vertex = String::new();
        let mut fragment = String::new();
        let mut saw_marker = false;

        for line in source.lines() {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix("#shader") {
                saw_marker = true;
                stage = match rest.trim() {
                    "vertex" => Stage::Vertex,
                    "fragment" => Stage::Fragment,
                    other => return Err(ShaderError::UnknownStage(other.to_string())),
                };
                continue;
            }
            match stage {
                Stage::None => {}
                Stage::Vertex => {
                    vertex.push_str(line);
                    vertex.push('\n');
                }
                Stage::Fragment => {
                    fragment.push_str(line);
                    fragment.push('\n');
                }
            }
        }

        if !saw_marker {
            return Err(ShaderError::MissingStageMarkers);
        }
        if vertex.trim().is_empty() {
            return Err(ShaderError::MissingStage("vertex"));
        }
        if fragment.trim().is_empty() {
            return Err(ShaderError::MissingStage("fragment"));
        }

        Ok(Self { vertex, fragment })
    }
}

/// Compiled and linked shader program
pub struct Shader {
    ctx: GlContext,
    program: glow::NativeProgram,
    // Lazily populated; None records a name the linker optimized out
    locations: RefCell<HashMap<String, Option<glow::NativeUniformLocation>>>,
}

impl Shader {
    /// Load, split, compile and link a combined source file
    pub fn from_file<P: AsRef<Path>>(ctx: &GlContext, path: P) -> Result<Self, ShaderError> {
        let path_ref = path.as_ref();
        log::debug!("Loading shader from: {:?}", path_ref);
        let source = std::fs::read_to_string(path_ref)?;
        Self::from_source(ctx, &ShaderSource::parse(&source)?)
    }

    /// Compile and link already-split stage source
    pub fn from_source(ctx: &GlContext, source: &ShaderSource) -> Result<Self, ShaderError> {
        let gl = ctx.raw();

        let vertex = compile_stage(gl, glow::VERTEX_SHADER, "vertex", &source.vertex)?;
        let fragment = compile_stage(gl, glow::FRAGMENT_SHADER, "fragment", &source.fragment);
        // Free the vertex stage before propagating a fragment failure
        let fragment = match fragment {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl.delete_shader(vertex) };
                return Err(e);
            }
        };

        let program = unsafe {
            let program = gl.create_program().map_err(ShaderError::Creation)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            // Stage objects are no longer needed once the program exists
            gl.detach_shader(program, vertex);
            gl.detach_shader(program, fragment);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);

            if !gl.get_program_link_status(program) {
                let link_log = gl.get_program_info_log(program);
                gl.delete_program(program);
                log::error!("shader link failed: {link_log}");
                return Err(ShaderError::Link(link_log));
            }
            program
        };

        Ok(Self {
            ctx: ctx.clone(),
            program,
            locations: RefCell::new(HashMap::new()),
        })
    }

    /// Make this program current
    pub fn bind(&self) {
        unsafe {
            self.ctx.raw().use_program(Some(self.program));
        }
    }

    /// Clear the current program
    pub fn unbind(&self) {
        unsafe {
            self.ctx.raw().use_program(None);
        }
    }

    /// Set a `mat4` uniform on the currently bound program
    ///
    /// The program must be bound. A name the linker removed is a silent
    /// no-op (logged once at debug level).
    pub fn set_uniform_mat4(&self, name: &str, value: &Mat4) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.ctx.raw().uniform_matrix_4_f32_slice(
                    Some(&location),
                    false,
                    value.as_slice(),
                );
            }
        }
    }

    /// Set an `int` (or sampler) uniform on the currently bound program
    pub fn set_uniform_1i(&self, name: &str, value: i32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.ctx.raw().uniform_1_i32(Some(&location), value);
            }
        }
    }

    /// Set a `vec4` uniform on the currently bound program
    pub fn set_uniform_4f(&self, name: &str, x: f32, y: f32, z: f32, w: f32) {
        if let Some(location) = self.location(name) {
            unsafe {
                self.ctx.raw().uniform_4_f32(Some(&location), x, y, z, w);
            }
        }
    }

    // Cached uniform location lookup; absence is cached too, so an
    // optimized-out uniform costs one GL query and one log line total.
    fn location(&self, name: &str) -> Option<glow::NativeUniformLocation> {
        let mut cache = self.locations.borrow_mut();
        if let Some(cached) = cache.get(name) {
            return cached.clone();
        }

        let location = unsafe { self.ctx.raw().get_uniform_location(self.program, name) };
        if location.is_none() {
            log::debug!("uniform {name:?} not found (unused or optimized out)");
        }
        cache.insert(name.to_string(), location.clone());
        location
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            self.ctx.raw().delete_program(self.program);
        }
    }
}

fn compile_stage(
    gl: &glow::Context,
    stage_type: u32,
    stage: &'static str,
    source: &str,
) -> Result<glow::NativeShader, ShaderError> {
    unsafe {
        let shader = gl.create_shader(stage_type).map_err(ShaderError::Creation)?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if !gl.get_shader_compile_status(shader) {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            log::error!("{stage} shader compilation failed: {log}");
            return Err(ShaderError::Compile { stage, log });
        }
        Ok(shader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = "\
#shader vertex
#version 330 core
layout(location = 0) in vec4 position;
void main() { gl_Position = position; }

#shader fragment
#version 330 core
out vec4 color;
void main() { color = vec4(1.0); }
";

    #[test]
    fn splits_both_stages() {
        let source = ShaderSource::parse(COMBINED).unwrap();
        assert!(source.vertex.contains("gl_Position"));
        assert!(!source.vertex.contains("out vec4 color"));
        assert!(source.fragment.contains("out vec4 color"));
        assert!(!source.fragment.contains("gl_Position"));
    }

    #[test]
    fn stage_order_does_not_matter() {
        let reversed = "\
#shader fragment
void main() {}
#shader vertex
void main() {}
";
        let source = ShaderSource::parse(reversed).unwrap();
        assert!(!source.vertex.trim().is_empty());
        assert!(!source.fragment.trim().is_empty());
    }

    #[test]
    fn rejects_marker_less_source() {
        let err = ShaderSource::parse("#version 330 core\nvoid main() {}\n").unwrap_err();
        assert!(matches!(err, ShaderError::MissingStageMarkers));
    }

    #[test]
    fn rejects_missing_fragment_stage() {
        let err = ShaderSource::parse("#shader vertex\nvoid main() {}\n").unwrap_err();
        assert!(matches!(err, ShaderError::MissingStage("fragment")));
    }

    #[test]
    fn rejects_unknown_stage_name() {
        let err = ShaderSource::parse("#shader geometry\nvoid main() {}\n").unwrap_err();
        match err {
            ShaderError::UnknownStage(name) => assert_eq!(name, "geometry"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn text_before_first_marker_is_ignored() {
        let with_preamble = format!("// comment header\n{COMBINED}");
        let source = ShaderSource::parse(&with_preamble).unwrap();
        assert!(!source.vertex.contains("comment header"));
    }
}
