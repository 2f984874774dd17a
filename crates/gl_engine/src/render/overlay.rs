//! Dear ImGui debug overlay
//!
//! Owns the imgui context and its glow renderer and bridges GLFW input
//! events into imgui IO. Widget declarations stay with the application;
//! this module only brackets them with new-frame and render calls.

use std::time::Instant;

use thiserror::Error;

use crate::render::context::GlContext;
use crate::render::window::Window;

/// Overlay initialization and rendering errors
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The imgui glow renderer could not be created
    #[error("overlay renderer initialization failed: {0}")]
    Init(String),

    /// Submitting overlay draw data failed
    #[error("overlay rendering failed: {0}")]
    Render(String),
}

/// Immediate-mode debug overlay rendered on top of the scene each frame
pub struct Overlay {
    imgui: imgui::Context,
    renderer: imgui_glow_renderer::Renderer,
    textures: imgui::Textures<glow::Texture>,
    last_frame: Instant,
}

impl Overlay {
    /// Create the overlay for `window` on `ctx`
    pub fn new(ctx: &GlContext, window: &Window) -> Result<Self, OverlayError> {
        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None);
        imgui
            .fonts()
            .add_font(&[imgui::FontSource::DefaultFontData { config: None }]);

        let (width, height) = window.size();
        let io = imgui.io_mut();
        io.display_size = [width as f32, height as f32];

        let mut textures = imgui::Textures::default();
        let renderer =
            imgui_glow_renderer::Renderer::initialize(ctx.raw(), &mut imgui, &mut textures, false)
                .map_err(|e| OverlayError::Init(e.to_string()))?;

        Ok(Self {
            imgui,
            renderer,
            textures,
            last_frame: Instant::now(),
        })
    }

    /// Feed one window event into imgui IO
    ///
    /// Only the events the overlay widgets need: cursor position, mouse
    /// buttons and scroll.
    pub fn handle_event(&mut self, event: &glfw::WindowEvent) {
        let io = self.imgui.io_mut();
        match *event {
            glfw::WindowEvent::CursorPos(x, y) => {
                io.mouse_pos = [x as f32, y as f32];
            }
            glfw::WindowEvent::MouseButton(button, action, _) => {
                if let Some(index) = mouse_button_index(button) {
                    io.mouse_down[index] = action != glfw::Action::Release;
                }
            }
            glfw::WindowEvent::Scroll(x, y) => {
                io.mouse_wheel += y as f32;
                io.mouse_wheel_h += x as f32;
            }
            _ => {}
        }
    }

    /// Start a new overlay frame and hand out the widget builder
    pub fn frame(&mut self, window: &Window) -> &mut imgui::Ui {
        let (width, height) = window.size();
        let (fb_width, fb_height) = window.framebuffer_size();

        let now = Instant::now();
        let io = self.imgui.io_mut();
        io.update_delta_time(now - self.last_frame);
        self.last_frame = now;

        io.display_size = [width as f32, height as f32];
        if width > 0 && height > 0 {
            io.display_framebuffer_scale = [
                fb_width as f32 / width as f32,
                fb_height as f32 / height as f32,
            ];
        }

        self.imgui.new_frame()
    }

    /// Submit the overlay draw data, after scene drawing
    pub fn render(&mut self, ctx: &GlContext) -> Result<(), OverlayError> {
        let draw_data = self.imgui.render();
        self.renderer
            .render(ctx.raw(), &self.textures, draw_data)
            .map_err(|e| OverlayError::Render(e.to_string()))
    }
}

const fn mouse_button_index(button: glfw::MouseButton) -> Option<usize> {
    match button {
        glfw::MouseButton::Button1 => Some(0),
        glfw::MouseButton::Button2 => Some(1),
        glfw::MouseButton::Button3 => Some(2),
        glfw::MouseButton::Button4 => Some(3),
        glfw::MouseButton::Button5 => Some(4),
        _ => None,
    }
}
