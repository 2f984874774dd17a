//! Textured quad demo
//!
//! Opens a window, uploads one quad, and draws it twice with
//! slider-controlled translations from a Dear ImGui overlay.

use gl_engine::foundation::{logging, math};
use gl_engine::prelude::*;

/// Quad vertices: {position.xy, uv.xy}
const QUAD_VERTICES: [f32; 16] = [
    0.5, 0.5, 1.0, 1.0, // top right
    0.5, -0.5, 1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0, 0.0, // bottom left
    -0.5, 0.5, 0.0, 1.0, // top left
];

/// Two triangles covering the quad
const QUAD_INDICES: [u32; 6] = [0, 3, 1, 1, 3, 2];

struct QuadApp {
    // GL wrappers first: they must drop while the context is still alive,
    // and fields drop in declaration order.
    shader: Shader,
    texture: Texture,
    vertex_array: VertexArray,
    vertex_buffer: VertexBuffer,
    index_buffer: IndexBuffer,
    renderer: Renderer,
    overlay: Overlay,
    ctx: GlContext,
    window: Window,
    translation_a: [f32; 3],
    translation_b: [f32; 3],
}

impl QuadApp {
    fn new(config: &AppConfig) -> Result<Self, EngineError> {
        log::info!("Creating window...");
        let mut window = Window::new(
            &config.window.title,
            config.window.width,
            config.window.height,
            config.window.vsync,
        )?;

        log::info!("Loading OpenGL...");
        let ctx = window.load_gl()?;
        let renderer = Renderer::new(&ctx);

        log::info!("Uploading quad resources...");
        let vertex_buffer = VertexBuffer::new(&ctx, &QUAD_VERTICES)?;
        let index_buffer = IndexBuffer::new(&ctx, &QUAD_INDICES)?;

        let mut layout = VertexBufferLayout::new();
        layout.push_f32(2).push_f32(2);

        let vertex_array = VertexArray::new(&ctx)?;
        vertex_array.add_buffer(&vertex_buffer, &layout);

        let shader = Shader::from_file(&ctx, &config.shader_path)?;
        let texture = Texture::from_image(&ctx, &load_texture_image(&config.texture_path))?;

        // The quad samples texture unit 0 for the whole run
        texture.bind(0);
        shader.bind();
        shader.set_uniform_1i("u_Texture", 0);

        let overlay = Overlay::new(&ctx, &window)?;

        Ok(Self {
            shader,
            texture,
            vertex_array,
            vertex_buffer,
            index_buffer,
            renderer,
            overlay,
            ctx,
            window,
            translation_a: [0.0; 3],
            translation_b: [0.0; 3],
        })
    }

    fn run(&mut self) {
        log::info!("Entering render loop");
        while !self.window.should_close() {
            self.process_input();
            self.render_frame();
        }
    }

    fn process_input(&mut self) {
        self.window.poll_events();
        let events: Vec<glfw::WindowEvent> =
            self.window.flush_events().map(|(_, event)| event).collect();

        for event in events {
            match event {
                glfw::WindowEvent::Key(glfw::Key::Escape, _, glfw::Action::Press, _) => {
                    self.window.set_should_close(true);
                }
                glfw::WindowEvent::FramebufferSize(width, height) => {
                    self.renderer.set_viewport(width as u32, height as u32);
                }
                _ => {}
            }
            self.overlay.handle_event(&event);
        }
    }

    fn render_frame(&mut self) {
        self.renderer.clear();

        let ui: &mut imgui::Ui = self.overlay.frame(&self.window);
        ui.slider_config("translationA", -1.0, 1.0)
            .build_array(&mut self.translation_a);
        ui.slider_config("translationB", -1.0, 1.0)
            .build_array(&mut self.translation_b);
        let framerate = ui.io().framerate;
        ui.text(format!(
            "Application average {:.3} ms/frame ({:.1} FPS)",
            1000.0 / framerate,
            framerate
        ));

        let proj = math::ortho(-1.0, 1.0, -1.0, 1.0, -1.0, 1.0);
        let view = Mat4::identity();

        for translation in [self.translation_a, self.translation_b] {
            let model = math::translation(Vec3::new(
                translation[0],
                translation[1],
                translation[2],
            ));
            let mvp = math::mvp(&proj, &view, &model);
            self.shader.bind();
            self.shader.set_uniform_mat4("projection", &mvp);
            self.renderer
                .draw(&self.vertex_array, &self.index_buffer, &self.shader);
        }

        if let Err(e) = self.overlay.render(&self.ctx) {
            log::warn!("overlay rendering failed: {e}");
        }

        self.window.swap_buffers();
    }

    fn shutdown(&mut self) {
        log::info!("Shutting down");
        // Defensive unbinds before the wrappers drop and the context goes away
        self.vertex_array.unbind();
        self.vertex_buffer.unbind();
        self.index_buffer.unbind();
        self.texture.unbind();
        self.shader.unbind();
    }
}

/// Load the quad texture, falling back to a generated checkerboard when the
/// image file is absent so the demo runs without binary assets
fn load_texture_image(path: &str) -> ImageData {
    match ImageData::from_file(path) {
        Ok(image) => image,
        Err(e) => {
            log::warn!("{e}; using generated checkerboard");
            ImageData::checkerboard(
                256,
                256,
                32,
                [235, 235, 235, 255],
                [40, 40, 40, 255],
            )
        }
    }
}

fn run() -> Result<(), EngineError> {
    let config = AppConfig::load_or_default("quad_app.toml")?;
    let mut app = QuadApp::new(&config)?;
    app.run();
    app.shutdown();
    Ok(())
}

fn main() {
    logging::init();
    if let Err(e) = run() {
        log::error!("fatal: {e}");
        std::process::exit(1);
    }
}
