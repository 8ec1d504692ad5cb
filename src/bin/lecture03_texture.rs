//! Lecture 3: a textured quad drawn from an index buffer.

use std::process::ExitCode;

use gl_lectures::abs::*;
use glow::HasContext;
use lectures_core::{LectureConfig, geometry};

fn main() -> ExitCode {
    let config = match gl_lectures::bootstrap() {
        Ok(config) => config,
        Err(code) => return code,
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &LectureConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&gl_lectures::title(3, "textures"), &config.window)?;

    let shader = gl_lectures::load_program(&app.gl, config, "texture")?;
    let quad = Mesh::new(
        &app.gl,
        &geometry::QUAD_VERTICES,
        &geometry::POSITION_COLOR_UV,
        Some(&geometry::QUAD_INDICES[..]),
    )?;
    let texture = Texture::from_path(
        &app.gl,
        config.image_path("checker.png"),
        TextureOptions::linear(),
    )?;

    while app.pump_events(|_| {}) {
        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        shader.use_program();
        texture.bind(0);
        shader.set_uniform("ourTexture", 0_i32);
        quad.draw();

        app.swap();
    }

    Ok(())
}
