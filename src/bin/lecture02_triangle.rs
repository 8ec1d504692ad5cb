//! Lecture 2: a triangle with per-vertex colors.

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
    let mut app = App::new(&gl_lectures::title(2, "triangle"), &config.window)?;

    let shader = gl_lectures::load_program(&app.gl, config, "triangle")?;
    let triangle = Mesh::new(
        &app.gl,
        &geometry::TRIANGLE_VERTICES,
        &geometry::POSITION_COLOR,
        None,
    )?;

    while app.pump_events(|_| {}) {
        unsafe {
            app.gl.clear_color(1.0, 1.0, 1.0, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        shader.use_program();
        triangle.draw();

        app.swap();
    }

    Ok(())
}
