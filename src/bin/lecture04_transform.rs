//! Lecture 4: transforming the textured quad.
//!
//! Space or the left mouse button toggles the transform, W/Up and S/Down
//! change the spin speed.

use std::process::ExitCode;

use gl_lectures::abs::*;
use glow::HasContext;
use lectures_core::{LectureConfig, geometry, transform::QuadTransform};
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton};

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

fn handle_event(transform: &mut QuadTransform, event: &Event) {
    match *event {
        Event::KeyDown {
            keycode: Some(keycode),
            repeat: false,
            ..
        } => match keycode {
            Keycode::Space => transform.toggle(),
            Keycode::W | Keycode::Up => transform.speed_up(),
            Keycode::S | Keycode::Down => transform.slow_down(),
            _ => return,
        },
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            ..
        } => transform.toggle(),
        _ => return,
    }

    log::debug!(
        "Transform {}, rotation speed {}",
        if transform.enabled { "on" } else { "off" },
        transform.rotation_speed
    );
}

fn run(config: &LectureConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&gl_lectures::title(4, "transformations"), &config.window)?;

    let shader = gl_lectures::load_program(&app.gl, config, "transform")?;
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

    let mut transform = QuadTransform::default();

    while app.pump_events(|event| handle_event(&mut transform, event)) {
        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        shader.use_program();
        shader.set_uniform("transform", transform.matrix(app.elapsed_seconds()));

        texture.bind(0);
        shader.set_uniform("ourTexture", 0_i32);
        quad.draw();

        app.swap();
    }

    Ok(())
}
