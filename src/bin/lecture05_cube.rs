//! Lecture 5: a spinning textured cube seen through a free-fly camera.
//!
//! WASD or the arrow keys move, the mouse looks around and the scroll wheel
//! zooms.

use std::process::ExitCode;

use gl_lectures::{abs::*, controls};
use glam::Vec3;
use glow::HasContext;
use lectures_core::{Camera, LectureConfig, LectureContext, geometry, transform};

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
    let mut app = App::new(&gl_lectures::title(5, "camera"), &config.window)?;
    app.capture_mouse(true);

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
    }

    let shader = gl_lectures::load_program(&app.gl, config, "cube")?;
    let cube = Mesh::new(&app.gl, &geometry::CUBE_VERTICES, &geometry::POSITION_UV, None)?;
    let texture = Texture::from_path(
        &app.gl,
        config.image_path("checker.png"),
        TextureOptions::linear(),
    )?;

    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
    config.camera.apply(&mut camera);
    let mut ctx = LectureContext::new(camera, config.window.width, config.window.height);

    loop {
        let time = app.elapsed_seconds();
        ctx.begin_frame(time);

        if !app.pump_events(|event| controls::handle_camera_event(&mut ctx, event)) {
            break;
        }
        ctx.apply_movement();

        unsafe {
            app.gl.clear_color(0.0, 0.0, 0.0, 0.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        shader.use_program();

        texture.bind(0);
        shader.set_uniform("ourTexture", 0_i32);

        let projection = ctx.camera.projection_matrix(app.aspect_ratio(), 0.1, 1000.0);
        shader.set_uniform("view", ctx.camera.view_matrix());
        shader.set_uniform("projection", projection);
        shader.set_uniform("model", transform::spinning_cube(time));

        cube.draw();

        app.swap();
    }

    Ok(())
}
