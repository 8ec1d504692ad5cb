//! Lecture 6: Phong lighting with a directional light, four point lights and
//! a flashlight attached to the camera.

use std::process::ExitCode;

use gl_lectures::{abs::*, controls};
use glam::Vec3;
use glow::HasContext;
use lectures_core::{
    Camera, LectureConfig, LectureContext, UniformBlock, geometry, lighting::LightingRig,
    transform,
};

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
    let mut app = App::new(&gl_lectures::title(6, "lighting"), &config.window)?;
    app.capture_mouse(true);

    unsafe {
        app.gl.enable(glow::DEPTH_TEST);
    }

    let lighting_shader = gl_lectures::load_program(&app.gl, config, "lighting")?;
    let lamp_shader = gl_lectures::load_program(&app.gl, config, "lamp")?;

    let container = Mesh::new(
        &app.gl,
        &geometry::LIT_CUBE_VERTICES,
        &geometry::POSITION_NORMAL_UV,
        None,
    )?;
    let lamp = container.share(&geometry::POSITION_ONLY_OF_NORMAL_UV)?;

    let diffuse_map = Texture::from_path(
        &app.gl,
        config.image_path("crate.png"),
        TextureOptions::mipmapped_rgb(),
    )?;
    let specular_map = Texture::from_path(
        &app.gl,
        config.image_path("crate_specular.png"),
        TextureOptions::mipmapped_rgb(),
    )?;

    let mut rig = LightingRig::lecture_six();

    let mut samplers = UniformBlock::new();
    rig.material.write_samplers(&mut samplers);
    lighting_shader.use_program();
    lighting_shader.apply(&samplers);

    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
    config.camera.apply(&mut camera);
    let mut ctx = LectureContext::new(camera, config.window.width, config.window.height);

    let mut lights = UniformBlock::new();

    loop {
        ctx.begin_frame(app.elapsed_seconds());

        if !app.pump_events(|event| controls::handle_camera_event(&mut ctx, event)) {
            break;
        }
        ctx.apply_movement();

        unsafe {
            app.gl.clear_color(0.1, 0.1, 0.1, 1.0);
            app.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }

        let view = ctx.camera.view_matrix();
        let projection = ctx.camera.projection_matrix(app.aspect_ratio(), 0.1, 100.0);

        lighting_shader.use_program();
        rig.write_uniforms(&ctx.camera, &mut lights);
        lighting_shader.apply(&lights);
        lighting_shader.set_uniform("view", view);
        lighting_shader.set_uniform("projection", projection);

        diffuse_map.bind(rig.material.diffuse_unit as u32);
        specular_map.bind(rig.material.specular_unit as u32);

        for (i, position) in geometry::CUBE_POSITIONS.iter().enumerate() {
            lighting_shader.set_uniform("model", transform::container_model(*position, i));
            container.draw();
        }

        lamp_shader.use_program();
        lamp_shader.set_uniform("view", view);
        lamp_shader.set_uniform("projection", projection);

        let lamp_positions = std::iter::once(geometry::LAMP_POSITION)
            .chain(rig.points.iter().map(|light| light.position));
        for position in lamp_positions {
            lamp_shader.set_uniform("model", transform::lamp_model(position));
            lamp.draw();
        }

        app.swap();
    }

    Ok(())
}
