//! OpenGL lecture programs.
//!
//! The library half holds what every lecture binary shares: the GPU wrappers
//! in [`abs`], configuration lookup, logging and input mapping. The math and
//! scene data live in [`lectures_core`].

pub mod abs;
pub mod controls;
pub mod logging;
pub mod settings;

pub use lectures_core;

use std::{process::ExitCode, sync::Arc};

use lectures_core::{LectureConfig, ShaderError};

use crate::abs::ShaderProgram;

/// Loads the configuration and installs the logger. Meant to be the first
/// call of every lecture `main`.
pub fn bootstrap() -> Result<LectureConfig, ExitCode> {
    let (config, origin) = match settings::load() {
        Ok(loaded) => loaded,
        Err(e) => {
            // The logger is not up yet.
            eprintln!("{e}");
            return Err(ExitCode::FAILURE);
        }
    };

    if let Err(e) = logging::init(config.level_filter()) {
        eprintln!("failed to install logger: {e}");
        return Err(ExitCode::FAILURE);
    }

    match origin {
        Some(path) => log::info!("Using config {}", path.display()),
        None => log::debug!("No config file found, using defaults"),
    }

    Ok(config)
}

/// Window title for lecture `number`.
pub fn title(number: u32, topic: &str) -> String {
    format!("OpenGL lecture {number}: {topic}")
}

/// Builds the program from `<assets>/shaders/<name>/{vert,frag}.glsl`.
pub fn load_program(
    gl: &Arc<glow::Context>,
    config: &LectureConfig,
    name: &str,
) -> Result<ShaderProgram, ShaderError> {
    ShaderProgram::from_files(
        gl,
        config.shader_path(name, "vert.glsl"),
        config.shader_path(name, "frag.glsl"),
    )
}
