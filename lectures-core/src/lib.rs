//! Platform-independent building blocks of the OpenGL lectures: the free-fly
//! camera, input and frame timing, lighting parameters, vertex data and model
//! transforms. Nothing in this crate touches a GL context.

pub mod camera;
pub mod config;
pub mod geometry;
pub mod input;
pub mod lighting;
pub mod shader_source;
pub mod transform;
pub mod uniform;

pub use camera::{Camera, CameraMovement};
pub use config::{ConfigError, LectureConfig};
pub use input::LectureContext;
pub use shader_source::{ShaderError, ShaderStage};
pub use uniform::{UniformBlock, UniformValue};
