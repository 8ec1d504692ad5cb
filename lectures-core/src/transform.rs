//! Model transforms used by the lectures.

use glam::{Mat4, Vec3};

/// Spin rate of the lecture 5 cube, in radians per second.
pub const CUBE_SPIN_RATE: f32 = 3.0;
/// Extra rotation per container index, in radians.
pub const CONTAINER_ANGLE_STEP: f32 = 20.0;
/// Uniform scale of the lamp cubes.
pub const LAMP_SCALE: f32 = 0.2;

/// Toggleable translate-and-spin transform for the textured quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadTransform {
    pub enabled: bool,
    /// Radians per second. May go negative, which spins the other way.
    pub rotation_speed: f32,
}

impl Default for QuadTransform {
    fn default() -> Self {
        Self {
            enabled: false,
            rotation_speed: 2.0,
        }
    }
}

impl QuadTransform {
    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn speed_up(&mut self) {
        self.rotation_speed += 1.0;
    }

    pub fn slow_down(&mut self) {
        self.rotation_speed -= 1.0;
    }

    /// Transform at `time` seconds since start.
    pub fn matrix(&self, time: f32) -> Mat4 {
        if !self.enabled {
            return Mat4::IDENTITY;
        }

        Mat4::from_translation(Vec3::new(0.25, -0.25, 0.0))
            * Mat4::from_rotation_z(time * self.rotation_speed)
    }
}

/// Model matrix of the cube spinning about +Y.
pub fn spinning_cube(time: f32) -> Mat4 {
    Mat4::from_rotation_y(CUBE_SPIN_RATE * time)
}

/// Model matrix of the `index`-th container placed at `position`.
pub fn container_model(position: Vec3, index: usize) -> Mat4 {
    let axis = Vec3::new(1.0, 0.3, 0.5).normalize();
    Mat4::from_translation(position)
        * Mat4::from_axis_angle(axis, CONTAINER_ANGLE_STEP * index as f32)
}

/// Model matrix of a lamp cube at `position`.
pub fn lamp_model(position: Vec3) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
}
