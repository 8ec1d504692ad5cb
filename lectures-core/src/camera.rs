//! Free-fly camera driven by keyboard and mouse deltas.
//!
//! The camera keeps its orientation as yaw/pitch Euler angles (degrees) and
//! derives an orthonormal `front`/`right`/`up` basis from them whenever the
//! orientation changes. The default yaw of -90° looks down the -Z axis.

use glam::{Mat4, Vec3};

/// Default yaw, in degrees.
pub const YAW: f32 = -90.0;
/// Default pitch, in degrees.
pub const PITCH: f32 = 0.0;
/// Default movement speed, in world units per second.
pub const SPEED: f32 = 6.0;
/// Default mouse sensitivity, in degrees per input unit.
pub const SENSITIVITY: f32 = 0.25;
/// Default field of view, in degrees.
pub const ZOOM: f32 = 45.0;

/// Pitch limit applied when pitch is constrained.
pub const PITCH_LIMIT: f32 = 89.0;
/// Smallest field of view reachable by scrolling.
pub const MIN_ZOOM: f32 = 1.0;
/// Largest field of view reachable by scrolling.
pub const MAX_ZOOM: f32 = 45.0;

/// Directions the camera can be moved in, independent of any windowing
/// library's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// A camera that turns input deltas into a view transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    yaw: f32,
    pitch: f32,

    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW, PITCH)
    }
}

impl Camera {
    /// Creates a camera at `position` oriented by `yaw` and `pitch` (degrees),
    /// using `world_up` as the reference up direction.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED,
            mouse_sensitivity: SENSITIVITY,
            zoom: ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Creates a camera at `position` with the default orientation.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, YAW, PITCH)
    }

    /// Creates a camera from scalar components.
    #[allow(clippy::too_many_arguments)]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Returns the world-to-camera transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Returns a perspective projection using the current zoom as the vertical
    /// field of view.
    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect_ratio, near, far)
    }

    /// Moves the camera in `direction` by `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;

        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Turns the camera by mouse offsets. With `constrain_pitch` the pitch
    /// stays within ±89° so the view never flips over.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Narrows or widens the field of view by a scroll-wheel offset.
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    fn update_vectors(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        // Right first, then up from right, so the basis stays orthonormal.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(camera: &Camera) {
        let (f, r, u) = (camera.front(), camera.right(), camera.up());
        assert!((f.length() - 1.0).abs() < EPS, "front not unit: {f}");
        assert!((r.length() - 1.0).abs() < EPS, "right not unit: {r}");
        assert!((u.length() - 1.0).abs() < EPS, "up not unit: {u}");
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
    }

    #[test]
    fn test_basis_is_orthonormal_over_sweep() {
        let mut yaw = -180.0;
        while yaw <= 180.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                let camera = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_orthonormal(&camera);
                pitch += 11.0;
            }
            yaw += 15.0;
        }
    }

    #[test]
    fn test_basis_is_right_handed() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, -20.0);
        let cross = camera.right().cross(camera.up());
        assert!(cross.abs_diff_eq(-camera.front(), EPS));
    }

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.zoom(), ZOOM);
    }

    #[test]
    fn test_scalar_constructor_matches_vector_constructor() {
        let a = Camera::from_scalars(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, -45.0, 10.0);
        let b = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -45.0, 10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        for _ in 0..100 {
            camera.process_mouse_movement(0.0, 100.0, true);
        }
        assert_eq!(camera.pitch(), 89.0);
        assert_orthonormal(&camera);

        for _ in 0..200 {
            camera.process_mouse_movement(0.0, -100.0, true);
        }
        assert_eq!(camera.pitch(), -89.0);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_pitch_is_unbounded_when_not_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 400.0, false);
        assert_eq!(camera.pitch(), 100.0);
    }

    #[test]
    fn test_mouse_movement_scales_by_sensitivity() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(40.0, 8.0, true);
        assert!((camera.yaw() - (YAW + 10.0)).abs() < EPS);
        assert!((camera.pitch() - 2.0).abs() < EPS);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.zoom(), 35.0);

        for _ in 0..10 {
            camera.process_mouse_scroll(10.0);
        }
        assert_eq!(camera.zoom(), MIN_ZOOM);

        camera.process_mouse_scroll(-1000.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_keyboard_displacement_is_linear_in_delta_time() {
        let start = Vec3::new(0.0, 0.0, 3.0);
        for direction in [
            CameraMovement::Forward,
            CameraMovement::Backward,
            CameraMovement::Left,
            CameraMovement::Right,
        ] {
            let mut once = Camera::at(start);
            once.process_keyboard(direction, 0.1);
            let mut twice = Camera::at(start);
            twice.process_keyboard(direction, 0.2);

            let d1 = once.position() - start;
            let d2 = twice.position() - start;
            assert!(d2.abs_diff_eq(d1 * 2.0, EPS), "{direction:?}: {d1} vs {d2}");
            assert!((d1.length() - SPEED * 0.1).abs() < EPS);
        }
    }

    #[test]
    fn test_keyboard_directions() {
        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Forward, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(0.0, 0.0, -SPEED), 1e-4));

        let mut camera = Camera::default();
        camera.process_keyboard(CameraMovement::Left, 1.0);
        assert!(camera.position().abs_diff_eq(Vec3::new(-SPEED, 0.0, 0.0), 1e-4));
    }

    #[test]
    fn test_view_matrix_satisfies_look_at() {
        let camera = Camera::new(Vec3::new(-2.0, 1.5, 4.0), Vec3::Y, 12.0, 33.0);
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-4));

        let target = view.transform_point3(camera.position() + camera.front());
        assert!(target.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_view_matrix_from_default_orientation_is_translation() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let expected = Mat4::from_translation(Vec3::new(0.0, 0.0, -3.0));
        assert!(camera.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_projection_uses_zoom_in_degrees() {
        let camera = Camera::default();
        let expected = Mat4::perspective_rh_gl(45.0_f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
        assert!(camera.projection_matrix(4.0 / 3.0, 0.1, 100.0).abs_diff_eq(expected, EPS));
    }
}
