//! Per-lecture input and timing state.
//!
//! [`LectureContext`] owns the camera together with everything the input
//! handlers need between events: which movement keys are held, the last
//! cursor position and the previous frame time. It is passed by reference to
//! the event handlers and the render loop.

use crate::camera::{Camera, CameraMovement};

/// Turns absolute cursor positions into per-event offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseTracker {
    last_x: f32,
    last_y: f32,
    first: bool,
}

impl MouseTracker {
    /// Starts tracking from `(x, y)`, usually the window centre.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            last_x: x,
            last_y: y,
            first: true,
        }
    }

    /// Returns the cursor offset since the previous event. The first event
    /// only records the position. The y offset is reversed because window
    /// coordinates grow downwards.
    pub fn offsets(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first {
            self.last_x = x;
            self.last_y = y;
            self.first = false;
        }

        let x_offset = x - self.last_x;
        let y_offset = self.last_y - y;

        self.last_x = x;
        self.last_y = y;

        (x_offset, y_offset)
    }

    /// Like [`MouseTracker::offsets`], for a relative motion of a cursor that
    /// is not bounded by the window.
    pub fn relative(&mut self, x_rel: f32, y_rel: f32) -> (f32, f32) {
        self.offsets(self.last_x + x_rel, self.last_y + y_rel)
    }
}

/// Which movement keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// The single direction to move this frame. Forward wins over backward,
    /// which wins over left, which wins over right.
    pub fn movement(&self) -> Option<CameraMovement> {
        if self.forward {
            Some(CameraMovement::Forward)
        } else if self.backward {
            Some(CameraMovement::Backward)
        } else if self.left {
            Some(CameraMovement::Left)
        } else if self.right {
            Some(CameraMovement::Right)
        } else {
            None
        }
    }

    /// Records a key press or release for `direction`.
    pub fn set(&mut self, direction: CameraMovement, held: bool) {
        match direction {
            CameraMovement::Forward => self.forward = held,
            CameraMovement::Backward => self.backward = held,
            CameraMovement::Left => self.left = held,
            CameraMovement::Right => self.right = held,
        }
    }
}

/// Measures the time between consecutive frames.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimer {
    last_frame: f32,
    delta: f32,
}

impl FrameTimer {
    /// Advances to a frame at `now` seconds and returns the elapsed time.
    pub fn tick(&mut self, now: f32) -> f32 {
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }
}

/// Everything a camera lecture mutates in response to input.
#[derive(Debug, Clone)]
pub struct LectureContext {
    pub camera: Camera,
    pub mouse: MouseTracker,
    pub keys: MovementKeys,
    pub timer: FrameTimer,
}

impl LectureContext {
    /// Creates a context for a `width` x `height` window with the cursor
    /// starting at its centre.
    pub fn new(camera: Camera, width: u32, height: u32) -> Self {
        Self {
            camera,
            mouse: MouseTracker::new(width as f32 / 2.0, height as f32 / 2.0),
            keys: MovementKeys::default(),
            timer: FrameTimer::default(),
        }
    }

    /// Starts a new frame at `now` seconds and returns its delta time.
    pub fn begin_frame(&mut self, now: f32) -> f32 {
        self.timer.tick(now)
    }

    /// Moves the camera for the held keys over the current frame's delta time.
    /// Call after the frame's events have been handled.
    pub fn apply_movement(&mut self) {
        if let Some(direction) = self.keys.movement() {
            self.camera.process_keyboard(direction, self.timer.delta());
        }
    }

    pub fn handle_cursor(&mut self, x: f32, y: f32) {
        let (x_offset, y_offset) = self.mouse.offsets(x, y);
        self.camera.process_mouse_movement(x_offset, y_offset, true);
    }

    /// Same as [`LectureContext::handle_cursor`] for a captured mouse that
    /// only reports relative motion.
    pub fn handle_relative_motion(&mut self, x_rel: f32, y_rel: f32) {
        let (x_offset, y_offset) = self.mouse.relative(x_rel, y_rel);
        self.camera.process_mouse_movement(x_offset, y_offset, true);
    }

    pub fn handle_scroll(&mut self, y_offset: f32) {
        self.camera.process_mouse_scroll(y_offset);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn test_first_mouse_event_has_no_offset() {
        let mut tracker = MouseTracker::new(400.0, 300.0);
        assert_eq!(tracker.offsets(10.0, 20.0), (0.0, 0.0));
        assert_eq!(tracker.offsets(15.0, 10.0), (5.0, 10.0));
        assert_eq!(tracker.offsets(15.0, 30.0), (0.0, -20.0));
    }

    #[test]
    fn test_movement_priority() {
        let mut keys = MovementKeys::default();
        assert_eq!(keys.movement(), None);

        keys.set(CameraMovement::Right, true);
        assert_eq!(keys.movement(), Some(CameraMovement::Right));
        keys.set(CameraMovement::Left, true);
        assert_eq!(keys.movement(), Some(CameraMovement::Left));
        keys.set(CameraMovement::Backward, true);
        assert_eq!(keys.movement(), Some(CameraMovement::Backward));
        keys.set(CameraMovement::Forward, true);
        assert_eq!(keys.movement(), Some(CameraMovement::Forward));

        keys.set(CameraMovement::Forward, false);
        assert_eq!(keys.movement(), Some(CameraMovement::Backward));
    }

    #[test]
    fn test_frame_timer() {
        let mut timer = FrameTimer::default();
        assert_eq!(timer.tick(0.5), 0.5);
        assert_eq!(timer.tick(0.75), 0.25);
        assert_eq!(timer.delta(), 0.25);
    }

    #[test]
    fn test_context_moves_camera_for_held_key() {
        let mut ctx = LectureContext::new(Camera::at(Vec3::new(0.0, 0.0, 3.0)), 800, 600);
        ctx.begin_frame(0.0);
        ctx.apply_movement();
        ctx.keys.forward = true;
        ctx.begin_frame(0.5);
        ctx.apply_movement();

        let expected = Vec3::new(0.0, 0.0, 3.0 - ctx.camera.movement_speed() * 0.5);
        assert!(ctx.camera.position().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_context_cursor_turns_camera() {
        let mut ctx = LectureContext::new(Camera::default(), 800, 600);
        ctx.handle_cursor(400.0, 300.0);
        ctx.handle_cursor(440.0, 260.0);

        assert!((ctx.camera.yaw() - (-90.0 + 10.0)).abs() < 1e-5);
        assert!((ctx.camera.pitch() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_relative_motion_matches_cursor_motion() {
        let mut absolute = LectureContext::new(Camera::default(), 800, 600);
        absolute.handle_cursor(400.0, 300.0);
        absolute.handle_cursor(430.0, 280.0);

        let mut relative = LectureContext::new(Camera::default(), 800, 600);
        relative.handle_relative_motion(5.0, 5.0);
        relative.handle_relative_motion(30.0, -20.0);

        assert_eq!(absolute.camera, relative.camera);
    }

    #[test]
    fn test_context_scroll_zooms() {
        let mut ctx = LectureContext::new(Camera::default(), 800, 600);
        ctx.handle_scroll(10.0);
        assert_eq!(ctx.camera.zoom(), 35.0);
    }
}
