//! Mapping SDL2 input events onto the camera context.

use lectures_core::{CameraMovement, LectureContext};
use sdl2::{event::Event, keyboard::Keycode};

/// Camera direction bound to `keycode`: WASD or the arrow keys.
pub fn movement_for(keycode: Keycode) -> Option<CameraMovement> {
    match keycode {
        Keycode::W | Keycode::Up => Some(CameraMovement::Forward),
        Keycode::S | Keycode::Down => Some(CameraMovement::Backward),
        Keycode::A | Keycode::Left => Some(CameraMovement::Left),
        Keycode::D | Keycode::Right => Some(CameraMovement::Right),
        _ => None,
    }
}

/// Feeds keyboard, mouse-motion and scroll events to the camera context.
pub fn handle_camera_event(ctx: &mut LectureContext, event: &Event) {
    match *event {
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => {
            if let Some(direction) = movement_for(keycode) {
                ctx.keys.set(direction, true);
            }
        }
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => {
            if let Some(direction) = movement_for(keycode) {
                ctx.keys.set(direction, false);
            }
        }
        Event::MouseMotion { xrel, yrel, .. } => {
            ctx.handle_relative_motion(xrel as f32, yrel as f32);
        }
        Event::MouseWheel { y, .. } => {
            ctx.handle_scroll(y as f32);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use lectures_core::Camera;

    use super::*;

    #[test]
    fn test_arrow_keys_and_wasd_agree() {
        assert_eq!(movement_for(Keycode::W), movement_for(Keycode::Up));
        assert_eq!(movement_for(Keycode::S), movement_for(Keycode::Down));
        assert_eq!(movement_for(Keycode::A), movement_for(Keycode::Left));
        assert_eq!(movement_for(Keycode::D), movement_for(Keycode::Right));
        assert_eq!(movement_for(Keycode::W), Some(CameraMovement::Forward));
        assert_eq!(movement_for(Keycode::Space), None);
    }

    #[test]
    fn test_unrelated_events_leave_camera_alone() {
        let mut ctx = LectureContext::new(Camera::default(), 800, 600);
        handle_camera_event(&mut ctx, &Event::Quit { timestamp: 0 });
        assert_eq!(ctx.camera, Camera::default());
        assert_eq!(ctx.keys.movement(), None);
    }
}
