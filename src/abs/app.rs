//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2
//! and OpenGL context necessary for creating a windowed application.

use std::{sync::Arc, time::Instant};

use glow::HasContext;
use lectures_core::config::WindowConfig;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
};

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Fields are declared so that GL resources created from [`App::gl`] can be
/// dropped before the context itself: drop those first, then the `App`.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
    started: Instant,
}

impl App {
    /// Creates a window with an OpenGL 3.3 core context.
    pub fn new(title: &str, config: &WindowConfig) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video_subsystem = sdl.video()?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(3, 3);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let mut builder = video_subsystem.window(title, config.width, config.height);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        let window = builder.build().map_err(|e| e.to_string())?;

        let gl_context = window.gl_create_context()?;
        window.gl_make_current(&gl_context)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        let event_pump = sdl.event_pump()?;
        let gl = Arc::new(gl);

        let (width, height) = window.drawable_size();
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }

        log::info!(
            "Created {}x{} window \"{}\" ({})",
            width,
            height,
            title,
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        Ok(Self {
            gl,
            event_pump,
            gl_context,
            window,
            video_subsystem,
            sdl,
            started: Instant::now(),
        })
    }

    /// Hides the cursor and reports relative motion, for mouse-look.
    pub fn capture_mouse(&self, capture: bool) {
        self.sdl.mouse().set_relative_mouse_mode(capture);
    }

    /// Drains pending events, passing each one to `handle`. Returns `false`
    /// once the window was closed or Escape was pressed.
    pub fn pump_events(&mut self, mut handle: impl FnMut(&Event)) -> bool {
        let mut open = true;
        let mut resized = false;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => open = false,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => resized = true,
                _ => {}
            }
            handle(&event);
        }

        if resized {
            self.fit_viewport();
        }
        open
    }

    /// Presents the back buffer.
    pub fn swap(&self) {
        self.window.gl_swap_window();
    }

    /// Size of the drawable area in pixels, which can differ from the window
    /// size on high-DPI displays.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }

    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.drawable_size();
        width as f32 / height.max(1) as f32
    }

    /// Seconds since the window was created.
    pub fn elapsed_seconds(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Resizes the viewport to the drawable area.
    pub fn fit_viewport(&self) {
        let (width, height) = self.drawable_size();
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }
}
