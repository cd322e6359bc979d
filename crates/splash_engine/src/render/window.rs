//! Window management using GLFW
//!
//! Creates a window with a current OpenGL 3.3 core context and translates GLFW
//! events into [`AppEvent`]s. The primary mouse button stands in for touch.

use glfw::Context as _;
use thiserror::Error;

use crate::application::AppEvent;
use crate::core::WindowConfig;
use crate::render::SurfaceSize;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window or its GL context could not be created
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window wrapper owning the GL context
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and make its context current
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        window.make_current();
        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        window.set_key_polling(true);
        window.set_close_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_mouse_button_polling(true);

        log::info!("Created {}x{} window \"{}\"", config.width, config.height, config.title);

        Ok(Self { glfw, window, events })
    }

    /// Load GL function pointers from this window's context
    pub fn load_gl(&mut self) -> glow::Context {
        unsafe { glow::Context::from_loader_function(|symbol| self.window.get_proc_address(symbol) as *const _) }
    }

    /// Current drawable size
    pub fn surface_size(&self) -> SurfaceSize {
        let (width, height) = self.window.get_framebuffer_size();
        self.surface_from_framebuffer(width, height)
    }

    fn surface_from_framebuffer(&self, width: i32, height: i32) -> SurfaceSize {
        let (scale, _) = self.window.get_content_scale();
        SurfaceSize::new(width.max(0) as u32, height.max(0) as u32, scale)
    }

    /// Check if the window should close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Process pending window system events
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain the events gathered by the last poll, translated for the application
    pub fn drain_events(&self) -> Vec<AppEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| self.translate(event))
            .collect()
    }

    fn translate(&self, event: glfw::WindowEvent) -> Option<AppEvent> {
        match event {
            glfw::WindowEvent::FramebufferSize(width, height) => {
                Some(AppEvent::Resized(self.surface_from_framebuffer(width, height)))
            }
            glfw::WindowEvent::Close => Some(AppEvent::CloseRequested),
            glfw::WindowEvent::MouseButton(glfw::MouseButton::Button1, action, _) => {
                let (x, y) = self.window.get_cursor_pos();
                match action {
                    glfw::Action::Press => Some(AppEvent::Touch { down: true, x, y }),
                    glfw::Action::Release => Some(AppEvent::Touch { down: false, x, y }),
                    glfw::Action::Repeat => None,
                }
            }
            glfw::WindowEvent::Key(key, _, action, _) => match action {
                glfw::Action::Press => Some(AppEvent::KeyInput { key, pressed: true }),
                glfw::Action::Release => Some(AppEvent::KeyInput { key, pressed: false }),
                glfw::Action::Repeat => None,
            },
            _ => None,
        }
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
