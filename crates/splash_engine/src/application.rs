//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::foundation::time::ClockTime;
use crate::render::{RenderError, SpriteBackend, SurfaceSize};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a screen with the engine. The engine calls the
/// hooks from a single thread in this order: `initialize` once, then per loop
/// iteration `handle_event` for each pending event, `update`, and `render`,
/// and finally `cleanup`.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the window and GL context exist. Load assets here.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Advance application state up to logical time `now`
    fn update(&mut self, now: ClockTime) -> Result<(), AppError>;

    /// Draw one frame onto `surface`
    fn render(&mut self, surface: &SurfaceSize, backend: &mut dyn SpriteBackend) -> Result<(), AppError>;

    /// Handle application events
    ///
    /// Called for every event, including those the engine also acts on.
    fn handle_event(&mut self, event: &AppEvent) -> Result<(), AppError> {
        let _ = event;
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the application is shutting down.
    fn cleanup(&mut self);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Font could not be loaded
    #[error("Font error: {0}")]
    Font(#[from] crate::assets::FontError),

    /// Frame could not be drawn
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// A resource was used before it was loaded
    #[error("Not initialized: {0}")]
    NotInitialized(String),
}

/// Application events
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The drawable changed size
    Resized(SurfaceSize),

    /// Window close requested
    CloseRequested,

    /// Touch (or primary mouse button) went down or up
    Touch {
        /// Whether the touch began (true) or ended (false)
        down: bool,
        /// X coordinate in screen coordinates
        x: f64,
        /// Y coordinate in screen coordinates
        y: f64,
    },

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: glfw::Key,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },
}
