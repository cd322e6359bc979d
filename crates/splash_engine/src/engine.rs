//! Core engine implementation

use crate::{
    application::{Application, AppEvent},
    assets::AssetManager,
    config::ConfigError,
    core::SplashConfig,
    foundation::time::{Clock, Timer},
    render::{GlSpriteBackend, RenderError, SurfaceSize, Window, WindowError},
};
use thiserror::Error;

/// Main engine struct
///
/// Owns the window, its GL backend, the asset manager and the logical clock,
/// and drives an [`Application`] through its lifecycle.
pub struct Engine {
    // Dropped before the window so GL objects go while the context is alive
    backend: GlSpriteBackend,
    window: Window,
    assets: AssetManager,
    clock: Clock,
    timer: Timer,
    config: SplashConfig,
    surface: SurfaceSize,
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: SplashConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        let mut window = Window::new(&config.window)?;
        let backend = GlSpriteBackend::new(window.load_gl())?;
        let assets = AssetManager::new(&config.assets);
        let surface = window.surface_size();
        log::info!(
            "Surface {}x{} px at {:.2} px/pt",
            surface.width_px, surface.height_px, surface.pixels_per_pt
        );

        Ok(Self {
            backend,
            window,
            assets,
            clock: Clock::new(),
            timer: Timer::new(),
            config,
            surface,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: SplashConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        // The application sees the starting size before its first frame
        let initial = AppEvent::Resized(engine.surface);
        app.handle_event(&initial)
            .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;

        log::info!("Starting main loop...");

        while engine.running && !engine.window.should_close() {
            engine.window.poll_events();
            for event in engine.window.drain_events() {
                engine.handle_event(&event);
                app.handle_event(&event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {e}")))?;
            }

            app.update(engine.clock.now())
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;

            engine.draw_frame(app)?;
        }

        app.cleanup();

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        Ok(())
    }

    /// Clear the surface, let the application draw, and present
    fn draw_frame<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        if self.surface.is_empty() {
            return Ok(());
        }
        self.timer.update();

        self.backend.begin_frame(&self.surface, self.config.render.clear_color);
        app.render(&self.surface, &mut self.backend)
            .map_err(|e| EngineError::ApplicationError(format!("App render: {e}")))?;

        let leaked = self.backend.live_textures();
        if leaked > 0 {
            log::warn!("{leaked} sprite textures were not released this frame");
        }

        self.window.swap_buffers();
        Ok(())
    }

    /// Engine-side reaction to an event
    fn handle_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Resized(surface) => {
                log::debug!("Surface resized to {}x{} px", surface.width_px, surface.height_px);
                self.surface = *surface;
            }
            AppEvent::CloseRequested => self.quit(),
            AppEvent::KeyInput { key: glfw::Key::Escape, pressed: true } => self.quit(),
            _ => {}
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Get the asset manager
    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    /// Get the active configuration
    pub fn config(&self) -> &SplashConfig {
        &self.config
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Window or context creation failed
    #[error("Window error: {0}")]
    WindowError(#[from] WindowError),

    /// Rendering setup failed
    #[error("Rendering error: {0}")]
    RenderError(#[from] RenderError),

    /// Application hook failed
    #[error("Application error: {0}")]
    ApplicationError(String),
}
