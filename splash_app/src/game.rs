//! The loading screen application

use splash_engine::prelude::*;
use splash_engine::core::FontConfig;

/// Loading screen: owns the font and draws the overlay every frame
pub struct LoadingGame {
    font_config: FontConfig,
    overlay: TextOverlayRenderer,
    font: Option<FontFace>,
    last_calc: ClockTime, // when we last calculated a frame
    frames_calculated: u64,
}

impl LoadingGame {
    /// Build the screen from configuration; the font is loaded in `initialize`
    pub fn new(config: &SplashConfig) -> Self {
        Self {
            font_config: config.font.clone(),
            overlay: TextOverlayRenderer::new(config.overlay.clone(), config.font.dpi),
            font: None,
            last_calc: ClockTime::default(),
            frames_calculated: 0,
        }
    }

    /// (Re)load the font according to the configured fallback policy
    pub fn reset(&mut self, assets: &AssetManager) -> Result<(), AppError> {
        let loader = FontLoader::new(assets, self.font_config.fallback);
        self.font = Some(loader.load(&self.font_config.asset)?);
        Ok(())
    }

    /// Font in use, once loaded
    pub fn font(&self) -> Option<&FontFace> {
        self.font.as_ref()
    }

    /// Logical frames computed so far
    pub fn frames_calculated(&self) -> u64 {
        self.frames_calculated
    }

    fn touch(&self, down: bool) {
        if down {
            log::info!("touch");
        }
    }

    fn calc_frame(&mut self) {
        self.frames_calculated += 1;
    }
}

impl Application for LoadingGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.reset(engine.assets())
    }

    fn update(&mut self, now: ClockTime) -> Result<(), AppError> {
        // Compute states up to now
        while self.last_calc < now {
            self.calc_frame();
            self.last_calc = self.last_calc.next();
        }
        Ok(())
    }

    fn render(&mut self, surface: &SurfaceSize, backend: &mut dyn SpriteBackend) -> Result<(), AppError> {
        let font = self
            .font
            .as_ref()
            .ok_or_else(|| AppError::NotInitialized("font".to_string()))?;
        self.overlay.render_frame(surface, font, backend, unix_seconds())?;
        Ok(())
    }

    fn handle_event(&mut self, event: &AppEvent) -> Result<(), AppError> {
        match event {
            AppEvent::Touch { down, .. } => self.touch(*down),
            AppEvent::Resized(surface) => {
                log::info!("{}px * {}px", surface.width_px, surface.height_px);
            }
            _ => {}
        }
        Ok(())
    }

    fn cleanup(&mut self) {
        log::info!("Calculated {} frames", self.frames_calculated);
        self.font = None;
    }
}
