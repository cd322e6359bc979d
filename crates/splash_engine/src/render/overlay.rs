//! Per-frame text overlay
//!
//! Draws the animated loading caption and the resolution line. Nothing is kept
//! between frames: each band is rasterized, uploaded, drawn and released inside
//! [`TextOverlayRenderer::render_frame`].

use super::backend::SpriteBackend;
use super::text::{loading_caption, resolution_label, TextSprite};
use super::{RenderError, SurfaceSize};
use crate::assets::FontFace;
use crate::core::OverlayConfig;

/// Renders the loading-screen text bands
#[derive(Debug, Clone)]
pub struct TextOverlayRenderer {
    config: OverlayConfig,
    dpi: f32,
}

impl TextOverlayRenderer {
    /// Create a renderer for the configured bands
    pub fn new(config: OverlayConfig, dpi: f32) -> Self {
        Self { config, dpi }
    }

    /// Sprites for one frame, in draw order
    pub fn sprites(&self, surface: &SurfaceSize, font: &FontFace, unix_secs: u64) -> [TextSprite; 2] {
        let font_name = self.config.show_font_name.then(|| font.name());
        [
            TextSprite::from_style(&self.config.loading, loading_caption(unix_secs), surface.width_px),
            TextSprite::from_style(
                &self.config.status,
                resolution_label(surface.width_px, surface.height_px, font_name),
                surface.width_px,
            ),
        ]
    }

    /// Draw both bands onto the current surface
    ///
    /// An empty surface (minimized window) draws nothing.
    pub fn render_frame(
        &self,
        surface: &SurfaceSize,
        font: &FontFace,
        backend: &mut dyn SpriteBackend,
        unix_secs: u64,
    ) -> Result<(), RenderError> {
        if surface.is_empty() {
            return Ok(());
        }

        for sprite in self.sprites(surface, font, unix_secs) {
            self.draw_sprite(&sprite, surface, font, backend)?;
        }
        Ok(())
    }

    fn draw_sprite(
        &self,
        sprite: &TextSprite,
        surface: &SurfaceSize,
        font: &FontFace,
        backend: &mut dyn SpriteBackend,
    ) -> Result<(), RenderError> {
        let image = sprite.rasterize(font, surface, self.dpi);
        let texture = backend.upload(&image)?;
        let drawn = backend.draw(texture, surface, &sprite.quad(surface));
        backend.release(texture);
        drawn
    }
}
