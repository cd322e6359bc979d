//! # Unified Configuration
//!
//! All tunables for the loading screen live in [`SplashConfig`]: window setup,
//! asset search paths, font selection and fallback policy, and the two text
//! bands drawn each frame. The defaults reproduce the stock loading screen.
//!
//! ```toml
//! [font]
//! asset = "DejaVuSans.ttf"
//! fallback = "monospace"
//!
//! [overlay]
//! show_font_name = true
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::render::text::{Alignment, Rgba};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Window configuration
    pub window: WindowConfig,
    /// Asset lookup configuration
    pub assets: AssetConfig,
    /// Font selection
    pub font: FontConfig,
    /// Text bands
    pub overlay: OverlayConfig,
    /// Frame setup
    pub render: RenderConfig,
}

impl Config for SplashConfig {}

impl SplashConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.assets.search_paths.is_empty() {
            return Err(ConfigError::Invalid("at least one asset search path is required".to_string()));
        }
        if self.font.asset.is_empty() {
            return Err(ConfigError::Invalid("font asset name cannot be empty".to_string()));
        }
        if !(self.font.dpi > 0.0) {
            return Err(ConfigError::Invalid(format!("dpi must be positive, got {}", self.font.dpi)));
        }
        self.overlay.loading.validate("loading")?;
        self.overlay.status.validate("status")?;
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in screen coordinates
    pub width: u32,
    /// Initial height in screen coordinates
    pub height: u32,
    /// Whether window is resizable
    pub resizable: bool,
    /// VSync setting
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Loading".to_string(),
            width: 540,
            height: 960,
            resizable: true,
            vsync: true,
        }
    }
}

/// Asset system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directories searched in order when opening an asset
    pub search_paths: Vec<String>,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            search_paths: vec!["assets".to_string(), "splash_app/assets".to_string()],
        }
    }
}

/// What to do when the bundled font cannot be opened, read or parsed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFallback {
    /// Log the failure and continue with the built-in monospace font
    #[default]
    Monospace,
    /// Log the failure and stop
    Fatal,
}

/// Font selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Asset name of the TrueType font, resolved through the search paths
    pub asset: String,
    /// Failure policy
    pub fallback: FontFallback,
    /// Dots per inch used to turn point sizes into pixels
    pub dpi: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            asset: "DejaVuSans.ttf".to_string(),
            fallback: FontFallback::Monospace,
            dpi: crate::render::text::DPI,
        }
    }
}

/// Style of one text band
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteStyle {
    /// Backing buffer height in pixels
    pub height_px: u32,
    /// Font size in points
    pub font_size: f32,
    /// Text colour
    pub text_color: Rgba,
    /// Solid fill behind the text
    pub background_color: Rgba,
    /// Placement of the band's top-left corner, in points
    pub offset_pt: [f32; 2],
    /// Horizontal alignment of the text inside the band
    pub alignment: Alignment,
}

impl SpriteStyle {
    fn validate(&self, band: &str) -> Result<(), ConfigError> {
        if self.height_px == 0 {
            return Err(ConfigError::Invalid(format!("{band} band height must be non-zero")));
        }
        if !(self.font_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{band} font size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }

    /// The animated caption band
    pub fn loading() -> Self {
        Self {
            height_px: 400,
            font_size: 96.0,
            text_color: Rgba::WHITE,
            background_color: Rgba::new(0x35, 0x67, 0x99, 0xFF),
            offset_pt: [0.0, 0.0],
            alignment: Alignment::Centered,
        }
    }

    /// The resolution status band
    pub fn status() -> Self {
        Self {
            height_px: 100,
            font_size: 24.0,
            text_color: Rgba::WHITE,
            background_color: Rgba::new(0x31, 0xA6, 0xA2, 0xFF),
            offset_pt: [0.0, 140.0],
            alignment: Alignment::Left,
        }
    }
}

/// The two bands drawn every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// "Loading..." band
    pub loading: SpriteStyle,
    /// Resolution band
    pub status: SpriteStyle,
    /// Append the active font name to the resolution line
    pub show_font_name: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            loading: SpriteStyle::loading(),
            status: SpriteStyle::status(),
            show_font_name: false,
        }
    }
}

/// Per-frame render setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Colour the framebuffer is cleared to before the bands are drawn
    pub clear_color: Rgba,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { clear_color: Rgba::BLACK }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SplashConfig::default();
        config.validate().unwrap();
        assert_eq!(config.font.fallback, FontFallback::Monospace);
        assert_eq!(config.overlay.loading.height_px, 400);
        assert_eq!(config.overlay.status.offset_pt, [0.0, 140.0]);
        assert_eq!(config.overlay.status.alignment, Alignment::Left);
    }

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SplashConfig::default();
        config.font.fallback = FontFallback::Fatal;
        config.overlay.show_font_name = true;

        for file in ["splash.toml", "splash.ron"] {
            let path = dir.path().join(file);
            config.save_to_file(&path).unwrap();
            assert_eq!(SplashConfig::load_from_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SplashConfig = toml::from_str(
            r#"
            [font]
            fallback = "fatal"

            [window]
            title = "Booting"
            "#,
        )
        .unwrap();

        assert_eq!(config.font.fallback, FontFallback::Fatal);
        assert_eq!(config.font.asset, "DejaVuSans.ttf");
        assert_eq!(config.window.title, "Booting");
        assert_eq!(config.window.width, 540);
        assert_eq!(config.overlay, OverlayConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = SplashConfig::default();
        config.overlay.status.font_size = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SplashConfig::default();
        config.assets.search_paths.clear();
        assert!(config.validate().is_err());

        let mut config = SplashConfig::default();
        config.font.dpi = f32::NAN;
        assert!(config.validate().is_err());
    }
}
