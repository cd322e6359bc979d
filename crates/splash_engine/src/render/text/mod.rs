//! Text sprites
//!
//! A text sprite is a one-shot CPU image: a solid background with a single run
//! of glyphs drawn over it. It is built, uploaded and released every frame.
//!
//! - `metrics`: string measurement and point-to-pixel conversion
//! - `captions`: the strings the loading screen shows
//! - `sprite`: the sprite descriptor, its layout and rasterization

pub mod captions;
pub mod metrics;
pub mod sprite;

pub use captions::{loading_caption, resolution_label};
pub use metrics::{ascent_px, measure_text, pixel_size};
pub use sprite::{DrawOrigin, TextSprite};

use serde::{Deserialize, Serialize};

/// Dots per inch used for point-to-pixel conversion
pub const DPI: f32 = 72.0;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    /// Opaque white
    pub const WHITE: Self = Self([0xFF, 0xFF, 0xFF, 0xFF]);
    /// Opaque black
    pub const BLACK: Self = Self([0x00, 0x00, 0x00, 0xFF]);

    /// Build a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Channels scaled to `0.0..=1.0`, for GL clear colours
    pub fn to_f32(self) -> [f32; 4] {
        self.0.map(|c| f32::from(c) / 255.0)
    }
}

impl From<Rgba> for image::Rgba<u8> {
    fn from(color: Rgba) -> Self {
        image::Rgba(color.0)
    }
}

/// Horizontal placement of text inside its sprite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Text starts at the left edge
    Left,
    /// Text is centred on the surface's horizontal midpoint
    #[default]
    Centered,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_f32() {
        assert_eq!(Rgba::WHITE.to_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Rgba::new(0, 0, 0, 0).to_f32(), [0.0; 4]);
        let teal = Rgba::new(0x31, 0xA6, 0xA2, 0xFF).to_f32();
        assert!((teal[1] - 166.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rgba_into_image_pixel() {
        let pixel: image::Rgba<u8> = Rgba::new(1, 2, 3, 4).into();
        assert_eq!(pixel.0, [1, 2, 3, 4]);
    }
}
