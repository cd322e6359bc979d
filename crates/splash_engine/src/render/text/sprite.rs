//! Text sprite descriptor, layout and rasterization

use image::RgbaImage;
use nalgebra::Point2;

use super::{ascent_px, measure_text, pixel_size, Alignment, Rgba};
use crate::assets::FontFace;
use crate::core::SpriteStyle;
use crate::render::{Quad, SurfaceSize};

/// Pen position for the first glyph, in buffer pixels
///
/// `y` is the baseline, measured down from the top of the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawOrigin {
    /// Left edge of the text run
    pub x: f32,
    /// Baseline
    pub y: f32,
}

/// One text draw: what to write, how big its buffer is, and where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct TextSprite {
    /// String to render
    pub text: String,
    /// Backing buffer width in pixels
    pub width: u32,
    /// Backing buffer height in pixels
    pub height: u32,
    /// Foreground colour
    pub text_color: Rgba,
    /// Solid fill behind the text
    pub background_color: Rgba,
    /// Font size in points
    pub font_size: f32,
    /// Top-left placement on the surface, in points
    pub offset: Point2<f32>,
    /// Horizontal alignment
    pub alignment: Alignment,
}

impl TextSprite {
    /// Sprite for `text` using a configured band style
    pub fn from_style(style: &SpriteStyle, text: impl Into<String>, width: u32) -> Self {
        Self {
            text: text.into(),
            width,
            height: style.height_px,
            text_color: style.text_color,
            background_color: style.background_color,
            font_size: style.font_size,
            offset: Point2::new(style.offset_pt[0], style.offset_pt[1]),
            alignment: style.alignment,
        }
    }

    /// Where the text run starts for a string `text_width` pixels wide
    pub fn origin(&self, surface: &SurfaceSize, text_width: f32, dpi: f32) -> DrawOrigin {
        let x = match self.alignment {
            Alignment::Left => 0.0,
            Alignment::Centered => surface.width_px as f32 / 2.0 - text_width / 2.0,
        };
        let y = self.height / 2 + ascent_px(self.font_size, dpi) / 2;

        DrawOrigin { x, y: y as f32 }
    }

    /// Fill the backing buffer and draw the glyph run into it
    pub fn rasterize(&self, face: &FontFace, surface: &SurfaceSize, dpi: f32) -> RgbaImage {
        let font = face.font();
        let px = pixel_size(self.font_size, dpi);
        let text_width = measure_text(font, &self.text, px);
        let origin = self.origin(surface, text_width, dpi);

        let mut buffer = RgbaImage::from_pixel(self.width, self.height, self.background_color.into());

        let mut pen_x = origin.x;
        let mut previous = None;
        for ch in self.text.chars() {
            if let Some(prev) = previous {
                pen_x += font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
            }
            let (metrics, coverage) = font.rasterize(ch, px);

            let left = pen_x.round() as i64 + i64::from(metrics.xmin);
            let top = origin.y.round() as i64 - (metrics.height as i64 + i64::from(metrics.ymin));
            blit_coverage(&mut buffer, left, top, metrics.width, &coverage, self.text_color);

            pen_x += metrics.advance_width;
            previous = Some(ch);
        }

        buffer
    }

    /// Destination quad on the surface, in points
    ///
    /// The quad spans the full drawable width and the sprite's own height band.
    pub fn quad(&self, surface: &SurfaceSize) -> Quad {
        let band_height = self.height as f32 / surface.pixels_per_pt;
        Quad {
            top_left: self.offset,
            top_right: Point2::new(self.offset.x + surface.width_pt, self.offset.y),
            bottom_left: Point2::new(self.offset.x, self.offset.y + band_height),
        }
    }
}

/// Blend a glyph coverage bitmap into `buffer` in a solid colour, clipping to its bounds
fn blit_coverage(buffer: &mut RgbaImage, left: i64, top: i64, glyph_width: usize, coverage: &[u8], color: Rgba) {
    if glyph_width == 0 {
        return;
    }
    let (buf_w, buf_h) = (i64::from(buffer.width()), i64::from(buffer.height()));

    for (row, line) in coverage.chunks_exact(glyph_width).enumerate() {
        let y = top + row as i64;
        if y < 0 || y >= buf_h {
            continue;
        }
        for (col, &alpha) in line.iter().enumerate() {
            let x = left + col as i64;
            if alpha == 0 || x < 0 || x >= buf_w {
                continue;
            }
            let pixel = buffer.get_pixel_mut(x as u32, y as u32);
            for (dst, src) in pixel.0.iter_mut().zip(color.0) {
                let blended = (u32::from(src) * u32::from(alpha) + u32::from(*dst) * (255 - u32::from(alpha))) / 255;
                *dst = blended as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const BLUE: Rgba = Rgba::new(0x35, 0x67, 0x99, 0xFF);

    fn sprite(text: &str, alignment: Alignment, width: u32) -> TextSprite {
        TextSprite {
            text: text.to_string(),
            width,
            height: 100,
            text_color: Rgba::WHITE,
            background_color: BLUE,
            font_size: 24.0,
            offset: Point2::new(0.0, 0.0),
            alignment,
        }
    }

    #[test]
    fn test_centered_origin_straddles_midpoint() {
        for width_px in [1, 320, 1080, 1441, 2560] {
            let surface = SurfaceSize::new(width_px, 1920, 1.0);
            let text_width = 217.5;
            let origin = sprite("Loading", Alignment::Centered, width_px).origin(&surface, text_width, 72.0);
            assert_relative_eq!(origin.x + text_width / 2.0, width_px as f32 / 2.0);
        }
    }

    #[test]
    fn test_left_origin_is_zero() {
        for width_px in [1, 320, 1080] {
            let surface = SurfaceSize::new(width_px, 1920, 2.0);
            let origin = sprite("1080px * 1920px", Alignment::Left, width_px).origin(&surface, 400.0, 72.0);
            assert_eq!(origin.x, 0.0);
        }
    }

    #[test]
    fn test_baseline_uses_half_height_and_half_ascent() {
        let surface = SurfaceSize::new(1080, 1920, 1.0);
        let mut loading = sprite("Loading", Alignment::Centered, 1080);
        loading.height = 400;
        loading.font_size = 96.0;
        assert_eq!(loading.origin(&surface, 0.0, 72.0).y, 248.0);

        // Integer halves, so odd values truncate
        loading.height = 101;
        loading.font_size = 25.0;
        assert_eq!(loading.origin(&surface, 0.0, 72.0).y, 62.0);
    }

    #[test]
    fn test_rasterize_keeps_background_outside_glyphs() {
        let face = FontFace::builtin_monospace().unwrap();
        let surface = SurfaceSize::new(400, 800, 1.0);
        let image = sprite("Loading...", Alignment::Centered, 400).rasterize(&face, &surface, 72.0);

        assert_eq!(image.dimensions(), (400, 100));
        // Corners are far from the text run
        for (x, y) in [(0, 0), (399, 0), (0, 99), (399, 99)] {
            assert_eq!(image.get_pixel(x, y).0, BLUE.0);
        }
        assert!(image.pixels().any(|p| p.0 != BLUE.0));
    }

    #[test]
    fn test_blank_text_is_solid_background() {
        let face = FontFace::builtin_monospace().unwrap();
        let surface = SurfaceSize::new(64, 64, 1.0);
        let image = sprite("   ", Alignment::Left, 64).rasterize(&face, &surface, 72.0);
        assert!(image.pixels().all(|p| p.0 == BLUE.0));
    }

    #[test]
    fn test_text_wider_than_buffer_is_clipped() {
        let face = FontFace::builtin_monospace().unwrap();
        let surface = SurfaceSize::new(16, 16, 1.0);
        let mut wide = sprite("Loading...", Alignment::Centered, 16);
        wide.height = 16;
        let image = wide.rasterize(&face, &surface, 72.0);
        assert_eq!(image.dimensions(), (16, 16));
    }

    #[test]
    fn test_quad_spans_width_and_band() {
        let surface = SurfaceSize::new(1080, 1920, 3.0);
        let mut status = sprite("1080px * 1920px", Alignment::Left, 1080);
        status.offset = Point2::new(0.0, 140.0);

        let quad = status.quad(&surface);
        assert_eq!(quad.top_left, Point2::new(0.0, 140.0));
        assert_relative_eq!(quad.top_right.x, 360.0);
        assert_relative_eq!(quad.top_right.y, 140.0);
        assert_relative_eq!(quad.bottom_left.y, 140.0 + 100.0 / 3.0);
    }

    #[test]
    fn test_blit_blends_by_coverage() {
        let mut buffer = RgbaImage::from_pixel(2, 1, image::Rgba([0, 0, 0, 255]));
        blit_coverage(&mut buffer, 0, 0, 2, &[255, 0], Rgba::WHITE);
        assert_eq!(buffer.get_pixel(0, 0).0, [255, 255, 255, 255]);
        assert_eq!(buffer.get_pixel(1, 0).0, [0, 0, 0, 255]);

        let mut buffer = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
        blit_coverage(&mut buffer, 0, 0, 1, &[128], Rgba::WHITE);
        assert_eq!(buffer.get_pixel(0, 0).0, [128, 128, 128, 255]);

        // Fully outside: nothing to do
        blit_coverage(&mut buffer, -5, -5, 1, &[255], Rgba::WHITE);
        assert_eq!(buffer.get_pixel(0, 0).0, [128, 128, 128, 255]);
    }
}
