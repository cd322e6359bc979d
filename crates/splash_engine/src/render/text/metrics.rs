//! Point-size conversion and string measurement

use fontdue::Font;

/// Pixel size of a font rendered at `point_size` on a `dpi` display
pub fn pixel_size(point_size: f32, dpi: f32) -> f32 {
    point_size * dpi / 72.0
}

/// Ascent used for vertical centring, in whole pixels
pub fn ascent_px(point_size: f32, dpi: f32) -> u32 {
    pixel_size(point_size, dpi).ceil().max(0.0) as u32
}

/// Width of `text` in pixels: glyph advances plus pairwise kerning
pub fn measure_text(font: &Font, text: &str, px: f32) -> f32 {
    let mut width = 0.0;
    let mut previous = None;

    for ch in text.chars() {
        if let Some(prev) = previous {
            width += font.horizontal_kern(prev, ch, px).unwrap_or(0.0);
        }
        width += font.metrics(ch, px).advance_width;
        previous = Some(ch);
    }

    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FontFace;
    use approx::assert_relative_eq;

    #[test]
    fn test_pixel_size_at_72_dpi_is_point_size() {
        assert_relative_eq!(pixel_size(96.0, 72.0), 96.0);
        assert_relative_eq!(pixel_size(24.0, 144.0), 48.0);
        assert_eq!(ascent_px(96.0, 72.0), 96);
        assert_eq!(ascent_px(10.5, 72.0), 11);
    }

    #[test]
    fn test_measure_empty_string() {
        let face = FontFace::builtin_monospace().unwrap();
        assert_eq!(measure_text(face.font(), "", 24.0), 0.0);
    }

    #[test]
    fn test_measure_grows_with_text() {
        let face = FontFace::builtin_monospace().unwrap();
        let font = face.font();
        let loading = measure_text(font, "Loading", 96.0);
        let dotted = measure_text(font, "Loading...", 96.0);
        assert!(loading > 0.0);
        assert!(dotted > loading);
    }

    #[test]
    fn test_measure_scales_with_size() {
        let face = FontFace::builtin_monospace().unwrap();
        let small = measure_text(face.font(), "1080px * 1920px", 24.0);
        let large = measure_text(face.font(), "1080px * 1920px", 48.0);
        assert_relative_eq!(large, small * 2.0, max_relative = 0.01);
    }

    #[test]
    fn test_monospace_advances_are_uniform() {
        let face = FontFace::builtin_monospace().unwrap();
        let narrow = measure_text(face.font(), "iiii", 32.0);
        let wide = measure_text(face.font(), "MMMM", 32.0);
        assert_relative_eq!(narrow, wide, epsilon = 1e-3);
    }
}
