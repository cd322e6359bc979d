//! Drawable surface dimensions

/// Pixel and point size of the current drawable
///
/// Points are device-independent: `width_pt = width_px / pixels_per_pt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    /// Width in pixels
    pub width_px: u32,
    /// Height in pixels
    pub height_px: u32,
    /// Width in points
    pub width_pt: f32,
    /// Height in points
    pub height_pt: f32,
    /// Pixel density
    pub pixels_per_pt: f32,
}

impl SurfaceSize {
    /// Describe a surface from its pixel size and density
    ///
    /// Non-positive or non-finite densities are treated as 1.0.
    pub fn new(width_px: u32, height_px: u32, pixels_per_pt: f32) -> Self {
        let pixels_per_pt = if pixels_per_pt.is_finite() && pixels_per_pt > 0.0 {
            pixels_per_pt
        } else {
            1.0
        };
        Self {
            width_px,
            height_px,
            width_pt: width_px as f32 / pixels_per_pt,
            height_pt: height_px as f32 / pixels_per_pt,
            pixels_per_pt,
        }
    }

    /// True while the window is minimized or not yet sized
    pub fn is_empty(&self) -> bool {
        self.width_px == 0 || self.height_px == 0
    }
}
