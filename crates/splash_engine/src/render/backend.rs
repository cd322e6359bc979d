//! Backend abstraction for sprite drawing
//!
//! The overlay renderer only needs three operations from the GPU side: upload an
//! RGBA image as a texture, draw it as a quad, and free it again.

use image::RgbaImage;
use nalgebra::Point2;

use super::{RenderError, SurfaceSize};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to an uploaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Destination parallelogram in surface points
///
/// Given by three corners; the fourth is implied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Where texture (0, 0) lands
    pub top_left: Point2<f32>,
    /// Where texture (1, 0) lands
    pub top_right: Point2<f32>,
    /// Where texture (0, 1) lands
    pub bottom_left: Point2<f32>,
}

impl Quad {
    /// The implied fourth corner
    pub fn bottom_right(&self) -> Point2<f32> {
        self.top_right + (self.bottom_left - self.top_left)
    }
}

/// Sprite drawing backend
///
/// Textures are short-lived: every [`upload`](Self::upload) is paired with a
/// [`release`](Self::release) in the same frame.
pub trait SpriteBackend {
    /// Upload an image and return a handle to it
    fn upload(&mut self, image: &RgbaImage) -> BackendResult<TextureId>;

    /// Draw an uploaded texture onto `quad`
    fn draw(&mut self, texture: TextureId, surface: &SurfaceSize, quad: &Quad) -> BackendResult<()>;

    /// Free an uploaded texture; unknown handles are ignored
    fn release(&mut self, texture: TextureId);
}
