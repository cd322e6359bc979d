//! Rendering
//!
//! Text is laid out and rasterized on the CPU ([`text`]), then handed to a
//! [`SpriteBackend`] as one textured quad per band. [`gl`] holds the OpenGL
//! backend and [`window`] the GLFW window that owns its context.

pub mod backend;
pub mod gl;
pub mod overlay;
pub mod surface;
pub mod text;
pub mod window;

pub use backend::{BackendResult, Quad, SpriteBackend, TextureId};
pub use gl::GlSpriteBackend;
pub use overlay::TextOverlayRenderer;
pub use surface::SurfaceSize;
pub use window::{Window, WindowError};
pub use image::RgbaImage;

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shader compilation or program linking failed
    #[error("Shader error: {0}")]
    Shader(String),

    /// A GPU object could not be created
    #[error("Resource creation failed: {0}")]
    Resource(String),

    /// Texture upload failed
    #[error("Texture upload failed: {0}")]
    Upload(String),

    /// Drawing failed
    #[error("Draw failed: {0}")]
    Draw(String),

    /// The handle does not name a live texture
    #[error("Unknown texture {0:?}")]
    UnknownTexture(TextureId),
}
