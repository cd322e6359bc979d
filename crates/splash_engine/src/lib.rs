//! # Splash Engine
//!
//! A small OpenGL engine for loading screens. It opens a window, loads a font
//! (a bundled TrueType asset or a built-in monospace fallback) and draws text
//! bands rasterized on the CPU as textured quads.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splash_engine::prelude::*;
//!
//! struct MyScreen;
//!
//! impl Application for MyScreen {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _now: ClockTime) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, _surface: &SurfaceSize, _backend: &mut dyn SpriteBackend) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     Engine::run(SplashConfig::default(), &mut MyScreen)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod core;
pub mod config;
pub mod foundation;
pub mod assets;
pub mod render;

mod application;
mod engine;

pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineError,
        assets::{AssetManager, FontFace, FontLoader},
        config::Config,
        core::{FontFallback, SplashConfig},
        foundation::time::{ClockTime, unix_seconds},
        render::{SpriteBackend, SurfaceSize, TextOverlayRenderer},
    };
}
