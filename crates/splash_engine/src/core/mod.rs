//! # Core Engine Module
//!
//! Shared configuration types used throughout the engine.

pub mod config;

pub use config::{
    AssetConfig,
    FontConfig,
    FontFallback,
    OverlayConfig,
    RenderConfig,
    SplashConfig,
    SpriteStyle,
    WindowConfig,
};
pub use crate::config::{Config, ConfigError};
