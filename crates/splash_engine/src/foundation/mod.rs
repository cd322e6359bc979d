//! Foundation module - Core utilities and types
//!
//! - Time management (frame timer, logical clock)
//! - Logging utilities

pub mod time;
pub mod logging;
