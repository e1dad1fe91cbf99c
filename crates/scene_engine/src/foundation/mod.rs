//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types (2D vectors, colours)
//! - Handle types for the display list
//! - Frame and scene time
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
