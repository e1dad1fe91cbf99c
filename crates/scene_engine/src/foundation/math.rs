//! Math utilities and types
//!
//! Provides the small set of math types a 2D scene needs.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type (used for normalized RGB triples)
pub type Vec3 = Vector3<f32>;

/// Packed `0xRRGGBB` colour, the format stage background colours are given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    /// Opaque black, the default scene clear colour
    pub const BLACK: Self = Self(0x00_0000);

    /// Opaque white
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Build a colour from 8-bit channels
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Channels normalized to `0.0..=1.0`, the form renderers clear with
    pub fn to_rgb(self) -> Vec3 {
        Vec3::new(
            f32::from(self.r()) / 255.0,
            f32::from(self.g()) / 255.0,
            f32::from(self.b()) / 255.0,
        )
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
