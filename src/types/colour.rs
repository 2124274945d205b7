//! Colour type and the fixed launch-screen colours.

use image::{Rgb, Rgba};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque grey with all three channels set to `level`.
    pub const fn grey(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Deep space blue used as the background base.
    pub const SPACE: Self = Self::rgb(5, 5, 20);

    /// Translucent cyan filling the outer hexagon.
    pub const CORE_GLOW: Self = Self::new(0, 204, 255, 200);

    /// Opaque cyan used for the outer outline and inner hexagon.
    pub const CORE: Self = Self::rgb(0, 255, 255);

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to an opaque `image` pixel, dropping alpha.
    pub fn to_rgb_pixel(self) -> Rgb<u8> {
        Rgb([self.r, self.g, self.b])
    }

    /// Convert to an `image` pixel with alpha.
    pub fn to_rgba_pixel(self) -> Rgba<u8> {
        Rgba(self.to_rgba())
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self::new(r, g, b, a)
    }
}

impl From<Rgb<u8>> for Colour {
    fn from(px: Rgb<u8>) -> Self {
        let [r, g, b] = px.0;
        Self::rgb(r, g, b)
    }
}
