//! Hexagonal station-core logo generation.

use image::RgbaImage;

use crate::error::{ensure_dimension, Result};
use crate::types::{Colour, Hexagon};

use super::raster::{fill_hexagon, outline_hexagon};

/// The outer hexagon of a logo of the given size.
///
/// Centred on `(size/2, size/2)` with circumradius `size/3`, both using
/// integer division.
pub fn logo_hexagon(size: u32) -> Hexagon {
    let centre = (size / 2) as f64;
    Hexagon::new(centre, centre, (size / 3) as f64)
}

/// Generate a transparent `size` x `size` logo.
pub fn generate_logo(size: u32) -> Result<RgbaImage> {
    ensure_dimension("size", size)?;

    let mut img = RgbaImage::from_pixel(size, size, Colour::TRANSPARENT.to_rgba_pixel());

    let outer = logo_hexagon(size);
    fill_hexagon(&mut img, &outer, Colour::CORE_GLOW);
    outline_hexagon(&mut img, &outer, Colour::CORE);

    fill_hexagon(&mut img, &outer.inner(), Colour::CORE);

    Ok(img)
}
