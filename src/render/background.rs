//! Starfield background generation.

use image::RgbImage;
use rand::Rng;

use crate::error::{ensure_dimension, Result};
use crate::types::{scatter_stars, Colour, Star, STAR_COUNT};

/// Generate an opaque starfield of `width` x `height`.
pub fn generate_background<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<RgbImage> {
    ensure_dimension("width", width)?;
    ensure_dimension("height", height)?;

    let mut img = RgbImage::from_pixel(width, height, Colour::SPACE.to_rgb_pixel());
    let stars = scatter_stars(rng, width, height, STAR_COUNT);
    draw_stars(&mut img, &stars);

    Ok(img)
}

/// Plot each star as a single pixel. Stars outside the canvas are skipped.
pub fn draw_stars(img: &mut RgbImage, stars: &[Star]) {
    for star in stars {
        if star.x < img.width() && star.y < img.height() {
            img.put_pixel(star.x, star.y, star.colour().to_rgb_pixel());
        }
    }
}
