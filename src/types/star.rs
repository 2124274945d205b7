//! Stars scattered across a background.

use std::ops::RangeInclusive;

use rand::Rng;

use super::Colour;

/// Number of stars drawn on every background.
pub const STAR_COUNT: usize = 100;

/// Grayscale brightness range for a star.
pub const BRIGHTNESS: RangeInclusive<u8> = 100..=255;

/// A single-pixel star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub x: u32,
    pub y: u32,
    pub brightness: u8,
}

impl Star {
    /// Pick a random star within `width` x `height`.
    ///
    /// Both dimensions must be non-zero.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
        Self {
            x: rng.gen_range(0..width),
            y: rng.gen_range(0..height),
            brightness: rng.gen_range(BRIGHTNESS),
        }
    }

    /// The star's grey colour.
    pub fn colour(&self) -> Colour {
        Colour::grey(self.brightness)
    }
}

/// Scatter `count` stars uniformly within `width` x `height`.
pub fn scatter_stars<R: Rng + ?Sized>(
    rng: &mut R,
    width: u32,
    height: u32,
    count: usize,
) -> Vec<Star> {
    (0..count).map(|_| Star::random(rng, width, height)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scatter_count_and_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = scatter_stars(&mut rng, 320, 568, STAR_COUNT);

        assert_eq!(stars.len(), 100);
        for star in &stars {
            assert!(star.x < 320);
            assert!(star.y < 568);
            assert!(BRIGHTNESS.contains(&star.brightness));
        }
    }

    #[test]
    fn test_scatter_tiny_canvas() {
        let mut rng = StdRng::seed_from_u64(1);
        let stars = scatter_stars(&mut rng, 1, 1, STAR_COUNT);
        assert!(stars.iter().all(|s| s.x == 0 && s.y == 0));
    }

    #[test]
    fn test_scatter_seeded_is_reproducible() {
        let a = scatter_stars(&mut StdRng::seed_from_u64(42), 100, 100, 10);
        let b = scatter_stars(&mut StdRng::seed_from_u64(42), 100, 100, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_star_colour() {
        let star = Star {
            x: 0,
            y: 0,
            brightness: 180,
        };
        assert_eq!(star.colour(), Colour::rgb(180, 180, 180));
    }
}
