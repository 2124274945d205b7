//! Core types for launchgen.

pub mod asset;
pub mod colour;
pub mod hexagon;
pub mod star;

pub use asset::{BackgroundAsset, LogoAsset, BACKGROUNDS, LOGOS};
pub use colour::Colour;
pub use hexagon::Hexagon;
pub use star::{scatter_stars, Star, STAR_COUNT};
