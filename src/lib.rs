//! launchgen - Launch screen asset generator
//!
//! Draws a starfield background and a hexagonal station-core logo at
//! 1x/2x/3x resolutions and writes them into asset catalog imagesets.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use catalog::{write_contents, ImagesetContents};
pub use cli::generate::{generate_catalog, Summary};
pub use error::{LaunchError, Result};
pub use render::{generate_background, generate_logo, write_png};
pub use types::{BackgroundAsset, Colour, Hexagon, LogoAsset, Star};
