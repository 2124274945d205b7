//! Rendering module for launchgen.
//!
//! Draws the starfield background and hexagon logo canvases and writes
//! them out as PNG files.

mod background;
mod logo;
mod png;
mod raster;

pub use background::{draw_stars, generate_background};
pub use logo::{generate_logo, logo_hexagon};
pub use png::write_png;
pub use raster::{draw_line, fill_hexagon, outline_hexagon};
