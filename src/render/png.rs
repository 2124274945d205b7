//! PNG output for generated canvases.

use std::path::Path;

use image::{EncodableLayout, ImageBuffer, ImageFormat, PixelWithColorType};

use crate::error::{LaunchError, Result};

/// Write a canvas to a PNG file, keeping its channel layout.
pub fn write_png<P>(img: &ImageBuffer<P, Vec<P::Subpixel>>, path: &Path) -> Result<()>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| LaunchError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
