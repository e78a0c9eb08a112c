//! Image loading and saving.

use std::path::Path;

use super::Image;
use crate::error::{Result, StencilError};

/// Load an image from a local file into an RGBA buffer.
pub fn load_image(path: &Path) -> Result<Image> {
    let loaded = image::open(path).map_err(|e| StencilError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read image: {}", e),
    })?;
    Ok(loaded.to_rgba8())
}

/// Write an image to disk; the format is chosen from the file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| StencilError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })
}
