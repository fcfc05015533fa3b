//! Image decoding to RGBA and lossless PNG export

use crate::io::error::{CollageError, Result};
use image::RgbaImage;
use std::path::Path;

/// Decode any supported image file into an RGBA buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn open_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Save an RGBA buffer as PNG, creating missing parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| CollageError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
