//! Product cutouts and the single ordering shared by every layout pass

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{CollageError, Result, invalid_input};
use crate::io::image::open_rgba;
use crate::io::progress::ProgressManager;
use crate::layout::sizing::ImageDimensions;
use image::RgbaImage;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// One decoded product cutout
#[derive(Clone, Debug)]
pub struct SourceImage {
    id: String,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Wrap an RGBA buffer under an identifier
    pub fn new(id: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            id: id.into(),
            pixels,
        }
    }

    /// Identifier used for ordering and logging
    pub fn id(&self) -> &str {
        &self.id
    }

    /// RGBA pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Original pixel dimensions
    pub fn dimensions(&self) -> ImageDimensions {
        let (width, height) = self.pixels.dimensions();
        ImageDimensions::new(width, height)
    }
}

/// Source images sorted once by identifier
///
/// Both scaling passes and the compositor read this same sequence, so the
/// measured content height always matches the final placement.
#[derive(Clone, Debug, Default)]
pub struct OrderedImages {
    images: Vec<SourceImage>,
}

impl OrderedImages {
    /// Sort images lexicographically by identifier
    pub fn new(mut images: Vec<SourceImage>) -> Self {
        images.sort_by(|a, b| a.id.cmp(&b.id));
        Self { images }
    }

    /// Number of images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterate in layout order
    pub fn iter(&self) -> std::slice::Iter<'_, SourceImage> {
        self.images.iter()
    }

    /// Original dimensions in layout order
    pub fn dimensions(&self) -> Vec<ImageDimensions> {
        self.images.iter().map(SourceImage::dimensions).collect()
    }
}

impl<'a> IntoIterator for &'a OrderedImages {
    type Item = &'a SourceImage;
    type IntoIter = std::slice::Iter<'a, SourceImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Whether the path carries one of the accepted image extensions
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
}

/// List image files directly inside `dir`, sorted by path
///
/// # Errors
///
/// Returns an error if:
/// - `dir` is not a directory
/// - The directory or one of its entries cannot be read
pub fn collect_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(invalid_input(&format!(
            "'{}' is not a directory",
            dir.display()
        )));
    }

    let read_error = |e: std::io::Error| CollageError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && is_image_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Decode one file into a source image identified by its file name
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded
pub fn load_source_image(path: &Path) -> Result<SourceImage> {
    let pixels = open_rgba(path)?;
    let id = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned();
    Ok(SourceImage::new(id, pixels))
}

/// Load every image in `dir`, skipping files that fail to decode
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed
pub fn load_directory(dir: &Path, progress: &ProgressManager) -> Result<OrderedImages> {
    let paths = collect_image_paths(dir)?;
    progress.start_stage("Loading", paths.len());

    let mut images = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_source_image(path) {
            Ok(image) => {
                debug!(
                    "Loaded {} ({}x{})",
                    image.id(),
                    image.pixels().width(),
                    image.pixels().height()
                );
                progress.advance(image.id());
                images.push(image);
            }
            Err(error) => {
                warn!("Skipping {}: {error}", path.display());
                progress.advance("");
            }
        }
    }

    progress.finish_stage();
    Ok(OrderedImages::new(images))
}
