//! Two-pass image scaling: fit to column width, then fit total content height
//!
//! Pass 1 shrinks each image to the column width without upscaling. How tall
//! the content ends up depends on which column each image lands in, so pass 2
//! runs a trial assignment on the pass 1 sizes, measures the tallest column,
//! and shrinks every image by one shared factor until the content fits inside
//! the vertical padding. Neither pass ever enlarges an image.

use crate::layout::masonry::{ColumnAccumulators, assign, stacking_heights};

/// Original pixel dimensions of a source image
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ImageDimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageDimensions {
    /// Create dimensions from width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Image size after scaling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaledSize {
    /// Scaled width in pixels
    pub width: u32,
    /// Scaled height in pixels
    pub height: u32,
}

impl ScaledSize {
    /// Size that is excluded from placement
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a size from width and height
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether either side is zero
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Multiply both sides by `scale`, truncating toward zero
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: truncate(f64::from(self.width) * scale),
            height: truncate(f64::from(self.height) * scale),
        }
    }
}

fn truncate(value: f64) -> u32 {
    // Float-to-int `as` saturates, and NaN maps to zero
    value.floor() as u32
}

/// Pass 1: shrink to `column_width` wide, never upscaling
pub fn fit_to_column(dimensions: ImageDimensions, column_width: u32) -> ScaledSize {
    if dimensions.is_empty() {
        return ScaledSize::ZERO;
    }

    let scale = (f64::from(column_width) / f64::from(dimensions.width)).min(1.0);
    ScaledSize::new(dimensions.width, dimensions.height).scaled(scale)
}

/// Pass 2 factor from the tallest measured column
///
/// `max_column_height` includes the top padding every column starts at.
/// Content that already fits, or has no height, keeps a factor of one.
pub fn global_scale(max_column_height: u32, padding: u32, available_height: i64) -> f64 {
    let content_height = i64::from(max_column_height) - i64::from(padding);
    if content_height <= 0 {
        return 1.0;
    }
    (available_height as f64 / content_height as f64).min(1.0)
}

/// Sizes produced by both scaling passes, in input order
#[derive(Clone, Debug, PartialEq)]
pub struct FittedSizes {
    /// Pass 1 sizes, fitted to the column width
    pub base: Vec<ScaledSize>,
    /// Pass 2 sizes, after the global vertical factor
    pub fitted: Vec<ScaledSize>,
    /// Shared vertical factor applied in pass 2
    pub global_scale: f64,
}

/// Scales images so they fit both their column and the canvas height
#[derive(Clone, Copy, Debug)]
pub struct SizeFitter {
    /// Number of columns used for the measuring pass
    pub column_count: usize,
    /// Column width images are fitted to
    pub column_width: u32,
    /// Top padding columns start at
    pub padding: u32,
    /// Gap added below each image while measuring
    pub vertical_gap: u32,
    /// Vertical space inside the top and bottom padding
    pub available_height: i64,
}

impl SizeFitter {
    /// Run both passes over `dimensions`, which must already be in layout order
    pub fn fit(&self, dimensions: &[ImageDimensions]) -> FittedSizes {
        let base: Vec<ScaledSize> = dimensions
            .iter()
            .map(|&dims| fit_to_column(dims, self.column_width))
            .collect();

        let measured = assign(
            &stacking_heights(dimensions, &base),
            ColumnAccumulators::new(self.column_count, self.padding),
            self.vertical_gap,
        );
        let scale = global_scale(measured.max_height(), self.padding, self.available_height);

        let fitted = base.iter().map(|size| size.scaled(scale)).collect();

        FittedSizes {
            base,
            fitted,
            global_scale: scale,
        }
    }
}
