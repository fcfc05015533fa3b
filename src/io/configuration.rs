//! Layout constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use image::Rgba;

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1000;
/// Default canvas background (opaque white)
pub const DEFAULT_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// Spacing defaults
/// Padding between the canvas edge and the columns, and between columns
pub const DEFAULT_OUTER_PADDING: u32 = 40;
/// Vertical gap added below each image during column assignment
pub const DEFAULT_VERTICAL_GAP: u32 = 20;
/// Horizontal gap between the inspiration photo and the collage
pub const DEFAULT_MERGE_GAP: u32 = 40;

// Column count thresholds
/// Largest image count laid out in two columns
pub const TWO_COLUMN_LIMIT: usize = 4;
/// Largest image count laid out in three columns
pub const THREE_COLUMN_LIMIT: usize = 9;
/// Column count used above the three column limit
pub const MAX_COLUMNS: u32 = 4;

// Input discovery
/// File extensions accepted as product images (lowercase)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
/// Input directory used when neither an argument nor `INPUT_DIR` is given
pub const DEFAULT_INPUT_DIR: &str = "out";
/// Output file used when neither an argument nor `OUTPUT_FILE` is given
pub const DEFAULT_OUTPUT_FILE: &str = "collages/collage.png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;

/// Canvas geometry and spacing for one collage run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollageConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Fill color for the canvas and the merge gap
    pub background: Rgba<u8>,
    /// Outer padding, also used as the gutter between columns
    pub outer_padding: u32,
    /// Gap added below each image while balancing columns
    pub vertical_gap: u32,
    /// Gap between an inspiration photo and the collage
    pub merge_gap: u32,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            background: Rgba(DEFAULT_BACKGROUND),
            outer_padding: DEFAULT_OUTER_PADDING,
            vertical_gap: DEFAULT_VERTICAL_GAP,
            merge_gap: DEFAULT_MERGE_GAP,
        }
    }
}

impl CollageConfig {
    /// Vertical space inside the top and bottom padding
    pub const fn available_height(&self) -> i64 {
        self.canvas_height as i64 - 2 * self.outer_padding as i64
    }

    /// Check that every column count leaves room for columns and content
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either canvas dimension is zero
    /// - The canvas is too narrow to fit the maximum column count with padding
    /// - The canvas is too short to leave space inside the vertical padding
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(invalid_parameter(
                "canvas_width",
                &self.canvas_width,
                &"must be positive",
            ));
        }
        if self.canvas_height == 0 {
            return Err(invalid_parameter(
                "canvas_height",
                &self.canvas_height,
                &"must be positive",
            ));
        }

        // Every column needs at least one pixel at the maximum column count
        let minimum_width =
            u64::from(self.outer_padding) * u64::from(MAX_COLUMNS + 1) + u64::from(MAX_COLUMNS);
        if u64::from(self.canvas_width) < minimum_width {
            return Err(invalid_parameter(
                "canvas_width",
                &self.canvas_width,
                &format!(
                    "must be at least {minimum_width} to fit {MAX_COLUMNS} columns with padding {}",
                    self.outer_padding
                ),
            ));
        }

        if self.available_height() <= 0 {
            return Err(invalid_parameter(
                "canvas_height",
                &self.canvas_height,
                &format!("must exceed twice the padding ({})", self.outer_padding),
            ));
        }

        Ok(())
    }
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color, leading `#` optional
///
/// # Errors
///
/// Returns an error if the string is not six or eight hex digits
pub fn parse_hex_color(value: &str) -> Result<Rgba<u8>> {
    let digits = value.strip_prefix('#').unwrap_or(value);
    let invalid = || invalid_parameter("background", &value, &"expected #RRGGBB or #RRGGBBAA");

    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let mut channels = [255u8; 4];
    for (slot, index) in channels.iter_mut().zip((0..digits.len()).step_by(2)) {
        let pair = digits.get(index..index + 2).ok_or_else(invalid)?;
        *slot = u8::from_str_radix(pair, 16).map_err(|_parse_error| invalid())?;
    }

    Ok(Rgba(channels))
}
