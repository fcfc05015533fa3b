//! Column count and width selection from image count and canvas width

use crate::io::configuration::{MAX_COLUMNS, THREE_COLUMN_LIMIT, TWO_COLUMN_LIMIT};

/// Uniform column grid derived once per layout run
///
/// Columns are separated by the outer padding, which also surrounds the
/// grid on the left and right, so `width = (canvas_width - padding * (count + 1)) / count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Number of columns (2, 3 or 4)
    pub count: usize,
    /// Pixel width of every column
    pub width: u32,
    /// Outer padding and inter-column gutter
    pub padding: u32,
}

impl ColumnSpec {
    /// Plan columns for `image_count` images on a canvas `canvas_width` wide
    pub fn plan(image_count: usize, canvas_width: u32, padding: u32) -> Self {
        let count = Self::column_count_for(image_count);
        let gutters = u64::from(padding) * (count as u64 + 1);
        let width = u64::from(canvas_width).saturating_sub(gutters) / count as u64;

        Self {
            count,
            width: u32::try_from(width).unwrap_or(u32::MAX),
            padding,
        }
    }

    /// Column count for an image count: 2 up to four, 3 up to nine, 4 beyond
    pub const fn column_count_for(image_count: usize) -> usize {
        if image_count <= TWO_COLUMN_LIMIT {
            2
        } else if image_count <= THREE_COLUMN_LIMIT {
            3
        } else {
            MAX_COLUMNS as usize
        }
    }

    /// Left pixel edge of a column
    pub const fn column_left(&self, column: usize) -> i64 {
        self.padding as i64 + column as i64 * (self.width as i64 + self.padding as i64)
    }

    /// Left pixel edge that centers an item `item_width` wide within a column
    pub const fn centered_x(&self, column: usize, item_width: u32) -> i64 {
        self.column_left(column) + (self.width as i64 - item_width as i64).div_euclid(2)
    }
}
