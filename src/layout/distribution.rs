//! Per-column vertical redistribution
//!
//! After assignment every column is stacked from the top. Redistribution
//! spreads each column over the canvas height instead:
//! - A lone item is centered on the full canvas height
//! - Edge columns use space-between, touching the top and bottom padding
//! - Middle columns use space-around, leaving equal margins above the first
//!   and below the last item
//!
//! Positions stay in floating point until paste time. Negative spacing
//! (content taller than the available height) is kept as is, so items in
//! such a column overlap.

use crate::layout::masonry::ProvisionalPlacement;
use crate::layout::sizing::ScaledSize;

/// How a column with several items spreads them vertically
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnRole {
    /// First or last column: space-between
    Edge,
    /// Any interior column: space-around
    Middle,
}

impl ColumnRole {
    /// Role of `column` among `column_count` columns
    pub const fn of(column: usize, column_count: usize) -> Self {
        if column == 0 || column + 1 == column_count {
            Self::Edge
        } else {
            Self::Middle
        }
    }

    /// Spacing between items for a column holding `item_count` items
    ///
    /// Edge columns divide the free space over `k - 1` gaps, middle
    /// columns over `k + 1`. Only meaningful for `item_count >= 2`.
    pub fn spacing(self, available: i64, total_height: u64, item_count: usize) -> f64 {
        let free = available as f64 - total_height as f64;
        let gaps = match self {
            Self::Edge => item_count.saturating_sub(1),
            Self::Middle => item_count + 1,
        };
        free / gaps.max(1) as f64
    }

    /// Top edge of the first item in the column
    pub fn first_offset(self, padding: u32, spacing: f64) -> f64 {
        match self {
            Self::Edge => f64::from(padding),
            Self::Middle => f64::from(padding) + spacing,
        }
    }
}

/// Column and final top edge of a placed image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FinalPlacement {
    /// Column index
    pub column: usize,
    /// Top edge in canvas pixels, not yet truncated
    pub y: f64,
}

/// Rewrites provisional column stacks into their final vertical layout
#[derive(Clone, Copy, Debug)]
pub struct VerticalDistributor {
    /// Number of columns in the layout
    pub column_count: usize,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Top and bottom padding
    pub padding: u32,
}

impl VerticalDistributor {
    /// Space between the top and bottom padding
    pub const fn available(&self) -> i64 {
        self.canvas_height as i64 - 2 * self.padding as i64
    }

    /// Image indices per column, in input order
    pub fn column_members(&self, placements: &[Option<ProvisionalPlacement>]) -> Vec<Vec<usize>> {
        let mut members = vec![Vec::new(); self.column_count];
        for (index, placement) in placements.iter().enumerate() {
            let Some(placement) = placement else {
                continue;
            };
            if let Some(column) = members.get_mut(placement.column) {
                column.push(index);
            }
        }
        members
    }

    /// Final placements for every image, `None` where the input had none
    pub fn distribute(
        &self,
        placements: &[Option<ProvisionalPlacement>],
        sizes: &[ScaledSize],
    ) -> Vec<Option<FinalPlacement>> {
        let mut result = vec![None; placements.len()];
        let height_of = |index: usize| sizes.get(index).map_or(0, |size| size.height);

        for (column, members) in self.column_members(placements).iter().enumerate() {
            match members.as_slice() {
                [] => {}
                &[only] => {
                    let y = (i64::from(self.canvas_height) - i64::from(height_of(only)))
                        .div_euclid(2);
                    if let Some(slot) = result.get_mut(only) {
                        *slot = Some(FinalPlacement {
                            column,
                            y: y as f64,
                        });
                    }
                }
                _ => {
                    let role = ColumnRole::of(column, self.column_count);
                    let total: u64 = members.iter().map(|&i| u64::from(height_of(i))).sum();
                    let spacing = role.spacing(self.available(), total, members.len());

                    let mut y = role.first_offset(self.padding, spacing);
                    for &index in members {
                        if let Some(slot) = result.get_mut(index) {
                            *slot = Some(FinalPlacement { column, y });
                        }
                        y += f64::from(height_of(index)) + spacing;
                    }
                }
            }
        }

        result
    }
}
