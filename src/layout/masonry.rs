//! Greedy shortest-column assignment
//!
//! Each image, in input order, goes to the column whose running bottom edge
//! is currently lowest on the page. Ties go to the lowest column index. The
//! result is deterministic but order-sensitive: reordering the input
//! changes the layout.

use crate::layout::sizing::{ImageDimensions, ScaledSize};

/// Running bottom edge of every column during assignment
///
/// Heights start at the top padding and only ever grow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnAccumulators {
    heights: Vec<u32>,
}

impl ColumnAccumulators {
    /// Fresh accumulators for `count` columns, all starting at `top`
    pub fn new(count: usize, top: u32) -> Self {
        Self {
            heights: vec![top; count],
        }
    }

    /// Current bottom edge of every column
    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    /// Index of the shortest column, first minimum wins
    pub fn shortest(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (column, &height) in self.heights.iter().enumerate() {
            match best {
                Some((_, lowest)) if lowest <= height => {}
                _ => best = Some((column, height)),
            }
        }
        best.map(|(column, _)| column)
    }

    /// Tallest column bottom edge, zero when there are no columns
    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    // Returns the column's height before growing it
    fn advance(&mut self, column: usize, amount: u32) -> Option<u32> {
        let height = self.heights.get_mut(column)?;
        let top = *height;
        *height = height.saturating_add(amount);
        Some(top)
    }
}

/// Column and top edge chosen for one image before vertical redistribution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProvisionalPlacement {
    /// Column index
    pub column: usize,
    /// Running column height at the moment of placement
    pub y: u32,
}

/// Outcome of one assignment pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// One entry per input slot; `None` for images without source area
    pub placements: Vec<Option<ProvisionalPlacement>>,
    /// Column heights after every image was stacked
    pub columns: ColumnAccumulators,
}

impl Assignment {
    /// Tallest column bottom edge, including the initial top padding
    pub fn max_height(&self) -> u32 {
        self.columns.max_height()
    }
}

/// Heights to stack, one per image, with `None` for images without source area
///
/// Only the original dimensions decide exclusion. An image whose scaled
/// height truncated to zero still occupies its column and gap.
pub fn stacking_heights(
    dimensions: &[ImageDimensions],
    sizes: &[ScaledSize],
) -> Vec<Option<u32>> {
    dimensions
        .iter()
        .zip(sizes)
        .map(|(dims, size)| (!dims.is_empty()).then_some(size.height))
        .collect()
}

/// Stack `heights` onto the shortest columns in order
///
/// Each present height grows its column by itself plus `vertical_gap`,
/// zero included. `None` slots keep their place in the output but are not
/// placed.
pub fn assign(
    heights: &[Option<u32>],
    mut columns: ColumnAccumulators,
    vertical_gap: u32,
) -> Assignment {
    let placements = heights
        .iter()
        .map(|&height| {
            let height = height?;
            let column = columns.shortest()?;
            let y = columns.advance(column, height.saturating_add(vertical_gap))?;
            Some(ProvisionalPlacement { column, y })
        })
        .collect();

    Assignment {
        placements,
        columns,
    }
}
