//! Full layout computation over one ordered image list
//!
//! Runs column planning, both scaling passes, the final assignment and
//! vertical redistribution against a single dimensions slice, so the
//! measuring pass and the placing pass always see the same order.

use crate::io::configuration::CollageConfig;
use crate::layout::columns::ColumnSpec;
use crate::layout::distribution::{FinalPlacement, VerticalDistributor};
use crate::layout::masonry::{ColumnAccumulators, assign, stacking_heights};
use crate::layout::sizing::{ImageDimensions, ScaledSize, SizeFitter};
use log::info;

/// Geometry for every image of one collage, in input order
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Column grid shared by all images
    pub columns: ColumnSpec,
    /// Sizes fitted to the column width
    pub base_sizes: Vec<ScaledSize>,
    /// Final sizes after the global vertical factor
    pub sizes: Vec<ScaledSize>,
    /// Global vertical factor
    pub global_scale: f64,
    /// Final column and top edge; `None` for images without source area
    pub placements: Vec<Option<FinalPlacement>>,
}

impl LayoutPlan {
    /// Lay out `dimensions` on the configured canvas
    ///
    /// Returns `None` when there are no images to lay out.
    pub fn compute(dimensions: &[ImageDimensions], config: &CollageConfig) -> Option<Self> {
        if dimensions.is_empty() {
            return None;
        }

        let padding = config.outer_padding;
        let columns = ColumnSpec::plan(dimensions.len(), config.canvas_width, padding);
        info!(
            "Using {} columns, each {}px wide",
            columns.count, columns.width
        );

        let fitter = SizeFitter {
            column_count: columns.count,
            column_width: columns.width,
            padding,
            vertical_gap: config.vertical_gap,
            available_height: config.available_height(),
        };
        let fitted = fitter.fit(dimensions);
        info!("Global vertical scale factor: {:.3}", fitted.global_scale);

        let assignment = assign(
            &stacking_heights(dimensions, &fitted.fitted),
            ColumnAccumulators::new(columns.count, padding),
            config.vertical_gap,
        );

        let distributor = VerticalDistributor {
            column_count: columns.count,
            canvas_height: config.canvas_height,
            padding,
        };
        let placements = distributor.distribute(&assignment.placements, &fitted.fitted);

        Some(Self {
            columns,
            base_sizes: fitted.base,
            sizes: fitted.fitted,
            global_scale: fitted.global_scale,
            placements,
        })
    }

    /// Number of images the plan covers, placed or not
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the plan covers no images
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Final size and top edge of each image placed in `column`, in input order
    pub fn column_sizes(&self, column: usize) -> Vec<(ScaledSize, f64)> {
        self.placements
            .iter()
            .zip(&self.sizes)
            .filter_map(|(placement, size)| {
                placement
                    .filter(|p| p.column == column)
                    .map(|p| (*size, p.y))
            })
            .collect()
    }
}
