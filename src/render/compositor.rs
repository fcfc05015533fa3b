//! Pastes scaled cutouts onto the background canvas

use crate::io::configuration::CollageConfig;
use crate::io::progress::ProgressManager;
use crate::io::source::OrderedImages;
use crate::layout::columns::ColumnSpec;
use crate::layout::distribution::FinalPlacement;
use crate::layout::plan::LayoutPlan;
use crate::layout::sizing::ScaledSize;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{debug, info};

/// Final pixel position of one image on the canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Column index
    pub column: usize,
    /// Left edge, centered within the column
    pub x: i64,
    /// Top edge, truncated from the distributed position
    pub y: i64,
}

impl Placement {
    /// Fix a distributed placement to whole pixels for an image `width` wide
    pub fn finalize(columns: &ColumnSpec, placement: FinalPlacement, width: u32) -> Self {
        Self {
            column: placement.column,
            x: columns.centered_x(placement.column, width),
            // Rounding happens here and nowhere earlier
            y: placement.y.trunc() as i64,
        }
    }
}

/// Canvas of the given size filled with `background`
pub fn blank_canvas(width: u32, height: u32, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background)
}

/// Resample `pixels` to `size` with a Lanczos filter, copying when unchanged
pub fn resize_to(pixels: &RgbaImage, size: ScaledSize) -> RgbaImage {
    if pixels.dimensions() == (size.width, size.height) {
        return pixels.clone();
    }
    imageops::resize(pixels, size.width, size.height, FilterType::Lanczos3)
}

/// Paste `image` at `(x, y)` using its own alpha channel as the mask
///
/// Every channel, alpha included, is mixed as `src * m + dst * (1 - m)` with
/// `m = src_alpha / 255`. Pixels falling outside the canvas are clipped.
pub fn paste_masked(canvas: &mut RgbaImage, image: &RgbaImage, x: i64, y: i64) {
    for (column, row, pixel) in image.enumerate_pixels() {
        let (Ok(target_x), Ok(target_y)) = (
            u32::try_from(x + i64::from(column)),
            u32::try_from(y + i64::from(row)),
        ) else {
            continue;
        };
        if let Some(target) = canvas.get_pixel_mut_checked(target_x, target_y) {
            blend_masked(target, *pixel);
        }
    }
}

fn blend_masked(target: &mut Rgba<u8>, source: Rgba<u8>) {
    let Rgba([_, _, _, alpha]) = source;
    let mask = u32::from(alpha);
    for (dst, src) in target.0.iter_mut().zip(source.0) {
        *dst = div_255(u32::from(src) * mask + u32::from(*dst) * (255 - mask));
    }
}

// Rounded division by 255, exact for multiples of 255
fn div_255(value: u32) -> u8 {
    let biased = value + 128;
    u8::try_from(((biased >> 8) + biased) >> 8).unwrap_or(u8::MAX)
}

/// Every placed image's pixel position, `None` for images that are skipped
pub fn finalize_placements(plan: &LayoutPlan) -> Vec<Option<Placement>> {
    plan.placements
        .iter()
        .zip(&plan.sizes)
        .map(|(placement, size)| {
            placement
                .filter(|_| !size.is_empty())
                .map(|p| Placement::finalize(&plan.columns, p, size.width))
        })
        .collect()
}

/// Paste every planned image onto a fresh canvas
///
/// `images` must be the same ordered list the plan was computed from.
pub fn render(
    images: &OrderedImages,
    plan: &LayoutPlan,
    config: &CollageConfig,
    progress: &ProgressManager,
) -> RgbaImage {
    let mut canvas = blank_canvas(config.canvas_width, config.canvas_height, config.background);
    let placements = finalize_placements(plan);
    progress.start_stage("Placing", images.len());

    for ((image, size), placement) in images.iter().zip(&plan.sizes).zip(placements) {
        if let Some(placement) = placement {
            let resized = resize_to(image.pixels(), *size);
            paste_masked(&mut canvas, &resized, placement.x, placement.y);
            debug!(
                "Placed {} at ({}, {}) in column {}",
                image.id(),
                placement.x,
                placement.y,
                placement.column
            );
        }
        progress.advance(image.id());
    }

    progress.finish_stage();
    canvas
}

/// Lay out and render `images`, or `None` when there are none
pub fn compose_collage(
    images: &OrderedImages,
    config: &CollageConfig,
    progress: &ProgressManager,
) -> Option<RgbaImage> {
    info!("Arranging {} images in masonry layout", images.len());
    let dimensions = images.dimensions();
    let plan = LayoutPlan::compute(&dimensions, config)?;

    for ((image, base), original) in images.iter().zip(&plan.base_sizes).zip(&dimensions) {
        debug!(
            "Base size {}: {}x{} -> {}x{}",
            image.id(),
            original.width,
            original.height,
            base.width,
            base.height
        );
    }

    Some(render(images, &plan, config, progress))
}
