//! Cover-crops an inspiration photo and places it beside the collage

use crate::layout::sizing::ScaledSize;
use crate::render::compositor::{blank_canvas, resize_to};
use image::imageops;
use image::{Rgba, RgbaImage};

/// Scale and crop window that turns a photo into an exact target size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverCrop {
    /// Fill scale, `max(target_w / photo_w, target_h / photo_h)`
    pub scale: f64,
    /// Photo width after scaling
    pub scaled_width: u32,
    /// Photo height after scaling
    pub scaled_height: u32,
    /// Left edge of the centered crop
    pub left: u32,
    /// Top edge of the centered crop
    pub top: u32,
    /// Crop width, equal to the target width
    pub width: u32,
    /// Crop height, equal to the target height
    pub height: u32,
}

impl CoverCrop {
    /// Fill `target_width`x`target_height` with a `photo_width`x`photo_height` photo
    ///
    /// Returns `None` when either the photo or the target has no area.
    pub fn compute(
        photo_width: u32,
        photo_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> Option<Self> {
        if photo_width == 0 || photo_height == 0 || target_width == 0 || target_height == 0 {
            return None;
        }

        let scale = (f64::from(target_width) / f64::from(photo_width))
            .max(f64::from(target_height) / f64::from(photo_height));

        // Never fall a pixel short of the target after rounding
        let scaled_width = ((f64::from(photo_width) * scale).round() as u32).max(target_width);
        let scaled_height = ((f64::from(photo_height) * scale).round() as u32).max(target_height);

        Some(Self {
            scale,
            scaled_width,
            scaled_height,
            left: (scaled_width - target_width) / 2,
            top: (scaled_height - target_height) / 2,
            width: target_width,
            height: target_height,
        })
    }
}

/// Scale `photo` to cover the target and crop the center, or `None` if it has no area
pub fn cover_crop(photo: &RgbaImage, target_width: u32, target_height: u32) -> Option<RgbaImage> {
    let crop = CoverCrop::compute(photo.width(), photo.height(), target_width, target_height)?;
    let scaled = resize_to(
        photo,
        ScaledSize::new(crop.scaled_width, crop.scaled_height),
    );
    Some(imageops::crop_imm(&scaled, crop.left, crop.top, crop.width, crop.height).to_image())
}

/// Place a cover-cropped `photo` left of `canvas`, separated by `gap`
///
/// The photo is cropped to the canvas size. Returns `None` when the photo
/// has no area, in which case callers keep the unmerged canvas.
pub fn merge_cover(
    photo: &RgbaImage,
    canvas: &RgbaImage,
    gap: u32,
    background: Rgba<u8>,
) -> Option<RgbaImage> {
    let (target_width, target_height) = canvas.dimensions();
    let cropped = cover_crop(photo, target_width, target_height)?;

    let merged_width = target_width.checked_add(gap)?.checked_add(canvas.width())?;
    let mut merged = blank_canvas(merged_width, target_height, background);
    imageops::replace(&mut merged, &cropped, 0, 0);
    imageops::replace(
        &mut merged,
        canvas,
        i64::from(target_width) + i64::from(gap),
        0,
    );

    Some(merged)
}
