//! Luminance thresholding from interleaved colour samples to a [`BinaryGrid`].
//!
//! A pixel is foreground when the mean of its red, green and blue samples is
//! below [`LUMA_THRESHOLD`]. Alpha is ignored, matching how a canvas read-back
//! reports pixels.

use super::BinaryGrid;
use crate::error::{DetectError, Result};
use image::DynamicImage;

/// Mean RGB intensity (0..=255) below which a pixel counts as foreground.
pub const LUMA_THRESHOLD: u32 = 128;

/// Binarize tightly packed RGB (`channels == 3`) or RGBA (`channels == 4`) samples.
pub fn binarize_rgba(
    width: usize,
    height: usize,
    channels: usize,
    data: &[u8],
) -> Result<BinaryGrid> {
    if channels != 3 && channels != 4 {
        return Err(DetectError::UnsupportedChannels(channels));
    }
    if width == 0 || height == 0 {
        return Err(DetectError::InvalidDimensions { width, height });
    }
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or(DetectError::InvalidDimensions { width, height })?;
    if data.len() != expected {
        return Err(DetectError::BufferSizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let mask = data
        .chunks_exact(channels)
        .map(|px| is_dark(px[0], px[1], px[2]) as u8)
        .collect();
    Ok(BinaryGrid::from_raw(width, height, mask))
}

/// Binarize any decoded image by first converting it to 8-bit RGB.
pub fn binarize_image(img: &DynamicImage) -> Result<BinaryGrid> {
    let rgb = img.to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    binarize_rgba(w, h, 3, rgb.as_raw())
}

#[inline]
fn is_dark(r: u8, g: u8, b: u8) -> bool {
    // mean < 128  <=>  sum < 3 * 128
    (r as u32 + g as u32 + b as u32) < 3 * LUMA_THRESHOLD
}
