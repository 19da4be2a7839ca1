//! Fitting a source image into a fixed canvas before detection.
//!
//! The image is scaled uniformly so that it fits entirely inside the canvas and
//! centred; the centring translation becomes the detector's output [`Offset`].
//! Downscaling here is also what bounds the work done by the pipeline.

use crate::types::Offset;
use image::imageops::FilterType;
use image::DynamicImage;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitTransform {
    pub scale: f64,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset: Offset,
}

impl FitTransform {
    /// Uniform "contain" fit of an `image_w`×`image_h` image into the canvas.
    ///
    /// Returns `None` when any dimension is zero.
    pub fn contain(image_w: u32, image_h: u32, canvas_w: u32, canvas_h: u32) -> Option<Self> {
        if image_w == 0 || image_h == 0 || canvas_w == 0 || canvas_h == 0 {
            return None;
        }
        let scale = (canvas_w as f64 / image_w as f64).min(canvas_h as f64 / image_h as f64);
        let sw = image_w as f64 * scale;
        let sh = image_h as f64 * scale;
        Some(Self {
            scale,
            scaled_width: (sw as u32).max(1),
            scaled_height: (sh as u32).max(1),
            offset: Offset::new((canvas_w as f64 - sw) / 2.0, (canvas_h as f64 - sh) / 2.0),
        })
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == Offset::default()
    }
}

/// Resize `img` to fit the canvas. Returns the resized image and its transform.
pub fn fit_to_canvas(
    img: &DynamicImage,
    canvas_w: u32,
    canvas_h: u32,
) -> Option<(DynamicImage, FitTransform)> {
    let fit = FitTransform::contain(img.width(), img.height(), canvas_w, canvas_h)?;
    let resized = if fit.scaled_width == img.width() && fit.scaled_height == img.height() {
        img.clone()
    } else {
        img.resize_exact(fit.scaled_width, fit.scaled_height, FilterType::Triangle)
    };
    Some((resized, fit))
}
