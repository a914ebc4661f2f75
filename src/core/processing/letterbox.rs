//! The letterbox transform: scale a decoded image to fit the canvas while
//! keeping its aspect ratio, then center it on a background-filled canvas.
//! Pure function of its inputs, no I/O.
use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::core::params::LetterboxParams;
use crate::core::processing::padding::pad_to_canvas;
use crate::core::processing::resize::{calculate_letterbox_layout, resize_rgba_image};
use crate::error::{Error, Result};
use crate::types::LetterboxLayout;

/// Letterboxes `source` onto a `params.canvas`-sized RGBA image.
pub fn letterbox_image(source: &DynamicImage, params: &LetterboxParams) -> Result<RgbaImage> {
    letterbox_image_with_layout(source, params).map(|(image, _)| image)
}

/// Same as [`letterbox_image`], also returning where the scaled source was placed.
pub fn letterbox_image_with_layout(
    source: &DynamicImage,
    params: &LetterboxParams,
) -> Result<(RgbaImage, LetterboxLayout)> {
    params.validate()?;
    let (width, height) = (source.width(), source.height());
    let layout = calculate_letterbox_layout(width, height, params.canvas)?;

    // Resampling operates on RGBA8 regardless of the decoded pixel format
    let rgba = source.to_rgba8().into_raw();
    let scaled = resize_rgba_image(
        rgba,
        width,
        height,
        layout.scaled_width,
        layout.scaled_height,
        params.filter,
    )?;
    let scaled = RgbaImage::from_raw(layout.scaled_width, layout.scaled_height, scaled)
        .ok_or_else(|| Error::Resize("resampled buffer does not match target size".into()))?;

    let (canvas, pad_left, pad_top) = pad_to_canvas(&scaled, params.canvas, params.background)?;
    debug_assert_eq!((pad_left, pad_top), (layout.offset_x, layout.offset_y));

    debug!(
        "Letterboxed {}x{} onto {} with {} filter",
        width, height, params.canvas, params.filter
    );
    Ok((canvas, layout))
}
