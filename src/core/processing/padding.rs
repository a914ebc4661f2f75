use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BackgroundColor, CanvasSize};

const CHANNELS: usize = 4;

/// Allocates a canvas fully filled with `background`, alpha included.
pub fn filled_canvas(canvas: CanvasSize, background: BackgroundColor) -> RgbaImage {
    RgbaImage::from_pixel(canvas.width, canvas.height, background.to_rgba())
}

/// Overwrites a region of `canvas` with `overlay` at (`offset_x`, `offset_y`).
/// No alpha blending: overlay pixels replace the background as-is.
pub fn paste_at(
    canvas: &mut RgbaImage,
    overlay: &RgbaImage,
    offset_x: u32,
    offset_y: u32,
) -> Result<()> {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let (cols, rows) = overlay.dimensions();

    if offset_x as u64 + cols as u64 > canvas_w as u64
        || offset_y as u64 + rows as u64 > canvas_h as u64
    {
        return Err(Error::InvalidArgument {
            arg: "overlay",
            value: format!(
                "{}x{} at ({}, {}) exceeds canvas {}x{}",
                cols, rows, offset_x, offset_y, canvas_w, canvas_h
            ),
        });
    }

    debug!(
        "Pasting {}x{} at ({}, {}) onto {}x{}",
        cols, rows, offset_x, offset_y, canvas_w, canvas_h
    );

    let canvas_stride = canvas_w as usize * CHANNELS;
    let row_len = cols as usize * CHANNELS;
    let src = overlay.as_raw();
    let dst: &mut [u8] = &mut *canvas;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows as usize {
        let src_offset = row * row_len;
        let dst_offset = (row + offset_y as usize) * canvas_stride + offset_x as usize * CHANNELS;
        dst[dst_offset..dst_offset + row_len]
            .copy_from_slice(&src[src_offset..src_offset + row_len]);
    }
    Ok(())
}

/// Builds a `canvas`-sized image with `overlay` centered on `background`.
/// Returns the image together with the offset used.
pub fn pad_to_canvas(
    overlay: &RgbaImage,
    canvas: CanvasSize,
    background: BackgroundColor,
) -> Result<(RgbaImage, u32, u32)> {
    let (cols, rows) = overlay.dimensions();
    let pad_left = canvas.width.saturating_sub(cols) / 2;
    let pad_top = canvas.height.saturating_sub(rows) / 2;

    let mut padded = filled_canvas(canvas, background);
    paste_at(&mut padded, overlay, pad_left, pad_top)?;
    Ok((padded, pad_left, pad_top))
}
