use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{CanvasSize, LetterboxLayout, ResampleFilter};

/// Computes the scaled size and centered offset of a `source_width` x
/// `source_height` image on `canvas`.
///
/// One side of the scaled image spans the full canvas and the other is derived
/// from the source aspect ratio by truncating integer division. For a square canvas a source is
/// height-bound exactly when it is taller than wide; in general the source is
/// height-bound when its aspect ratio is lower than the canvas one. A truncated
/// side never drops below one pixel.
pub fn calculate_letterbox_layout(
    source_width: u32,
    source_height: u32,
    canvas: CanvasSize,
) -> Result<LetterboxLayout> {
    if source_width == 0 || source_height == 0 {
        return Err(Error::EmptySource {
            width: source_width,
            height: source_height,
        });
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(Error::InvalidArgument {
            arg: "size",
            value: canvas.to_string(),
        });
    }

    let (sw, sh) = (source_width as u64, source_height as u64);
    let (cw, ch) = (canvas.width as u64, canvas.height as u64);

    // sw / sh < cw / ch, cross-multiplied
    let (scaled_width, scaled_height) = if sw * ch < sh * cw {
        let new_width = (ch * sw / sh) as u32;
        (new_width.clamp(1, canvas.width), canvas.height)
    } else {
        let new_height = (cw * sh / sw) as u32;
        (canvas.width, new_height.clamp(1, canvas.height))
    };

    let layout = LetterboxLayout {
        scaled_width,
        scaled_height,
        offset_x: (canvas.width - scaled_width) / 2,
        offset_y: (canvas.height - scaled_height) / 2,
    };
    debug!(
        "Layout: source {}x{} -> {}x{} at ({}, {}) on {}",
        source_width,
        source_height,
        layout.scaled_width,
        layout.scaled_height,
        layout.offset_x,
        layout.offset_y,
        canvas
    );
    Ok(layout)
}

fn resize_options(filter: ResampleFilter) -> ResizeOptions {
    let alg = match filter {
        ResampleFilter::Nearest => ResizeAlg::Nearest,
        ResampleFilter::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResampleFilter::Bicubic => ResizeAlg::Convolution(FilterType::CatmullRom),
        ResampleFilter::Mitchell => ResizeAlg::Convolution(FilterType::Mitchell),
        ResampleFilter::Lanczos3 => ResizeAlg::Convolution(FilterType::Lanczos3),
    };
    ResizeOptions::new().resize_alg(alg)
}

/// Resamples an interleaved RGBA8 buffer. Alpha is premultiplied during
/// convolution so transparent pixels do not bleed color into their neighbours.
pub fn resize_rgba_image(
    data: Vec<u8>,
    original_width: u32,
    original_height: u32,
    target_width: u32,
    target_height: u32,
    filter: ResampleFilter,
) -> Result<Vec<u8>> {
    // Already at the requested size: skip resampling so pixels stay untouched
    if original_width == target_width && original_height == target_height {
        return Ok(data);
    }

    let mut resizer = Resizer::new();
    let src_image = Image::from_vec_u8(original_width, original_height, data, PixelType::U8x4)
        .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options(filter))
        .map_err(Error::resize)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(side: u32) -> CanvasSize {
        CanvasSize::square(side).unwrap()
    }

    #[test]
    fn landscape_fills_width() {
        let layout = calculate_letterbox_layout(800, 400, square(1024)).unwrap();
        assert_eq!(
            layout,
            LetterboxLayout {
                scaled_width: 1024,
                scaled_height: 512,
                offset_x: 0,
                offset_y: 256,
            }
        );
    }

    #[test]
    fn portrait_fills_height() {
        let layout = calculate_letterbox_layout(400, 800, square(1024)).unwrap();
        assert_eq!(
            layout,
            LetterboxLayout {
                scaled_width: 512,
                scaled_height: 1024,
                offset_x: 256,
                offset_y: 0,
            }
        );
    }

    #[test]
    fn square_source_fills_canvas() {
        let layout = calculate_letterbox_layout(300, 300, square(1024)).unwrap();
        assert_eq!((layout.scaled_width, layout.scaled_height), (1024, 1024));
        assert_eq!((layout.offset_x, layout.offset_y), (0, 0));
    }

    #[test]
    fn scaled_side_is_truncated_not_rounded() {
        // 1024 / (3 / 2) = 682.67, truncated to 682
        let layout = calculate_letterbox_layout(300, 200, square(1024)).unwrap();
        assert_eq!(layout.scaled_height, 682);
        assert_eq!(layout.offset_y, (1024 - 682) / 2);
        // 1024 * (2 / 3) = 682.67, truncated to 682
        let layout = calculate_letterbox_layout(200, 300, square(1024)).unwrap();
        assert_eq!(layout.scaled_width, 682);
        assert_eq!(layout.offset_x, 171);
    }

    #[test]
    fn non_square_canvas_never_overflows() {
        let wide = CanvasSize::new(1024, 100).unwrap();
        let layout = calculate_letterbox_layout(800, 400, wide).unwrap();
        assert_eq!((layout.scaled_width, layout.scaled_height), (200, 100));
        assert_eq!((layout.offset_x, layout.offset_y), (412, 0));

        let tall = CanvasSize::new(100, 1024).unwrap();
        let layout = calculate_letterbox_layout(400, 800, tall).unwrap();
        assert_eq!((layout.scaled_width, layout.scaled_height), (100, 200));
        assert_eq!((layout.offset_x, layout.offset_y), (0, 412));
    }

    #[test]
    fn layout_fits_and_preserves_ratio_across_shapes() {
        let canvases = [
            square(1024),
            CanvasSize::new(640, 480).unwrap(),
            CanvasSize::new(300, 900).unwrap(),
        ];
        let sources = [
            (1, 1),
            (7, 3),
            (3, 7),
            (1920, 1080),
            (1080, 1920),
            (1000, 999),
            (5, 4000),
        ];
        for canvas in canvases {
            for (sw, sh) in sources {
                let l = calculate_letterbox_layout(sw, sh, canvas).unwrap();
                assert!(l.scaled_width <= canvas.width && l.scaled_height <= canvas.height);
                assert!(l.scaled_width == canvas.width || l.scaled_height == canvas.height);
                assert_eq!(l.offset_x, (canvas.width - l.scaled_width) / 2);
                assert_eq!(l.offset_y, (canvas.height - l.scaled_height) / 2);
                if l.scaled_width > 1 && l.scaled_height > 1 {
                    // Ratio error stays within one pixel on the derived side
                    let expected_w = l.scaled_height as f64 * sw as f64 / sh as f64;
                    let expected_h = l.scaled_width as f64 * sh as f64 / sw as f64;
                    assert!(
                        (l.scaled_width as f64 - expected_w).abs() < 1.0
                            || (l.scaled_height as f64 - expected_h).abs() < 1.0,
                        "{}x{} on {} -> {:?}",
                        sw,
                        sh,
                        canvas,
                        l
                    );
                }
            }
        }
    }

    #[test]
    fn proportional_source_fills_non_square_canvas_exactly() {
        for (w, h) in [(1000, 999), (1, 93), (640, 480), (93, 1), (999, 1000)] {
            let canvas = CanvasSize::new(w, h).unwrap();
            for scale in [1, 2, 3] {
                let layout = calculate_letterbox_layout(w * scale, h * scale, canvas).unwrap();
                assert_eq!(
                    (layout.scaled_width, layout.scaled_height),
                    (w, h),
                    "{}x{} on {}",
                    w * scale,
                    h * scale,
                    canvas
                );
                assert_eq!((layout.offset_x, layout.offset_y), (0, 0));
            }
        }
        let layout =
            calculate_letterbox_layout(2000, 1998, CanvasSize::new(1000, 999).unwrap()).unwrap();
        assert_eq!((layout.scaled_width, layout.scaled_height), (1000, 999));
    }

    #[test]
    fn extreme_ratio_keeps_one_pixel() {
        let layout = calculate_letterbox_layout(1, 10_000, square(1024)).unwrap();
        assert_eq!((layout.scaled_width, layout.scaled_height), (1, 1024));
    }

    #[test]
    fn zero_dimension_source_is_rejected() {
        assert!(matches!(
            calculate_letterbox_layout(0, 10, square(64)),
            Err(Error::EmptySource { width: 0, height: 10 })
        ));
        assert!(matches!(
            calculate_letterbox_layout(10, 0, square(64)),
            Err(Error::EmptySource { width: 10, height: 0 })
        ));
    }

    #[test]
    fn zero_canvas_is_rejected() {
        let canvas = CanvasSize {
            width: 0,
            height: 64,
        };
        assert!(matches!(
            calculate_letterbox_layout(10, 10, canvas),
            Err(Error::InvalidArgument { arg: "size", .. })
        ));
    }

    #[test]
    fn resize_produces_requested_buffer_size() {
        let src = [200u8, 100, 50, 255].repeat(8 * 4);
        let out = resize_rgba_image(src, 8, 4, 4, 2, ResampleFilter::Bicubic).unwrap();
        assert_eq!(out.len(), 4 * 2 * 4);
        // A uniform image stays uniform under a normalized filter
        for px in out.chunks_exact(4) {
            assert!(px[0].abs_diff(200) <= 1 && px[1].abs_diff(100) <= 1 && px[2].abs_diff(50) <= 1);
            assert!(px[3] >= 254);
        }
    }

    #[test]
    fn same_size_resize_is_identity() {
        let src: Vec<u8> = (0..(3 * 3 * 4)).map(|v| v as u8).collect();
        let out = resize_rgba_image(src.clone(), 3, 3, 3, 3, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out, src);
    }
}
