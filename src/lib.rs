#![doc = r#"
letterbox — batch image resizing onto fixed-size canvases.

Every image is scaled to fit the canvas while keeping its aspect ratio, then
centered on a canvas filled with a background color (letterboxing) and written
as an RGBA PNG. The crate powers the `letterbox` CLI and can be embedded in
your own Rust applications.

Quick start: letterbox one file
-------------------------------
```rust,no_run
use std::path::Path;
use letterbox::{letterbox_file_to_path, BackgroundColor, CanvasSize, LetterboxParams};

fn main() -> letterbox::Result<()> {
    let params = LetterboxParams::new(
        CanvasSize::new(1280, 720)?,
        BackgroundColor::rgba(255, 255, 255, 255),
    );
    let layout = letterbox_file_to_path(
        Path::new("photos/cat.jpg"),
        Path::new("photos/_out/cat.png"),
        &params,
    )?;
    println!("placed {}x{} at ({}, {})",
        layout.scaled_width, layout.scaled_height, layout.offset_x, layout.offset_y);
    Ok(())
}
```

In-memory transform
-------------------
```rust
use image::{DynamicImage, RgbaImage, Rgba};
use letterbox::{letterbox_image, BackgroundColor, CanvasSize, LetterboxParams};

let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(800, 400, Rgba([0, 0, 255, 255])));
let params = LetterboxParams::new(CanvasSize::square(1024).unwrap(), BackgroundColor::TRANSPARENT);

let canvas = letterbox_image(&source, &params).unwrap();
assert_eq!(canvas.dimensions(), (1024, 1024));
assert_eq!(*canvas.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
```

Batch helpers
-------------
Batch runs pick up the `.jpg`, `.jpeg` and `.png` files of a directory
(extensions compared case-insensitively, so `IMG.JPG` qualifies) in file name
order; subdirectories and other files are skipped.

```rust,no_run
use letterbox::{process_directory_to_path, BatchConfig, LetterboxParams};

fn main() -> letterbox::Result<()> {
    // Output defaults to `<input_dir>/_out`
    let config = BatchConfig::new("/data/photos", None, LetterboxParams::default())?;
    let report = process_directory_to_path(&config, false)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `letterbox::Result<T>`; match on `letterbox::Error`
to handle specific cases.

```rust,no_run
use std::path::Path;
use letterbox::{letterbox_file_to_path, Error, LetterboxParams};

match letterbox_file_to_path(Path::new("in.png"), Path::new("out.png"), &LetterboxParams::default()) {
    Ok(_) => {}
    Err(Error::Decode { path, source }) => eprintln!("not an image: {} ({source})", path.display()),
    Err(Error::EmptySource { width, height }) => eprintln!("empty image {width}x{height}"),
    Err(other) => eprintln!("Other error: {other}"),
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — `CanvasSize`, `BackgroundColor`, `ResampleFilter`, `LetterboxLayout`.
- [`io`] — directory scanning, decoding and PNG output.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::{BatchConfig, DEFAULT_OUTPUT_SUBDIR, LetterboxParams};
pub use error::{Error, Result};
pub use types::{BackgroundColor, CanvasSize, LetterboxLayout, ResampleFilter};

// Transform
pub use core::processing::letterbox::{letterbox_image, letterbox_image_with_layout};
pub use core::processing::resize::calculate_letterbox_layout;

// I/O helpers
pub use io::reader::{DirectoryScan, iterate_image_files, read_image, scan_image_dir};
pub use io::writers::png::{output_path_for, write_png};

// High-level API re-exports
pub use api::{
    BatchFailure, BatchReport, letterbox_file_to_buffer, letterbox_file_to_path,
    process_directory_to_path,
};
