//! High-level, ergonomic library API: letterbox a single file to disk or to an
//! in-memory buffer, and batch-process a directory. Prefer these entrypoints
//! over the low-level processing modules when integrating letterbox.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::{BatchConfig, LetterboxParams};
use crate::core::processing::letterbox::{letterbox_image, letterbox_image_with_layout};
use crate::error::{Error, Result};
use crate::io::reader::{read_image, scan_image_dir};
use crate::io::writers::png::{output_path_for, write_png};
use crate::types::LetterboxLayout;

/// Decode `input` and letterbox it in memory (no disk writes)
pub fn letterbox_file_to_buffer(input: &Path, params: &LetterboxParams) -> Result<RgbaImage> {
    let source = read_image(input)?;
    letterbox_image(&source, params)
}

/// Decode `input`, letterbox it and write the canvas to `output` as PNG.
/// Nothing is written when decoding or the transform fails.
pub fn letterbox_file_to_path(
    input: &Path,
    output: &Path,
    params: &LetterboxParams,
) -> Result<LetterboxLayout> {
    let source = read_image(input)?;
    let (canvas, layout) = letterbox_image_with_layout(&source, params)?;
    drop(source);
    write_png(output, &canvas)?;
    Ok(layout)
}

/// A file that failed during a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    /// Written files, in processing order
    pub outputs: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

/// Letterbox every eligible image of `config.input_dir` into `config.output_dir`.
/// Files are processed in lexicographic order. If `continue_on_error` is true,
/// failures are recorded in the report and processing continues; otherwise the
/// first error is returned.
pub fn process_directory_to_path(
    config: &BatchConfig,
    continue_on_error: bool,
) -> Result<BatchReport> {
    config.params.validate()?;
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| Error::io_at(&config.output_dir, e))?;

    let scan = scan_image_dir(&config.input_dir)?;
    let mut report = BatchReport {
        skipped: scan.skipped.len(),
        ..BatchReport::default()
    };

    for path in scan.images {
        let output_path = output_path_for(&path, &config.output_dir);
        debug!("Processing: {:?} -> {:?}", path, output_path);

        match letterbox_file_to_path(&path, &output_path, &config.params) {
            Ok(_) => {
                info!("{} -> {}", path.display(), output_path.display());
                report.processed += 1;
                report.outputs.push(output_path);
            }
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
                report.failures.push(BatchFailure {
                    path,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
