use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::debug;

use crate::error::{Error, Result};

/// File extensions accepted as input, compared ASCII case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Outcome of listing an input directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryScan {
    /// Eligible image files, sorted by file name
    pub images: Vec<PathBuf>,
    /// Entries ignored: subdirectories and files with other extensions
    pub skipped: Vec<PathBuf>,
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Lists the immediate entries of `input_dir`, splitting eligible image files
/// from everything else.
pub fn scan_image_dir(input_dir: &Path) -> Result<DirectoryScan> {
    let entries = std::fs::read_dir(input_dir).map_err(|e| Error::io_at(input_dir, e))?;

    let mut scan = DirectoryScan::default();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io_at(input_dir, e))?;
        let path = entry.path();
        if path.is_file() && has_image_extension(&path) {
            scan.images.push(path);
        } else {
            debug!("Skipping non-image entry: {:?}", path);
            scan.skipped.push(path);
        }
    }

    scan.images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    scan.skipped.sort();
    Ok(scan)
}

/// Return an iterator over the eligible image files of `input_dir` in lexicographic order
pub fn iterate_image_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    Ok(scan_image_dir(input_dir)?.images.into_iter())
}

/// Reads and decodes an image, sniffing the format from its contents.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    let bytes = std::fs::read(path).map_err(|e| Error::io_at(path, e))?;
    let image = image::load_from_memory(&bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}
