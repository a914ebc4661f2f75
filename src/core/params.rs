use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BackgroundColor, CanvasSize, ResampleFilter};

/// Subdirectory of the input directory used when no output directory is given.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "_out";

/// Per-image transform parameters suitable for presets and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterboxParams {
    pub canvas: CanvasSize,
    pub background: BackgroundColor,
    pub filter: ResampleFilter,
}

impl LetterboxParams {
    pub fn new(canvas: CanvasSize, background: BackgroundColor) -> Self {
        Self {
            canvas,
            background,
            filter: ResampleFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Re-checks invariants that deserialized or hand-built values may violate.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::InvalidArgument {
                arg: "size",
                value: self.canvas.to_string(),
            });
        }
        Ok(())
    }
}

/// A fully resolved batch run: directories plus transform parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub params: LetterboxParams,
}

impl BatchConfig {
    /// Resolves the output directory, defaulting to `<input_dir>/_out`.
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: Option<PathBuf>,
        params: LetterboxParams,
    ) -> Result<Self> {
        params.validate()?;
        let input_dir = input_dir.into();
        let output_dir = output_dir.unwrap_or_else(|| default_output_dir(&input_dir));
        Ok(Self {
            input_dir,
            output_dir,
            params,
        })
    }
}

pub fn default_output_dir(input_dir: &Path) -> PathBuf {
    input_dir.join(DEFAULT_OUTPUT_SUBDIR)
}
