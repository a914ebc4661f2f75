use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg} (or use --input for a single file)")]
    MissingArgument { arg: String },

    #[error("{failed} of {total} images failed")]
    BatchFailed { failed: usize, total: usize },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Letterbox(#[from] letterbox::Error),
}
