use std::path::PathBuf;
use thiserror::Error;

/// Domain failures callers may want to tell apart from plain I/O errors.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Unsupported file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Résumé is empty: {}", .0.display())]
    EmptyDocument(PathBuf),

    #[error("Failed to parse {}: {reason}", .path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("Invalid section pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
