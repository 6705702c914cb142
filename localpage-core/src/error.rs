//! Error types for localpage

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for localpage operations
#[derive(Error, Debug)]
pub enum LocalPageError {
    /// Target page missing from the serving root
    #[error("target file not found: {file} (looked in {dir})", dir = .dir.display())]
    TargetMissing { file: String, dir: PathBuf },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for localpage operations
pub type Result<T> = std::result::Result<T, LocalPageError>;
