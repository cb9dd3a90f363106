//! Custom error types for dish-composer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dish-composer library.
#[derive(Error, Debug)]
pub enum Error {
    /// An input layer could not be opened or decoded.
    #[error("failed to load image from {path}: {source}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The composed dish could not be written.
    #[error("failed to save image to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    /// Path of the file the failed operation was working on.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::MissingFile { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Result type alias for dish-composer operations.
pub type Result<T> = std::result::Result<T, Error>;
