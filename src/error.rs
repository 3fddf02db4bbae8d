//! Error type shared by rendering, profile loading and batch generation.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while producing an icon set.
///
/// None of these are recoverable inside a batch: the first error aborts
/// the run and is returned to the caller.
#[derive(Debug, Error)]
pub enum IconError {
    /// The requested edge length is zero or too large to allocate.
    #[error("invalid icon size: {size}px")]
    InvalidSize { size: u32 },

    /// A drawing path degenerated (non-finite or empty coordinates).
    #[error("failed to build {0} geometry")]
    Geometry(&'static str),

    /// The rendered raster could not be encoded as PNG.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// Reading or writing a file or directory failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A profile could not be parsed or failed validation.
    #[error("invalid profile: {0}")]
    Profile(String),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IconError>;
