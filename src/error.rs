//! Error types for icon generation.
//!
//! Every failure is fatal to a run; the variants only record which step
//! failed and on which path.

use std::path::PathBuf;

/// Error raised while generating icons.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The base image is missing or could not be decoded.
    #[error("Failed to load base image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A resized icon could not be encoded or written.
    #[error("Failed to write icon {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl IconError {
    /// Path of the file or directory the failed step was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. } | Self::Load { path, .. } | Self::Save { path, .. } => {
                path
            }
        }
    }
}

/// Result type alias using [`IconError`].
pub type Result<T> = std::result::Result<T, IconError>;
