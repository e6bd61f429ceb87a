//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or writing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// Requested canvas size is outside `MIN_ICON_SIZE..=MAX_ICON_SIZE`
    #[error(
        "Invalid icon size {0}: expected {min}..={max}",
        min = crate::MIN_ICON_SIZE,
        max = crate::MAX_ICON_SIZE
    )]
    InvalidSize(u32),

    /// Failed to create the output directory or write the file
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Encode(err.to_string())
    }
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_path() {
        let err = Error::io(
            "icons/icon16.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("icons/icon16.png"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn invalid_size_mentions_bounds() {
        let msg = Error::InvalidSize(0).to_string();
        assert!(msg.contains("Invalid icon size 0"));
        assert!(msg.contains("4..=4096"));
    }
}
