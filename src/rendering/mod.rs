//! Rendering pipeline: geometry -> paint commands -> raster -> PNG

pub mod geometry;
pub mod paint;
pub mod raster;

use crate::{Error, Result, MAX_ICON_SIZE, MIN_ICON_SIZE};
use sha2::{Digest, Sha256};

/// An encoded icon, ready to be written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    pub size: u32,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    /// Hex SHA-256 of the PNG bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}

/// Reject sizes that cannot produce a meaningful square canvas.
pub fn validate_size(size: u32) -> Result<u32> {
    if !(MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(&size) {
        return Err(Error::InvalidSize(size));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_size_bounds() {
        assert!(validate_size(MIN_ICON_SIZE).is_ok());
        assert!(matches!(validate_size(3), Err(Error::InvalidSize(3))));
        assert!(validate_size(MAX_ICON_SIZE).is_ok());
        assert!(matches!(validate_size(0), Err(Error::InvalidSize(0))));
        assert!(validate_size(MAX_ICON_SIZE + 1).is_err());
    }

    #[test]
    fn digest_is_hex_sha256() {
        let icon = RenderedIcon { size: 1, png_data: Vec::new() };
        assert_eq!(
            icon.digest(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
