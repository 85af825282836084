//! Decoding entry points. Errors go back to the caller; only a debug line is logged here.

use image::DynamicImage;
use log::debug;
use std::path::Path;

use crate::error::Result;

/// Decode an encoded image buffer, guessing the format from its contents
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| {
        debug!("Failed to decode {} byte buffer: {}", bytes.len(), e);
        e.into()
    })
}

/// Read the raw bytes of an image file
pub fn read_image_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(|e| {
        debug!("Failed to read {}: {}", path.as_ref().display(), e);
        e.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_decode_rejects_garbage() {
        let result = decode(b"DUMMY IMAGE DATA");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_image_bytes("/definitely/not/here.jpg");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
