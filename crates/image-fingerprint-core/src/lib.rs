//! Perceptual fingerprints for single images.
//!
//! This library computes and compares three independent fingerprints:
//! - A 64-bit difference hash over an 8×8 Lanczos downsample
//! - A 60-bit colour-histogram signature
//! - A coarse tag sequence of block luma samples
//!
//! Every function is synchronous and works on a borrowed image; nothing is
//! cached or retained between calls.

// -- External Dependencies --
use image::DynamicImage;
use log::debug;

// -- Standard Library --
use std::path::Path;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod config;
pub mod logging;
pub mod processing;
pub mod types;
pub mod utils;

use processing::{color_signature, decode, hash_image, read_image_bytes, tag_sequence};
use utils::round_to;

/// Main entry point for fingerprinting and comparing images
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    config: Config,
}

impl Fingerprinter {
    /// Create a new Fingerprinter with the provided configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute every fingerprint of a decoded image
    pub fn fingerprint_image(&self, img: &DynamicImage) -> Fingerprint {
        let fingerprint = Fingerprint {
            width: img.width(),
            height: img.height(),
            hash: hash_image(img).hash,
            color: color_signature(img),
            tags: tag_sequence(img, self.config.tag_space),
        };
        debug!(
            "Fingerprinted {}x{} image: hash {}, {} tags",
            fingerprint.width,
            fingerprint.height,
            fingerprint.hash,
            fingerprint.tags.len()
        );
        fingerprint
    }

    /// Decode an encoded image and compute its fingerprints
    pub fn fingerprint_bytes(&self, bytes: &[u8]) -> Result<Fingerprint> {
        let img = decode(bytes)?;
        Ok(self.fingerprint_image(&img))
    }

    /// Read and decode an image file, then compute its fingerprints
    pub fn fingerprint_file<P: AsRef<Path>>(&self, path: P) -> Result<Fingerprint> {
        let bytes = read_image_bytes(&path)?;
        debug!("Read {} bytes from {}", bytes.len(), path.as_ref().display());
        self.fingerprint_bytes(&bytes)
    }

    /// Compare two fingerprints using the configured similarity mode
    pub fn compare(&self, a: &Fingerprint, b: &Fingerprint) -> Comparison {
        let raw_similarity = match self.config.similarity_mode {
            SimilarityMode::Approximate => a.hash.similarity(&b.hash),
            SimilarityMode::Exact => a.hash.exact_similarity(&b.hash),
        };
        let precision = self.config.precision;

        Comparison {
            hash_similarity: round_to(raw_similarity, precision),
            tag_similarity: round_to(a.tags.similarity(&b.tags), precision),
            color_bands_matched: a.color.matching_bands(&b.color),
            similar: raw_similarity >= self.config.similarity_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn halves(dark_left: bool) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, _| {
            if (x < 32) == dark_left {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }))
    }

    #[test]
    fn test_compare_identical() {
        let fingerprinter = Fingerprinter::default();
        let fingerprint = fingerprinter.fingerprint_image(&halves(true));

        let comparison = fingerprinter.compare(&fingerprint, &fingerprint);

        assert_eq!(comparison.hash_similarity, 1.0);
        assert_eq!(comparison.tag_similarity, 1.0);
        assert_eq!(comparison.color_bands_matched, 12);
        assert!(comparison.similar);
    }

    #[test]
    fn test_compare_mirrored_by_mode() {
        let a = halves(true);
        let b = halves(false);

        let approximate = Fingerprinter::default();
        let exact = Fingerprinter::new(Config {
            similarity_mode: SimilarityMode::Exact,
            ..Config::default()
        });

        let (fa, fb) = (approximate.fingerprint_image(&a), approximate.fingerprint_image(&b));
        assert_eq!(approximate.compare(&fa, &fb).hash_similarity, round_to(31.0 / 64.0, 4));
        assert_eq!(exact.compare(&fa, &fb).hash_similarity, 0.0);
        assert!(!exact.compare(&fa, &fb).similar);
    }

    #[test]
    fn test_fingerprint_dimensions() {
        let img = DynamicImage::new_rgb8(33, 17);
        let fingerprint = Fingerprinter::default().fingerprint_image(&img);
        assert_eq!((fingerprint.width, fingerprint.height), (33, 17));
        assert_eq!(fingerprint.hash.0, 0);
        // Steps of 2 across and 1 down
        assert_eq!(fingerprint.tags.len(), 16 * 16);
    }
}
