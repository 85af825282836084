//! # Difference Hash
//!
//! Average-threshold hash over an 8×8 downsample:
//!
//! 1. Resize to exactly 8×8 with a Lanczos3 filter (deterministic for a given input)
//! 2. Convert each cell to BT.601 luma, scaled down to 0..=63
//! 3. Take the truncated mean of the 64 cells
//! 4. Set bit `x * 8 + y` for every cell strictly below the mean
//!
//! A perfectly flat image has every cell equal to the mean and hashes to 0.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma};
use log::debug;

use super::decode::decode;
use super::hash64::{Hash64, GRID_SIZE, HASH_BITS};
use super::luma::{pixel_luma, rgba16_at};
use crate::error::Result;

/// Luma is divided by this before thresholding
const CELL_SCALE: u8 = 4;

/// Output of hashing one image
#[derive(Debug, Clone)]
pub struct DifferenceHash {
    /// The 8×8 Lanczos3 downsample the hash was computed from
    pub thumbnail: DynamicImage,

    /// Grayscale preview of the hashed cells
    pub preview: GrayImage,

    /// The 64-bit hash
    pub hash: Hash64,
}

/// Calculate the difference hash of a decoded image
pub fn hash_image(img: &DynamicImage) -> DifferenceHash {
    let thumbnail = img.resize_exact(GRID_SIZE, GRID_SIZE, FilterType::Lanczos3);
    let mut preview = GrayImage::new(GRID_SIZE, GRID_SIZE);

    // Cells in column-major order, index = x * 8 + y
    let mut cells = [0u8; HASH_BITS as usize];
    let mut total: u32 = 0;
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            let value = pixel_luma(rgba16_at(&thumbnail, x, y)) / CELL_SCALE;
            cells[(x * GRID_SIZE + y) as usize] = value;
            total += u32::from(value);
            preview.put_pixel(x, y, Luma([value * CELL_SCALE]));
        }
    }

    let mean = (total / HASH_BITS) as u8;
    let hash = cells
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value < mean)
        .fold(0u64, |acc, (index, _)| acc | (1u64 << index));

    debug!("Difference hash {:016x} (cell mean {})", hash, mean);

    DifferenceHash {
        thumbnail,
        preview,
        hash: Hash64(hash),
    }
}

/// Decode an encoded image and calculate its difference hash.
///
/// Returns the decoded image alongside the hash so callers can reuse it.
pub fn hash_bytes(bytes: &[u8]) -> Result<(DynamicImage, DifferenceHash)> {
    let img = decode(bytes)?;
    let hashed = hash_image(&img);
    Ok((img, hashed))
}
