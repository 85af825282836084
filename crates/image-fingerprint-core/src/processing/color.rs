//! Colour-histogram signature.
//!
//! Each of R, G and B is split into four coarse buckets, giving twelve bands.
//! The share of pixels falling in a band is quantised into one of five bins
//! of 20% each and recorded as bit `band * 5 + bin`.

use image::{DynamicImage, GenericImageView};
use log::debug;
use serde::{Deserialize, Serialize};

use super::luma::{rgb16, rgba16_at};

/// Buckets per colour channel
const BUCKETS: usize = 4;

/// Total bands across R, G and B
pub const BANDS: usize = BUCKETS * 3;

/// Ratio bins per band
pub const BINS_PER_BAND: usize = 5;

/// Width of a bucket in the 16-bit channel range
const BUCKET_WIDTH: u32 = 16384;

/// Sparse bit set with one bit per band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorSignature(pub u64);

impl ColorSignature {
    /// Number of bands on which both signatures fall in the same bin
    pub fn matching_bands(&self, other: &ColorSignature) -> u32 {
        (self.0 & other.0).count_ones()
    }
}

/// Calculate the colour signature of an image. Zero-area images yield 0.
pub fn color_signature(img: &DynamicImage) -> ColorSignature {
    let (width, height) = img.dimensions();
    let total = u64::from(width) * u64::from(height);
    if total == 0 {
        return ColorSignature(0);
    }

    let mut counts = [0u64; BANDS];
    for x in 0..width {
        for y in 0..height {
            for (channel, value) in rgb16(rgba16_at(img, x, y)).into_iter().enumerate() {
                let bucket = (value / BUCKET_WIDTH) as usize;
                counts[channel * BUCKETS + bucket] += 1;
            }
        }
    }

    let signature = counts
        .iter()
        .enumerate()
        .fold(0u64, |acc, (band, &count)| {
            // A band holding every pixel would land in bin 5; keep it in the band
            let bin = (((count * 100) / total) / 20).min(BINS_PER_BAND as u64 - 1) as usize;
            acc | (1u64 << (band * BINS_PER_BAND + bin))
        });

    debug!("Colour signature {:015x} over {} pixels", signature, total);
    ColorSignature(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn bits(signature: ColorSignature) -> Vec<usize> {
        (0..64).filter(|i| signature.0 & (1u64 << i) != 0).collect()
    }

    #[test]
    fn test_zero_area_yields_zero() {
        assert_eq!(color_signature(&DynamicImage::new_rgb8(0, 0)), ColorSignature(0));
        assert_eq!(color_signature(&DynamicImage::new_rgb8(0, 12)), ColorSignature(0));
        assert_eq!(color_signature(&DynamicImage::new_rgb8(12, 0)), ColorSignature(0));
    }

    #[test]
    fn test_solid_black() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));
        let signature = color_signature(&img);
        assert_eq!(
            bits(signature),
            vec![4, 5, 10, 15, 24, 25, 30, 35, 44, 45, 50, 55]
        );
    }

    #[test]
    fn test_solid_white() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let signature = color_signature(&img);
        assert_eq!(
            bits(signature),
            vec![0, 5, 10, 19, 20, 25, 30, 39, 40, 45, 50, 59]
        );
    }

    #[test]
    fn test_16_bit_channels_bucket_at_full_depth() {
        // 16383 is the top of bucket 0 and would round into bucket 1 at 8 bits
        let buf: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(2, 2, Rgb([16383, 0, 0]));
        let signature = color_signature(&DynamicImage::ImageRgb16(buf));
        assert_eq!(
            bits(signature),
            vec![4, 5, 10, 15, 24, 25, 30, 35, 44, 45, 50, 55]
        );
    }

    #[test]
    fn test_one_bit_per_band() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(50, 20, |x, y| {
            Rgb([(x * 5) as u8, (y * 12) as u8, ((x + y) * 3) as u8])
        }));
        let signature = color_signature(&img);
        assert_eq!(signature.0.count_ones(), BANDS as u32);
        for band in 0..BANDS {
            let band_bits = (signature.0 >> (band * BINS_PER_BAND)) & 0b11111;
            assert_eq!(band_bits.count_ones(), 1, "band {}", band);
        }
        assert!(signature.0 < 1u64 << 60);
    }

    #[test]
    fn test_deterministic_and_matching() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_fn(16, 16, |x, y| {
            Rgb([(x * 16) as u8, (y * 16) as u8, 128])
        }));
        let a = color_signature(&img);
        let b = color_signature(&img);
        assert_eq!(a, b);
        assert_eq!(a.matching_bands(&b), BANDS as u32);
    }
}
