//! Pixel channel expansion and grayscale intensity shared by every fingerprint.
//!
//! All fingerprints work on alpha-premultiplied 16-bit channels. 16-bit
//! images are read at full depth; everything else goes through the 8-bit
//! view and is widened by ×257.

use image::{DynamicImage, GenericImageView, Pixel, Rgba};

const CHANNEL_MAX: u32 = 0xFFFF;

/// Read pixel `(x, y)` as 16-bit RGBA without losing precision on 16-bit sources.
#[inline]
pub fn rgba16_at(img: &DynamicImage, x: u32, y: u32) -> Rgba<u16> {
    match img {
        DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).to_rgba(),
        DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).to_rgba(),
        DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).to_rgba(),
        DynamicImage::ImageRgba16(buf) => *buf.get_pixel(x, y),
        _ => {
            let [r, g, b, a] = img.get_pixel(x, y).0;
            let widen = |c: u8| u16::from(c) * 257;
            Rgba([widen(r), widen(g), widen(b), widen(a)])
        }
    }
}

/// Alpha-premultiplied 16-bit RGB channels of a pixel.
#[inline]
pub fn rgb16(pixel: Rgba<u16>) -> [u32; 3] {
    let [r, g, b, a] = pixel.0;
    let alpha = u32::from(a);
    let premultiply = |c: u16| u32::from(c) * alpha / CHANNEL_MAX;
    [premultiply(r), premultiply(g), premultiply(b)]
}

/// ITU-R BT.601 weighted luma of 16-bit channels, in 0..=255.
///
/// The weights sum to 65536, so the widest input is `65536 * 0xFFFF + 2^15`,
/// which still fits in a `u32`.
#[inline]
pub fn luma([r, g, b]: [u32; 3]) -> u8 {
    ((19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 24) as u8
}

/// Luma of a 16-bit RGBA pixel.
#[inline]
pub fn pixel_luma(pixel: Rgba<u16>) -> u8 {
    luma(rgb16(pixel))
}
