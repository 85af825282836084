//! Coarse block brightness sampling.
//!
//! The image is cut into a `tag_space × tag_space` grid and one luma sample
//! (0..=15) is taken at every interior grid line intersection.

use image::{DynamicImage, GenericImageView};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::luma::{pixel_luma, rgba16_at};

/// Smallest accepted grid resolution
pub const TAG_SPACE_MIN: usize = 8;

/// Largest accepted grid resolution
pub const TAG_SPACE_MAX: usize = 128;

/// Luma is divided by this for each tag
const TAG_SCALE: u8 = 16;

/// Ordered luma samples of one image
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagSequence(Vec<u8>);

impl TagSequence {
    pub fn new(tags: Vec<u8>) -> Self {
        Self(tags)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Share of neighbouring samples that are equal; high values flag near-blank images.
    /// Empty sequences score 0.
    pub fn uniformity(&self) -> f32 {
        if self.0.is_empty() {
            return 0.0;
        }
        let hits = self.0.windows(2).filter(|pair| pair[0] == pair[1]).count();
        hits as f32 / self.0.len() as f32
    }

    /// Share of positions holding equal samples.
    /// Returns 0 when either sequence is empty or their lengths differ.
    pub fn similarity(&self, other: &TagSequence) -> f32 {
        if self.0.is_empty() || self.0.len() != other.0.len() {
            return 0.0;
        }
        let hits = self
            .0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a == b)
            .count();
        hits as f32 / self.0.len() as f32
    }
}

impl From<Vec<u8>> for TagSequence {
    fn from(tags: Vec<u8>) -> Self {
        Self(tags)
    }
}

/// Sample the tag sequence of an image.
///
/// `tag_space` is clamped to 8..=128. An image narrower or shorter than the
/// grid has no interior intersections and yields an empty sequence.
pub fn tag_sequence(img: &DynamicImage, tag_space: usize) -> TagSequence {
    let clamped = tag_space.clamp(TAG_SPACE_MIN, TAG_SPACE_MAX);
    if clamped != tag_space {
        warn!("Tag space {} clamped to {}", tag_space, clamped);
    }

    let (width, height) = img.dimensions();
    let step_x = width / clamped as u32;
    let step_y = height / clamped as u32;
    if step_x == 0 || step_y == 0 {
        return TagSequence::default();
    }

    let mut tags = Vec::new();
    for x in (step_x..width).step_by(step_x as usize) {
        for y in (step_y..height).step_by(step_y as usize) {
            tags.push(pixel_luma(rgba16_at(img, x, y)) / TAG_SCALE);
        }
    }

    debug!("Sampled {} tags at tag space {}", tags.len(), clamped);
    TagSequence(tags)
}
