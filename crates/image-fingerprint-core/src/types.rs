use serde::{Deserialize, Serialize};

use crate::processing::{ColorSignature, Hash64, TagSequence};

/// All fingerprints computed for a single image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// Width of the decoded image in pixels
    pub width: u32,

    /// Height of the decoded image in pixels
    pub height: u32,

    /// 64-bit difference hash
    pub hash: Hash64,

    /// 60-bit colour-histogram signature
    pub color: ColorSignature,

    /// Coarse block luma samples
    pub tags: TagSequence,
}

/// Scores from comparing two fingerprints
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Hash similarity in 0.0..=1.0
    pub hash_similarity: f32,

    /// Positional tag similarity in 0.0..=1.0, 0 when the sequences differ in length
    pub tag_similarity: f32,

    /// Colour bands (out of 12) whose ratio bin agrees
    pub color_bands_matched: u32,

    /// Whether the hash similarity reached the configured threshold
    pub similar: bool,
}
