// Shared pixel helpers
pub mod luma;

mod color;
mod decode;
mod difference_hash;
mod hash64;
mod mask;
mod tags;

// Expose fingerprints and their comparators
pub use color::{color_signature, ColorSignature, BANDS, BINS_PER_BAND};
pub use decode::{decode, read_image_bytes};
pub use difference_hash::{hash_bytes, hash_image, DifferenceHash};
pub use hash64::{Hash64, GRID_SIZE, HASH_BITS};
pub use mask::{RegionMask, MASK_ALLOW_MIN};
pub use tags::{tag_sequence, TagSequence, TAG_SPACE_MAX, TAG_SPACE_MIN};
