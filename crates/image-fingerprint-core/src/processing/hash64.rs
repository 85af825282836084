//! # 64-bit Image Hash
//!
//! One bit per cell of an 8×8 grid, bit `x * 8 + y` for column `x` and row `y`.
//! A set bit means the cell is darker than the grid average.
//!
//! ## Comparators
//!
//! - [`Hash64::similarity`]: agreement ratio that gives up once half the bits
//!   disagree. Exact at or above 0.5, reported as 31/64 below it.
//! - [`Hash64::exact_similarity`]: agreement ratio over all 64 bits.
//! - [`Hash64::count_below_midpoint`] / [`Hash64::content_rate`]: how far the
//!   hash is from a degenerate all-zero or all-one pattern. Flat images score 0.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bits in a hash
pub const HASH_BITS: u32 = 64;

/// Side length of the hashed grid
pub const GRID_SIZE: u32 = 8;

/// A difference hash represented as a 64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash64(pub u64);

impl Hash64 {
    /// Whether bit `index` is set
    #[inline]
    pub fn bit(&self, index: u32) -> bool {
        self.0 & (1u64 << index) != 0
    }

    /// Number of set bits folded into 0..=32.
    ///
    /// A hash and its complement describe equally much structure, so counts
    /// above 32 are mirrored.
    pub fn count_below_midpoint(&self) -> u8 {
        let count = self.0.count_ones();
        let folded = if count > HASH_BITS / 2 {
            HASH_BITS - count
        } else {
            count
        };
        folded as u8
    }

    /// [`count_below_midpoint`](Self::count_below_midpoint) as a fraction of 64, in 0.0..=0.5
    pub fn content_rate(&self) -> f32 {
        f32::from(self.count_below_midpoint()) / HASH_BITS as f32
    }

    /// Calculate the Hamming distance between two hashes
    pub fn distance(&self, other: &Hash64) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Fraction of agreeing bits, with early exit.
    ///
    /// Bits are compared from 0 upwards and counting stops as soon as the
    /// score drops below 32, so any pair disagreeing on more than 32 bits
    /// scores exactly 31/64.
    pub fn similarity(&self, other: &Hash64) -> f32 {
        let mut score = HASH_BITS;
        for index in 0..HASH_BITS {
            if self.bit(index) != other.bit(index) {
                score -= 1;
                if score < HASH_BITS / 2 {
                    break;
                }
            }
        }
        score as f32 / HASH_BITS as f32
    }

    /// Fraction of agreeing bits over the whole hash
    pub fn exact_similarity(&self, other: &Hash64) -> f32 {
        (HASH_BITS - self.distance(other)) as f32 / HASH_BITS as f32
    }

    /// Render the hash as 8 rows of 8 `0`/`1` tokens; row `i`, column `j` is bit `i * 8 + j`
    pub fn grid(&self) -> String {
        (0..GRID_SIZE)
            .map(|i| {
                (0..GRID_SIZE)
                    .map(|j| if self.bit(i * GRID_SIZE + j) { "1" } else { "0" })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Hash64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl From<u64> for Hash64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
