//! Square region mask.
//!
//! An N×N grid of weights is stretched over the image; a pixel is allowed when
//! the weight of the cell it falls in reaches [`MASK_ALLOW_MIN`].

/// Region weight at or above which a pixel is considered inside the mask
pub const MASK_ALLOW_MIN: f32 = 0.1;

/// Square grid of per-region weights laid over an image
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionMask {
    rows: Vec<Vec<f32>>,
}

impl RegionMask {
    pub fn new(rows: Vec<Vec<f32>>) -> Self {
        Self { rows }
    }

    /// Whether pixel `(x, y)` of a `width × height` image falls in a region
    /// weighted at least [`MASK_ALLOW_MIN`].
    ///
    /// Empty or non-square masks, zero dimensions and out-of-range
    /// coordinates all return `false`.
    pub fn allows(&self, x: u32, y: u32, width: u32, height: u32) -> bool {
        let size = self.rows.len();
        if size == 0 || self.rows.iter().any(|row| row.len() != size) {
            return false;
        }
        if width == 0 || height == 0 || x >= width || y >= height {
            return false;
        }

        let cells = size as f32;
        let column = (x as f32 / (width as f32 / cells)) as usize;
        let row = (y as f32 / (height as f32 / cells)) as usize;

        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .is_some_and(|&weight| weight >= MASK_ALLOW_MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrants() -> RegionMask {
        RegionMask::new(vec![vec![1.0, 0.0], vec![0.05, 0.1]])
    }

    #[test]
    fn test_allows_by_region() {
        let mask = quadrants();
        assert!(mask.allows(0, 0, 100, 100));
        assert!(!mask.allows(75, 10, 100, 100));
        assert!(!mask.allows(10, 75, 100, 100));
        assert!(mask.allows(99, 99, 100, 100));
    }

    #[test]
    fn test_degenerate_masks() {
        assert!(!RegionMask::default().allows(0, 0, 10, 10));
        let ragged = RegionMask::new(vec![vec![1.0, 1.0], vec![1.0]]);
        assert!(!ragged.allows(0, 0, 10, 10));
        let wide = RegionMask::new(vec![vec![1.0, 1.0]]);
        assert!(!wide.allows(0, 0, 10, 10));
    }

    #[test]
    fn test_out_of_range_coordinates() {
        let mask = quadrants();
        assert!(!mask.allows(0, 0, 0, 10));
        assert!(!mask.allows(100, 0, 100, 100));
        assert!(!mask.allows(0, 100, 100, 100));
    }
}
