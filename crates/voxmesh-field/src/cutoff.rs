//! Category cutoff ranges for segmented volumes.

use serde::{Deserialize, Serialize};

/// Tolerance used when deciding whether a range covers a single category.
const SINGLE_CATEGORY_SLACK: f64 = 1e-6;

/// A closed interval `[lo, hi]` of category values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffRange {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl CutoffRange {
    /// Create a new range.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Range covering exactly one category value.
    pub const fn single(category: f64) -> Self {
        Self {
            lo: category,
            hi: category,
        }
    }

    /// Width of the range (`hi - lo`).
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// True if `lo <= hi`.
    pub fn is_ordered(&self) -> bool {
        self.lo <= self.hi
    }

    /// True when the range selects one category: `0 <= hi - lo <= 1`.
    pub fn spans_single_category(&self) -> bool {
        let w = self.width();
        (0.0..=1.0 + SINGLE_CATEGORY_SLACK).contains(&w)
    }

    /// Inclusive membership test, `lo <= v <= hi`.
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && v <= self.hi
    }
}
