//! Terminal distance value.

use std::fmt;

/// Terminal DTW cost: the bottom-right cell of the cumulative-cost matrix.
///
/// Accumulated squared error, so always >= 0 and zero exactly when some
/// warping aligns the two sequences perfectly. `Display` produces the
/// 8-decimal fixed-point form the output adapter emits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DtwDistance(f64);

impl DtwDistance {
    pub(crate) fn new(value: f64) -> Self {
        Self(value)
    }

    /// The raw cost value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for DtwDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}
