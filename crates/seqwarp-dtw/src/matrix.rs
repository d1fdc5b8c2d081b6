//! Dense cost matrix for the DTW recurrence.

use std::ops::Index;

/// Row-major `rows x cols` matrix of `f64` costs.
///
/// Cell `(i, j)` of the cumulative variant holds the minimal accumulated
/// cost of aligning the prefixes `x[0..=i]` and `y[0..=j]`. Created per
/// computation and discarded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Create a zero-filled matrix of the given shape.
    pub(crate) fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows > 0 && cols > 0, "matrix shape must be non-zero");
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Return the number of rows (|x|).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (|y|).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the value at `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for {} columns", self.cols);
        self.data[i * self.cols + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of bounds for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Return the bottom-right cell — the terminal accumulated cost.
    #[must_use]
    pub fn terminal(&self) -> f64 {
        self.data[self.rows * self.cols - 1]
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of bounds");
        &self.data[i * self.cols + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_matrix() -> CostMatrix {
        let mut m = CostMatrix::zeros(2, 3);
        for i in 0..2 {
            for j in 0..3 {
                m.set(i, j, (i * 3 + j) as f64);
            }
        }
        m
    }

    #[test]
    fn shape() {
        let m = make_matrix();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn get_and_index_agree() {
        let m = make_matrix();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), (i * 3 + j) as f64);
                assert_eq!(m[(i, j)], m.get(i, j));
            }
        }
    }

    #[test]
    fn row_slices() {
        let m = make_matrix();
        assert_eq!(m.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(m.row(1), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn terminal_is_bottom_right() {
        let m = make_matrix();
        assert_eq!(m.terminal(), 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        let m = make_matrix();
        let _ = m.get(2, 0);
    }
}
