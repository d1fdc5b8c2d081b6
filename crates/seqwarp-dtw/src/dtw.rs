//! DTW cost-matrix computation.

use tracing::instrument;

use crate::distance::DtwDistance;
use crate::error::DtwError;
use crate::matrix::CostMatrix;
use crate::metric::PointMetric;
use crate::series::{Sequence, SequenceView};

/// Immutable DTW configuration. Thread-safe and copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dtw {
    metric: PointMetric,
    max_cells: Option<usize>,
}

/// Output of a single DTW computation: the cumulative-cost matrix plus the
/// raw pointwise-distance matrix.
///
/// The pointwise matrix is diagnostic; only the cost matrix feeds the
/// terminal distance. Every cell of the pointwise matrix holds the pure
/// `metric(x[i], y[j])` value, border cells included.
#[derive(Debug, Clone, PartialEq)]
pub struct DtwResult {
    cost: CostMatrix,
    pointwise: CostMatrix,
}

impl DtwResult {
    /// Return the cumulative-cost matrix.
    #[must_use]
    pub fn cost(&self) -> &CostMatrix {
        &self.cost
    }

    /// Return the raw pointwise-distance matrix.
    #[must_use]
    pub fn pointwise(&self) -> &CostMatrix {
        &self.pointwise
    }

    /// Return the terminal distance — the bottom-right cell of the cost matrix.
    #[must_use]
    pub fn distance(&self) -> DtwDistance {
        DtwDistance::new(self.cost.terminal())
    }
}

impl Dtw {
    /// Create a DTW calculator for the given point metric.
    #[must_use]
    pub fn new(metric: PointMetric) -> Self {
        Self {
            metric,
            max_cells: None,
        }
    }

    /// Limit the cost-matrix size to `limit` cells.
    ///
    /// Computations whose matrix would exceed the limit fail with
    /// [`DtwError::MatrixTooLarge`] instead of allocating O(|x|·|y|) memory.
    #[must_use]
    pub fn with_max_cells(mut self, limit: usize) -> Self {
        self.max_cells = Some(limit);
        self
    }

    /// Compute the full cost matrix for a pair of sequences.
    ///
    /// Iterative fill in dependency order: base cell, first column, first
    /// row, then interior cells left-to-right, top-to-bottom. Each interior
    /// cell adds the pointwise cost to the three-way minimum of its
    /// already-computed neighbors. O(|x|·|y|) time and space.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::MatrixTooLarge`] | `|x| * |y|` exceeds the configured cell limit |
    #[instrument(skip(a, b), fields(n = a.len(), m = b.len()))]
    pub fn compute(&self, a: SequenceView<'_>, b: SequenceView<'_>) -> Result<DtwResult, DtwError> {
        let x = a.as_slice();
        let y = b.as_slice();
        let n = x.len();
        let m = y.len();

        if let Some(limit) = self.max_cells {
            if n.saturating_mul(m) > limit {
                return Err(DtwError::MatrixTooLarge {
                    rows: n,
                    cols: m,
                    limit,
                });
            }
        }

        let mut cost = CostMatrix::zeros(n, m);
        let mut pointwise = CostMatrix::zeros(n, m);

        cost.set(0, 0, self.metric.apply(x[0], y[0]));

        // First column: running sum down the left edge.
        for i in 1..n {
            let c = self.metric.apply(x[i], y[0]);
            cost.set(i, 0, c + cost.get(i - 1, 0));
        }

        // First row: running sum along the top edge.
        for j in 1..m {
            let c = self.metric.apply(x[0], y[j]);
            cost.set(0, j, c + cost.get(0, j - 1));
        }

        // Interior: three-way minimum over above, left, and diagonal.
        // Ties break toward the first candidate encountered; no downstream
        // consumer depends on which.
        for i in 1..n {
            for j in 1..m {
                let c = self.metric.apply(x[i], y[j]);
                let best = cost
                    .get(i - 1, j)
                    .min(cost.get(i, j - 1))
                    .min(cost.get(i - 1, j - 1));
                cost.set(i, j, c + best);
            }
        }

        for i in 0..n {
            for j in 0..m {
                pointwise.set(i, j, self.metric.apply(x[i], y[j]));
            }
        }

        Ok(DtwResult { cost, pointwise })
    }

    /// Compute only the terminal DTW distance for a pair of sequences.
    ///
    /// # Errors
    ///
    /// Same conditions as [`compute`][Dtw::compute].
    pub fn distance(
        &self,
        a: SequenceView<'_>,
        b: SequenceView<'_>,
    ) -> Result<DtwDistance, DtwError> {
        Ok(self.compute(a, b)?.distance())
    }

    /// Compute terminal distances for two index-aligned batches.
    ///
    /// Row `i` of `xs` is compared only to row `i` of `ys`; lengths within a
    /// pair may differ. Pairs are processed sequentially — rows share no
    /// state, so parallelizing across pairs would be a safe extension.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::BatchLengthMismatch`] | `xs.len() != ys.len()` |
    /// | [`DtwError::MatrixTooLarge`] | Any pair exceeds the configured cell limit |
    #[instrument(skip(xs, ys), fields(n_pairs = xs.len()))]
    pub fn batch(&self, xs: &[Sequence], ys: &[Sequence]) -> Result<Vec<DtwDistance>, DtwError> {
        if xs.len() != ys.len() {
            return Err(DtwError::BatchLengthMismatch {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        xs.iter()
            .zip(ys.iter())
            .map(|(x, y)| self.distance(x.as_view(), y.as_view()))
            .collect()
    }
}

impl Default for Dtw {
    fn default() -> Self {
        Self::new(PointMetric::default())
    }
}
