//! DTW distance computation over numeric sequences.
//!
//! Pure math library — zero I/O. Builds the full cumulative-cost matrix for
//! a pair of sequences under a pluggable point metric and returns the
//! terminal accumulated cost, either for a single pair or for two
//! index-aligned batches of sequences.

mod distance;
mod dtw;
mod error;
mod matrix;
mod metric;
mod series;

pub use distance::DtwDistance;
pub use dtw::{Dtw, DtwResult};
pub use error::DtwError;
pub use matrix::CostMatrix;
pub use metric::PointMetric;
pub use series::{Sequence, SequenceView};
