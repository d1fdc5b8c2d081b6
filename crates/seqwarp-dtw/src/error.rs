//! Error types for DTW computation.

/// Errors from sequence validation and DTW computation.
#[derive(Debug, thiserror::Error)]
pub enum DtwError {
    /// Returned when an empty slice is provided as a sequence.
    #[error("sequence must be non-empty")]
    EmptySequence,

    /// Returned when a sequence contains NaN, infinity, or negative infinity.
    #[error("sequence contains non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first non-finite value found.
        index: usize,
    },

    /// Returned when batch mode is given batches of different lengths.
    #[error("batch length mismatch: X has {x_len} sequences, Y has {y_len}")]
    BatchLengthMismatch {
        /// Number of sequences in the X batch.
        x_len: usize,
        /// Number of sequences in the Y batch.
        y_len: usize,
    },

    /// Returned when the cost matrix would exceed the configured cell limit.
    #[error("cost matrix {rows}x{cols} exceeds the configured limit of {limit} cells")]
    MatrixTooLarge {
        /// Rows the matrix would need (|x|).
        rows: usize,
        /// Columns the matrix would need (|y|).
        cols: usize,
        /// Configured maximum cell count.
        limit: usize,
    },
}
