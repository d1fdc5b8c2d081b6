//! I/O error types for seqwarp-io.

use std::path::PathBuf;

/// Errors from file I/O, delimited-text parsing, and result writing.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when the input file does not exist or is unreadable.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Returned when the CSV parser encounters a malformed record.
    #[error("CSV parse error in {path} at byte offset {offset}")]
    CsvParse {
        /// Path to the input file.
        path: PathBuf,
        /// Byte offset where the error occurred.
        offset: u64,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// Returned when the input file contains no data rows.
    #[error("empty input (no data rows) in {path}")]
    EmptyInput {
        /// Path to the input file.
        path: PathBuf,
    },

    /// Returned when a batch row has a different column count than the first row.
    #[error("inconsistent row length in {path}: row {row_index} has {got} columns, expected {expected}")]
    InconsistentRowLength {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Expected number of columns (from the first row).
        expected: usize,
        /// Actual number of columns in this row.
        got: usize,
    },

    /// Returned in strict mode when a cell is not a finite float.
    #[error("invalid value in {path}: row {row_index}, column {col_index}, raw value \"{raw}\"")]
    InvalidValue {
        /// Path to the input file.
        path: PathBuf,
        /// Zero-based row index.
        row_index: usize,
        /// Zero-based column index.
        col_index: usize,
        /// The raw string value that failed to parse.
        raw: String,
    },

    /// Returned when the output file cannot be written.
    #[error("cannot write file {path}")]
    WriteFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
