//! Delimited-text sequence readers with per-cell validation.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use seqwarp_dtw::Sequence;
use tracing::{debug, info, instrument, warn};

use crate::IoError;

/// Policy for numeric cells that do not parse to a finite float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Malformed cells are an error naming the offending row and column.
    #[default]
    Strict,

    /// Malformed cells are coerced to `0.0`, each with a logged warning.
    ///
    /// Matches the legacy tool's silent coercion, made visible.
    Lenient,
}

fn parse_cell(
    raw: &str,
    policy: ParsePolicy,
    path: &Path,
    row_index: usize,
    col_index: usize,
) -> Result<f64, IoError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => match policy {
            ParsePolicy::Strict => Err(IoError::InvalidValue {
                path: path.to_path_buf(),
                row_index,
                col_index,
                raw: raw.to_string(),
            }),
            ParsePolicy::Lenient => {
                warn!(row = row_index, col = col_index, raw, "coercing unparsable cell to 0.0");
                Ok(0.0)
            }
        },
    }
}

/// Reads a single 1-D sequence from a delimited text file.
///
/// Expected format: one value per row; only the first column is read,
/// extra columns are ignored. No header row.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyInput`] | Zero data rows |
/// | [`IoError::InvalidValue`] | Strict mode: cell is not a finite float |
pub struct SequenceReader {
    path: PathBuf,
    policy: ParsePolicy,
}

impl SequenceReader {
    /// Create a new reader for the given file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            policy: ParsePolicy::default(),
        }
    }

    /// Set the cell parse policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read and validate the file, returning a [`Sequence`].
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Sequence, IoError> {
        let records = read_records(&self.path)?;

        let mut values = Vec::with_capacity(records.len());
        for (row_index, record) in records.iter().enumerate() {
            let raw = record.get(0).unwrap_or("");
            values.push(parse_cell(raw, self.policy, &self.path, row_index, 0)?);
        }

        let sequence = Sequence::new(values).map_err(|_| IoError::EmptyInput {
            path: self.path.clone(),
        })?;

        info!(n_values = sequence.len(), "sequence loaded");
        Ok(sequence)
    }
}

/// Reads a 2-D batch of sequences, one per row, from a delimited text file.
///
/// All rows must have the same number of columns as the first row. No
/// header row.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`IoError::FileNotFound`] | File doesn't exist or is unreadable |
/// | [`IoError::CsvParse`] | Malformed CSV record |
/// | [`IoError::EmptyInput`] | Zero data rows |
/// | [`IoError::InconsistentRowLength`] | Row column count differs from the first row |
/// | [`IoError::InvalidValue`] | Strict mode: cell is not a finite float |
pub struct BatchReader {
    path: PathBuf,
    policy: ParsePolicy,
}

impl BatchReader {
    /// Create a new reader for the given file path.
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            policy: ParsePolicy::default(),
        }
    }

    /// Set the cell parse policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read and validate the file, returning one [`Sequence`] per row.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<Sequence>, IoError> {
        let records = read_records(&self.path)?;

        if records.is_empty() {
            return Err(IoError::EmptyInput {
                path: self.path.clone(),
            });
        }

        let expected_cols = records[0].len();
        debug!(expected_cols, n_rows = records.len(), "batch shape");

        let mut sequences = Vec::with_capacity(records.len());
        for (row_index, record) in records.iter().enumerate() {
            if record.len() != expected_cols {
                return Err(IoError::InconsistentRowLength {
                    path: self.path.clone(),
                    row_index,
                    expected: expected_cols,
                    got: record.len(),
                });
            }

            let mut values = Vec::with_capacity(expected_cols);
            for (col_index, raw) in record.iter().enumerate() {
                values.push(parse_cell(raw, self.policy, &self.path, row_index, col_index)?);
            }

            let sequence = Sequence::new(values).map_err(|_| IoError::EmptyInput {
                path: self.path.clone(),
            })?;
            sequences.push(sequence);
        }

        info!(
            n_sequences = sequences.len(),
            row_len = sequences.first().map_or(0, Sequence::len),
            "batch loaded"
        );
        Ok(sequences)
    }
}

/// Open a file and collect all records.
///
/// `flexible(true)` allows rows with varying column counts so that our own
/// shape checks fire instead of a low-level CsvParse error.
fn read_records(path: &Path) -> Result<Vec<StringRecord>, IoError> {
    let file = std::fs::File::open(path).map_err(|e| IoError::FileNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| IoError::CsvParse {
            path: path.to_path_buf(),
            offset: e.position().map_or(0, |p| p.byte()),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn read_valid_sequence() {
        let f = write_file("1.0\n2.5\n-3.0\n");
        let s = SequenceReader::new(f.path()).read().unwrap();
        assert_eq!(s.as_slice(), &[1.0, 2.5, -3.0]);
    }

    #[test]
    fn extra_columns_ignored_in_1d() {
        let f = write_file("1.0,9.9\n2.0,8.8\n");
        let s = SequenceReader::new(f.path()).read().unwrap();
        assert_eq!(s.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn scientific_notation_round_trip() {
        let f = write_file("1.23456789e2\n-4.2e-3\n");
        let s = SequenceReader::new(f.path()).read().unwrap();
        assert!((s.as_slice()[0] - 123.456789).abs() < 1e-9);
        assert!((s.as_slice()[1] - -0.0042).abs() < 1e-12);
    }

    #[test]
    fn error_file_not_found() {
        let result = SequenceReader::new(Path::new("/nonexistent/x.csv")).read();
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn error_empty_sequence_file() {
        let f = write_file("");
        let result = SequenceReader::new(f.path()).read();
        assert!(matches!(result, Err(IoError::EmptyInput { .. })));
    }

    #[test]
    fn strict_rejects_unparsable_cell() {
        let f = write_file("1.0\nabc\n3.0\n");
        let result = SequenceReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::InvalidValue { row_index: 1, col_index: 0, .. })
        ));
    }

    #[test]
    fn strict_rejects_nan_cell() {
        let f = write_file("1.0\nNaN\n");
        let result = SequenceReader::new(f.path()).read();
        assert!(matches!(result, Err(IoError::InvalidValue { row_index: 1, .. })));
    }

    #[test]
    fn lenient_coerces_unparsable_to_zero() {
        let f = write_file("1.0\nabc\n3.0\n");
        let s = SequenceReader::new(f.path())
            .with_policy(ParsePolicy::Lenient)
            .read()
            .unwrap();
        assert_eq!(s.as_slice(), &[1.0, 0.0, 3.0]);
    }

    #[test]
    fn lenient_coerces_nan_to_zero() {
        let f = write_file("NaN\n2.0\n");
        let s = SequenceReader::new(f.path())
            .with_policy(ParsePolicy::Lenient)
            .read()
            .unwrap();
        assert_eq!(s.as_slice(), &[0.0, 2.0]);
    }

    #[test]
    fn read_valid_batch() {
        let f = write_file("1.0,2.0,3.0\n4.0,5.0,6.0\n");
        let rows = BatchReader::new(f.path()).read().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(rows[1].as_slice(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn batch_row_order_preserved() {
        let f = write_file("9.0\n1.0\n5.0\n");
        let rows = BatchReader::new(f.path()).read().unwrap();
        assert_eq!(rows[0].as_slice(), &[9.0]);
        assert_eq!(rows[1].as_slice(), &[1.0]);
        assert_eq!(rows[2].as_slice(), &[5.0]);
    }

    #[test]
    fn error_jagged_batch() {
        let f = write_file("1.0,2.0,3.0\n4.0,5.0\n");
        let result = BatchReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::InconsistentRowLength { row_index: 1, expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn error_empty_batch_file() {
        let f = write_file("");
        let result = BatchReader::new(f.path()).read();
        assert!(matches!(result, Err(IoError::EmptyInput { .. })));
    }

    #[test]
    fn batch_strict_names_offending_cell() {
        let f = write_file("1.0,2.0\n3.0,oops\n");
        let result = BatchReader::new(f.path()).read();
        assert!(matches!(
            result,
            Err(IoError::InvalidValue { row_index: 1, col_index: 1, .. })
        ));
    }

    #[test]
    fn batch_lenient_round_trip() {
        let f = write_file("1.0,x\n2.0,3.0\n");
        let rows = BatchReader::new(f.path())
            .with_policy(ParsePolicy::Lenient)
            .read()
            .unwrap();
        assert_eq!(rows[0].as_slice(), &[1.0, 0.0]);
        assert_eq!(rows[1].as_slice(), &[2.0, 3.0]);
    }
}
