//! Distance output formatting and writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use seqwarp_dtw::DtwDistance;
use tracing::{info, instrument};

use crate::IoError;

/// Destination for computed distances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OutputTarget {
    /// Write to standard output.
    Stdout,
    /// Write to the given file path.
    File(PathBuf),
}

/// Writes DTW distances as fixed-format text.
///
/// Single mode emits one 8-decimal value with no trailing newline, to
/// stdout or a file. Batch mode emits a bracketed space-separated list to
/// stdout, or a comma-joined list (no trailing newline) to a file.
pub struct DistanceWriter {
    target: OutputTarget,
}

impl DistanceWriter {
    /// Create a writer targeting standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            target: OutputTarget::Stdout,
        }
    }

    /// Create a writer targeting the given file path.
    #[must_use]
    pub fn file(path: &Path) -> Self {
        Self {
            target: OutputTarget::File(path.to_path_buf()),
        }
    }

    /// Write a single distance.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the target cannot be written.
    #[instrument(skip_all)]
    pub fn write_single(&self, distance: DtwDistance) -> Result<(), IoError> {
        self.write_text(&format!("{distance}"))
    }

    /// Write an index-aligned list of batch distances.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the target cannot be written.
    #[instrument(skip_all, fields(n = distances.len()))]
    pub fn write_batch(&self, distances: &[DtwDistance]) -> Result<(), IoError> {
        let text = match &self.target {
            OutputTarget::Stdout => format_batch_list(distances),
            OutputTarget::File(_) => format_batch_csv(distances),
        };
        self.write_text(&text)
    }

    fn write_text(&self, text: &str) -> Result<(), IoError> {
        match &self.target {
            OutputTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(text.as_bytes())
                    .and_then(|()| out.flush())
                    .map_err(|e| IoError::WriteFile {
                        path: PathBuf::from("<stdout>"),
                        source: e,
                    })
            }
            OutputTarget::File(path) => {
                fs::write(path, text).map_err(|e| IoError::WriteFile {
                    path: path.clone(),
                    source: e,
                })?;
                info!(path = %path.display(), "result written");
                Ok(())
            }
        }
    }
}

/// Human-readable bracketed list with trailing newline, for stdout.
fn format_batch_list(distances: &[DtwDistance]) -> String {
    let joined = distances
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{joined}]\n")
}

/// Comma-joined values with no trailing newline, for file output.
fn format_batch_csv(distances: &[DtwDistance]) -> String {
    distances
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use seqwarp_dtw::{Dtw, PointMetric, Sequence};
    use tempfile::TempDir;

    fn distances(pairs: &[(&[f64], &[f64])]) -> Vec<DtwDistance> {
        let engine = Dtw::new(PointMetric::SquaredError);
        pairs
            .iter()
            .map(|(x, y)| {
                let x = Sequence::new(x.to_vec()).unwrap();
                let y = Sequence::new(y.to_vec()).unwrap();
                engine.distance(x.as_view(), y.as_view()).unwrap()
            })
            .collect()
    }

    #[test]
    fn single_file_output_has_no_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let d = distances(&[(&[0.0, 0.0], &[1.0, 1.0])]);

        DistanceWriter::file(&path).write_single(d[0]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "2.00000000");
    }

    #[test]
    fn batch_file_output_is_comma_joined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let ds = distances(&[(&[1.0, 2.0], &[1.0, 2.0]), (&[0.0, 0.0], &[1.0, 1.0])]);

        DistanceWriter::file(&path).write_batch(&ds).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "0.00000000,2.00000000");
    }

    #[test]
    fn batch_list_format_is_bracketed() {
        let ds = distances(&[(&[1.0], &[1.0]), (&[0.0], &[3.0])]);
        assert_eq!(format_batch_list(&ds), "[0.00000000 9.00000000]\n");
    }

    #[test]
    fn batch_csv_format_single_entry() {
        let ds = distances(&[(&[0.0], &[2.0])]);
        assert_eq!(format_batch_csv(&ds), "4.00000000");
    }

    #[test]
    fn write_to_unwritable_path_errors() {
        let d = distances(&[(&[1.0], &[1.0])]);
        let result = DistanceWriter::file(Path::new("/nonexistent/dir/out.csv")).write_single(d[0]);
        assert!(matches!(result, Err(IoError::WriteFile { .. })));
    }
}
