//! Point distance metrics.

use tracing::warn;

/// Pointwise distance function applied to one element of each sequence.
///
/// Currently squared error is the only metric. The set is closed but
/// deliberately an enum so that adding a metric is a new variant plus a
/// `from_tag` arm, not a trait object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointMetric {
    /// Squared error: `(a - b)^2`.
    #[default]
    SquaredError,
}

impl PointMetric {
    /// Resolve a metric from its command-line tag.
    ///
    /// `"se"` selects squared error. Any unrecognized tag also resolves to
    /// squared error — this permissive fallback is intentional, kept for
    /// compatibility with existing callers, and logged as a warning.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "se" => Self::SquaredError,
            other => {
                warn!(tag = other, "unrecognized metric tag, falling back to squared error");
                Self::SquaredError
            }
        }
    }

    /// Compute the pointwise distance between two values.
    #[inline]
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::SquaredError => (a - b).powi(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_error_values() {
        let m = PointMetric::SquaredError;
        assert_eq!(m.apply(3.0, 1.0), 4.0);
        assert_eq!(m.apply(1.0, 3.0), 4.0);
        assert_eq!(m.apply(2.5, 2.5), 0.0);
    }

    #[test]
    fn known_tag_resolves() {
        assert_eq!(PointMetric::from_tag("se"), PointMetric::SquaredError);
    }

    #[test]
    fn fallback_tag_resolves_to_squared_error() {
        assert_eq!(PointMetric::from_tag("euclidean"), PointMetric::SquaredError);
        assert_eq!(PointMetric::from_tag(""), PointMetric::SquaredError);
    }

    #[test]
    fn default_is_squared_error() {
        assert_eq!(PointMetric::default(), PointMetric::SquaredError);
    }
}
