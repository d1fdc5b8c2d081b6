//! Validated input sequences.
//!
//! The recurrence indexes `x[0]`/`y[0]` unconditionally and sums pointwise
//! costs, so both preconditions — at least one element, no NaN/infinity —
//! are enforced here at construction. Everything downstream works on
//! already-checked data.

use crate::error::DtwError;

fn check(values: &[f64]) -> Result<(), DtwError> {
    if values.is_empty() {
        return Err(DtwError::EmptySequence);
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(DtwError::NonFiniteValue { index });
    }
    Ok(())
}

/// An owned sequence of real values, length >= 1, all finite.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Validate and wrap a vector of values.
    ///
    /// # Errors
    ///
    /// [`DtwError::EmptySequence`] for a zero-length input,
    /// [`DtwError::NonFiniteValue`] for the first NaN or infinity found.
    pub fn new(values: Vec<f64>) -> Result<Self, DtwError> {
        check(&values)?;
        Ok(Self { values })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false once constructed; paired with [`len`](Sequence::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying values.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Borrow as a [`SequenceView`] without re-validating.
    #[must_use]
    pub fn as_view(&self) -> SequenceView<'_> {
        SequenceView {
            values: &self.values,
        }
    }
}

/// A borrowed, already-validated sequence. What the engine computes over.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a> {
    values: &'a [f64],
}

impl<'a> SequenceView<'a> {
    /// Validate and wrap a borrowed slice.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Sequence::new`].
    pub fn new(values: &'a [f64]) -> Result<Self, DtwError> {
        check(values)?;
        Ok(Self { values })
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false once constructed; paired with [`len`](SequenceView::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.values
    }
}
