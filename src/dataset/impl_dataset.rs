use ndarray::{Array1, ArrayView1};

use super::{Dataset, Float};
use crate::error::{Error, Result};

impl<F: Float> Dataset<F> {
    /// Create a new dataset from records and targets
    ///
    /// Fails with `LengthMismatch` when the two sequences cannot be paired up.
    pub fn new(records: Array1<F>, targets: Array1<F>) -> Result<Self> {
        if records.len() != targets.len() {
            return Err(Error::LengthMismatch {
                records: records.len(),
                targets: targets.len(),
            });
        }

        Ok(Dataset {
            records,
            targets,
            name: None,
        })
    }

    /// Create a new dataset by copying two slices
    pub fn from_slices(records: &[F], targets: &[F]) -> Result<Self> {
        Dataset::new(Array1::from(records.to_vec()), Array1::from(targets.to_vec()))
    }

    /// Attach a descriptive name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Independent variable
    pub fn records(&self) -> &Array1<F> {
        &self.records
    }

    /// Dependent variable
    pub fn targets(&self) -> &Array1<F> {
        &self.targets
    }

    pub fn nsamples(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow records and targets together
    pub fn view(&self) -> (ArrayView1<'_, F>, ArrayView1<'_, F>) {
        (self.records.view(), self.targets.view())
    }

    /// Iterate over `(x, y)` pairs
    pub fn sample_iter(&self) -> impl Iterator<Item = (F, F)> + '_ {
        self.records
            .iter()
            .copied()
            .zip(self.targets.iter().copied())
    }
}

/// Arrays of equal size always pair up, so this conversion cannot fail
impl<F: Float, const N: usize> From<([F; N], [F; N])> for Dataset<F> {
    fn from(rec_tar: ([F; N], [F; N])) -> Self {
        Dataset {
            records: Array1::from(rec_tar.0.to_vec()),
            targets: Array1::from(rec_tar.1.to_vec()),
            name: None,
        }
    }
}
