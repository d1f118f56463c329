//! Correlation analysis of a bivariate dataset
//!
use ndarray::{ArrayBase, Data, Ix1};

use crate::dataset::{Dataset, Float};
use crate::error::{check_samples, Degeneracy, Error, Result};
use crate::metrics_regression::{is_constant, mean};

/// Pearson's correlation coefficient between `x` and `y`
///
/// For a least squares line with intercept the square of this coefficient equals the R² of the
/// fit. Fails with `DegenerateInput` if either variable is constant.
pub fn pearson_correlation<F, D1, D2>(x: &ArrayBase<D1, Ix1>, y: &ArrayBase<D2, Ix1>) -> Result<F>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    check_samples(x.len(), y.len())?;

    if is_constant(x) {
        return Err(Error::DegenerateInput(Degeneracy::ConstantRecords));
    }
    if is_constant(y) {
        return Err(Error::DegenerateInput(Degeneracy::ConstantTargets));
    }

    let (mean_x, mean_y) = (mean(x), mean(y));
    let (covariance, var_x, var_y) = x.iter().zip(y.iter()).fold(
        (F::zero(), F::zero(), F::zero()),
        |(cov, var_x, var_y), (&xi, &yi)| {
            let (dx, dy) = (xi - mean_x, yi - mean_y);
            (cov + dx * dy, var_x + dx * dx, var_y + dy * dy)
        },
    );

    Ok(covariance / (var_x * var_y).sqrt())
}

impl<F: Float> Dataset<F> {
    /// Pearson's correlation coefficient between records and targets
    pub fn pearson_correlation(&self) -> Result<F> {
        pearson_correlation(self.records(), self.targets())
    }
}
