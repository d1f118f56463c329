//! Ordinary least squares line fitting
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::hyperparams::{LinearRegressionParams, LinearRegressionValidParams};
use crate::dataset::{Dataset, Float};
use crate::error::{check_samples, Degeneracy, Error, Result};
use crate::metrics_regression::{is_constant, mean, r_squared};
use crate::traits::{Fit, PredictInplace};

/// A least squares line `y = slope * x + intercept`.
///
/// The line minimizes the residual sum of squares between the observed targets in the dataset
/// and the targets predicted by the line:
///
/// ```ignore
/// slope = Σ (x_i - mean_x)(y_i - mean_y) / Σ (x_i - mean_x)²
/// intercept = mean_y - slope * mean_x
/// ```
///
/// ## Examples
///
/// ```rust
/// use anscombe::prelude::*;
/// use anscombe::linear::LinearRegression;
///
/// let dataset = Dataset::from_slices(&[0f64, 1., 2.], &[1., 3., 5.]).unwrap();
/// let line = LinearRegression::params().fit(&dataset).unwrap();
///
/// assert!((line.slope() - 2.).abs() < 1e-12);
/// assert!((line.intercept() - 1.).abs() < 1e-12);
/// assert!((line.r2(&dataset).unwrap() - 1.).abs() < 1e-12);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearRegression<F> {
    slope: F,
    intercept: F,
}

impl<F: Float> LinearRegression<F> {
    /// Create default hyper parameters for a line fit
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// Rate of change of the targets per unit of the records
    pub fn slope(&self) -> F {
        self.slope
    }

    /// Value of the line at `x = 0`, zero if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Coefficient of determination of this line on `dataset`
    pub fn r2(&self, dataset: &Dataset<F>) -> Result<F> {
        r_squared(dataset.records(), dataset.targets(), self.slope, self.intercept)
    }

    fn evaluate(&self, x: F) -> F {
        self.slope * x + self.intercept
    }
}

impl<F: Float> Fit<F> for LinearRegressionValidParams<F> {
    type Object = LinearRegression<F>;

    /// Fit a line through the `(records, targets)` pairs of `dataset`
    ///
    /// Fails with `NotEnoughSamples` for an empty dataset and with `DegenerateInput` if the slope
    /// denominator vanishes, i.e. all records share the same value (or are all zero when no
    /// intercept is fitted).
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let (x, y) = dataset.view();
        fit_line(self, x, y)
    }
}

pub(crate) fn fit_line<F: Float>(
    params: &LinearRegressionValidParams<F>,
    x: ArrayView1<F>,
    y: ArrayView1<F>,
) -> Result<LinearRegression<F>> {
    check_samples(x.len(), y.len())?;

    let (mean_x, mean_y) = if params.fit_intercept() {
        if is_constant(&x) {
            return Err(Error::DegenerateInput(Degeneracy::ConstantRecords));
        }
        (mean(&x), mean(&y))
    } else {
        (F::zero(), F::zero())
    };

    let (numerator, denominator) = x.iter().zip(y.iter()).fold(
        (F::zero(), F::zero()),
        |(numerator, denominator), (&xi, &yi)| {
            let dx = xi - mean_x;
            (numerator + dx * (yi - mean_y), denominator + dx * dx)
        },
    );

    // NaN records leave the denominator undefined
    if denominator.is_nan() || denominator <= params.degeneracy_threshold() {
        return Err(Error::DegenerateInput(Degeneracy::ConstantRecords));
    }

    let slope = numerator / denominator;
    Ok(LinearRegression {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix1>, Array1<F>>
    for LinearRegression<F>
{
    /// Given the records `x` return the targets according to the fitted line
    fn predict_inplace(&self, x: &ArrayBase<D, Ix1>, y: &mut Array1<F>) {
        assert_eq!(
            x.len(),
            y.len(),
            "The number of data points must match the number of output targets."
        );

        for (target, &record) in y.iter_mut().zip(x.iter()) {
            *target = self.evaluate(record);
        }
    }

    fn default_target(&self, x: &ArrayBase<D, Ix1>) -> Array1<F> {
        Array1::zeros(x.len())
    }
}

impl<F: Float> PredictInplace<Dataset<F>, Array1<F>> for LinearRegression<F> {
    fn predict_inplace(&self, dataset: &Dataset<F>, y: &mut Array1<F>) {
        self.predict_inplace(dataset.records(), y)
    }

    fn default_target(&self, dataset: &Dataset<F>) -> Array1<F> {
        Array1::zeros(dataset.nsamples())
    }
}
