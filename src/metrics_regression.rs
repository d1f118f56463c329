//! Common metrics for regression
//!
//! This module implements comparison metrices for continuous variables and the coefficient of
//! determination of a fitted line.

use ndarray::prelude::*;
use ndarray::{Data, IntoNdProducer};

use crate::dataset::Float;
use crate::error::{check_samples, Degeneracy, Error, Result};

/// Regression metrices trait
///
/// Implemented for predictions, `compare_to` holds the observed ground truth.
pub trait Regression<'a, A: 'a, T: IntoNdProducer<Item = &'a A, Dim = Ix1, Output = ArrayView<'a, A, Ix1>>>
{
    /// Maximal error between two continuous variables
    fn max_error(&self, compare_to: T) -> Result<A>;
    /// Mean squared error between two continuous variables
    fn mean_squared_error(&self, compare_to: T) -> Result<A>;
    /// Sum of the squared differences between two continuous variables
    fn residual_sum_of_squares(&self, compare_to: T) -> Result<A>;
    /// R squared coefficient, is the proportion of the variance in the dependent variable that is
    /// predictable from the independent variable.
    ///
    /// To evaluate the accuracy of a prediction, use
    /// ```ignore
    /// prediction.r2(&ground_truth)
    /// ```
    ///
    /// Fails with `DegenerateInput` if the ground truth is constant.
    fn r2(&self, compare_to: T) -> Result<A>;
}

impl<'a, A, D, T> Regression<'a, A, T> for ArrayBase<D, Ix1>
where
    A: 'a + Float,
    D: Data<Elem = A>,
    T: IntoNdProducer<Item = &'a A, Dim = Ix1, Output = ArrayView<'a, A, Ix1>>,
{
    fn max_error(&self, compare_to: T) -> Result<A> {
        let compare_to = compare_to.into_producer();
        check_samples(self.len(), compare_to.len())?;

        Ok(self
            .iter()
            .zip(compare_to.iter())
            .map(|(&a, &b)| (a - b).abs())
            .fold(A::neg_infinity(), A::max))
    }

    fn mean_squared_error(&self, compare_to: T) -> Result<A> {
        let n = self.len();
        let rss = self.residual_sum_of_squares(compare_to)?;

        Ok(rss / A::cast(n))
    }

    fn residual_sum_of_squares(&self, compare_to: T) -> Result<A> {
        let compare_to = compare_to.into_producer();
        check_samples(self.len(), compare_to.len())?;

        Ok(squared_deviations(&compare_to, self.iter().copied()))
    }

    // r2 = 1 - sum((y_i - pred_i)^2)/sum((y_i - mean_y)^2)
    // the mean is taken over `compare_to`, the observations
    fn r2(&self, compare_to: T) -> Result<A> {
        let compare_to = compare_to.into_producer();
        check_samples(self.len(), compare_to.len())?;

        if is_constant(&compare_to) {
            return Err(Error::DegenerateInput(Degeneracy::ConstantTargets));
        }

        let mean = mean(&compare_to);
        let residual_ss = squared_deviations(&compare_to, self.iter().copied());
        let total_ss = squared_deviations(&compare_to, std::iter::repeat(mean));

        if total_ss == A::zero() {
            return Err(Error::DegenerateInput(Degeneracy::ConstantTargets));
        }

        Ok(A::one() - residual_ss / total_ss)
    }
}

/// Coefficient of determination of the line `y = slope * x + intercept` on the samples
/// `(x[i], y[i])`
///
/// Fails with `LengthMismatch` or `NotEnoughSamples` if the samples cannot be paired up and with
/// `DegenerateInput` if all targets are identical.
pub fn r_squared<F, D1, D2>(
    x: &ArrayBase<D1, Ix1>,
    y: &ArrayBase<D2, Ix1>,
    slope: F,
    intercept: F,
) -> Result<F>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    check_samples(x.len(), y.len())?;

    let predicted = x.mapv(|x| slope * x + intercept);
    predicted.r2(y)
}

/// Arithmetic mean, summed in sample order
pub(crate) fn mean<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix1>) -> F {
    x.iter().copied().sum::<F>() / F::cast(x.len())
}

pub(crate) fn is_constant<F: Float, D: Data<Elem = F>>(x: &ArrayBase<D, Ix1>) -> bool {
    let mut values = x.iter();
    match values.next() {
        Some(first) => values.all(|v| v == first),
        None => true,
    }
}

fn squared_deviations<F: Float, D: Data<Elem = F>>(
    observed: &ArrayBase<D, Ix1>,
    reference: impl Iterator<Item = F>,
) -> F {
    observed
        .iter()
        .zip(reference)
        .map(|(&y, r)| (y - r) * (y - r))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_same() {
        let a: Array1<f32> = Array1::range(0., 100., 1.);

        assert_abs_diff_eq!(a.max_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.mean_squared_error(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.residual_sum_of_squares(&a).unwrap(), 0.0f32);
        assert_abs_diff_eq!(a.r2(&a).unwrap(), 1.0f32);
    }

    #[test]
    fn test_max_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.3, 0.2, 0.5, 0.7];

        assert_abs_diff_eq!(a.max_error(&b).unwrap(), 0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_mean_squared_error() {
        let a = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let b = array![0.1, 0.2, 0.3, 0.4, 0.5];

        assert_abs_diff_eq!(a.mean_squared_error(&b).unwrap(), 0.01, epsilon = 1e-5);
    }

    #[test]
    fn test_r2() {
        let targets = array![0.0, 0.1, 0.2, 0.3, 0.4];
        let prediction = array![0.1, 0.3, 0.2, 0.5, 0.7];

        // worse than predicting the mean
        assert_abs_diff_eq!(prediction.r2(&targets).unwrap(), -0.8, epsilon = 1e-5);
        assert_abs_diff_eq!(
            prediction.r2(targets.view()).unwrap(),
            prediction.r2(&targets).unwrap()
        );
    }

    #[test]
    fn test_r2_constant_targets() {
        let targets = array![2.0, 2.0, 2.0];
        let prediction = array![1.0, 2.0, 3.0];

        assert_eq!(
            prediction.r2(&targets),
            Err(Error::DegenerateInput(Degeneracy::ConstantTargets))
        );
    }

    #[test]
    fn test_length_mismatch() {
        let a = array![0.0, 0.1];
        let b = array![0.0, 0.1, 0.2];

        assert_eq!(
            a.r2(&b),
            Err(Error::LengthMismatch {
                records: 2,
                targets: 3
            })
        );
        assert!(a.max_error(&b).is_err());
        assert_eq!(
            Array1::<f64>::zeros(0).mean_squared_error(&Array1::zeros(0)),
            Err(Error::NotEnoughSamples)
        );
    }

    #[test]
    fn r_squared_of_exact_line_is_one() {
        let x = array![1., 5.];
        let y = array![3., 11.];

        assert_abs_diff_eq!(r_squared(&x, &y, 2., 1.).unwrap(), 1., epsilon = 1e-12);
    }

    #[test]
    fn r_squared_of_mean_line_is_zero() {
        let x = array![1., 2., 3., 4.];
        let y = array![1., 3., 2., 4.];

        // horizontal line through the mean explains nothing
        assert_abs_diff_eq!(r_squared(&x, &y, 0., 2.5).unwrap(), 0., epsilon = 1e-12);
    }

    #[test]
    fn r_squared_rejects_degenerate_samples() {
        let x = array![1., 2., 3.];

        assert_eq!(
            r_squared(&x, &array![4., 4., 4.], 0.5, 3.),
            Err(Error::DegenerateInput(Degeneracy::ConstantTargets))
        );
        assert_eq!(
            r_squared(&x, &array![4., 4.], 0.5, 3.),
            Err(Error::LengthMismatch {
                records: 3,
                targets: 2
            })
        );
    }

    #[test]
    fn mean_is_sequential() {
        assert_abs_diff_eq!(mean(&array![1., 2., 3., 6.]), 3.);
        assert!(is_constant(&array![8., 8.]));
        assert!(!is_constant(&array![8., 19.]));
    }
}
