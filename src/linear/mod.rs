//! Least squares regression of a single target on a single record
//!
//! The estimator follows the usual parameter guard pattern: [`LinearRegression::params`] returns
//! unchecked [`LinearRegressionParams`], fitting them on a [`Dataset`](crate::Dataset) yields a
//! fitted [`LinearRegression`] line. [`least_squares`] is a shortcut for the default parameters
//! working directly on two arrays.
use ndarray::{ArrayBase, Data, Ix1};

use crate::dataset::Float;
use crate::error::Result;
use crate::param_guard::ParamGuard;

mod algorithm;
mod hyperparams;

pub use algorithm::*;
pub use hyperparams::*;

/// Slope and intercept of the least squares line through `(x[i], y[i])`
///
/// ```rust
/// use anscombe::linear::least_squares;
/// use ndarray::array;
///
/// let (slope, intercept) = least_squares(&array![1f64, 2., 3.], &array![2., 4., 6.]).unwrap();
/// assert!((slope - 2.).abs() < 1e-12);
/// assert!(intercept.abs() < 1e-12);
/// ```
pub fn least_squares<F, D1, D2>(x: &ArrayBase<D1, Ix1>, y: &ArrayBase<D2, Ix1>) -> Result<(F, F)>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    let params = LinearRegressionParams::new().check()?;
    let line = algorithm::fit_line(&params, x.view(), y.view())?;

    Ok((line.slope(), line.intercept()))
}
