//! `anscombe` fits least squares lines to bivariate datasets and measures how well they fit.
//!
//! The crate is named after Anscombe's quartet: four datasets with nearly identical regression
//! lines and coefficients of determination, but very different shapes. The quartet itself lives
//! in the companion crate `anscombe-datasets`, and `anscombe-report` prints the fitted lines.
//!
//! ## Current state
//!
//! * [`linear`]: ordinary least squares regression of one target on one record, via the
//!   [`Fit`](traits::Fit) trait or the [`least_squares`](linear::least_squares) shortcut
//! * [`metrics`]: regression metrics, most importantly the coefficient of determination R²
//! * [`correlation`]: Pearson's correlation coefficient
//!
//! Degenerate datasets, where all records or all targets share one value, are rejected with
//! [`Error::DegenerateInput`] instead of producing infinite or NaN results.
//!
//! ```rust
//! use anscombe::prelude::*;
//! use anscombe::linear::LinearRegression;
//!
//! let dataset = Dataset::from_slices(&[1., 2., 3., 4.], &[2.1, 3.9, 6.2, 7.8]).unwrap();
//! let line = LinearRegression::params().fit(&dataset).unwrap();
//! let r2 = line.r2(&dataset).unwrap();
//! assert!(r2 > 0.99);
//! ```

pub mod correlation;
pub mod dataset;
pub mod error;
pub mod linear;
mod metrics_regression;
mod param_guard;
pub mod prelude;
pub mod traits;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

pub use dataset::{Dataset, Float};
pub use error::{Degeneracy, Error, Result};
pub use param_guard::ParamGuard;

/// Common metrics functions for regression
pub mod metrics {
    pub use crate::correlation::pearson_correlation;
    pub use crate::metrics_regression::{r_squared, Regression};
}
