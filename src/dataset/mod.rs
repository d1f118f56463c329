//! Datasets
//!
//! This module implements the bivariate dataset struct and the floating point bound shared by
//! every calculator in this crate.
use ndarray::{Array1, NdFloat};
use num_traits::{FromPrimitive, NumCast};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::iter::Sum;

mod impl_dataset;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Records and targets of a dataset, as well
/// as slope, intercept and R² of a fit, are expressed in it.
pub trait Float: NdFloat + FromPrimitive + Default + Sum {
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Dataset
///
/// An ordered pair of equal-length sequences. The records `x` are the independent variable, the
/// targets `y` the dependent one, and `x[i]` is paired with `y[i]`.
///
/// # Fields
///
/// * `records`: one-dimensional array with dimensionality (nsamples)
/// * `targets`: one-dimensional array with dimensionality (nsamples)
/// * `name`: optional descriptive name, used when reporting
///
/// The length invariant is checked when the dataset is built, see [`Dataset::new`].
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    pub(crate) records: Array1<F>,
    pub(crate) targets: Array1<F>,
    pub(crate) name: Option<String>,
}
