#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::dataset::Float;
use crate::error::Error;
use crate::param_guard::ParamGuard;

/// A verified hyper-parameter set ready for fitting a least squares line
///
/// See [`LinearRegressionParams`](crate::linear::LinearRegressionParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    pub(crate) fit_intercept: bool,
    pub(crate) degeneracy_threshold: F,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn degeneracy_threshold(&self) -> F {
        self.degeneracy_threshold
    }
}

/// A hyper-parameter set for least squares line fitting
///
/// The parameter set can be verified into a
/// [`LinearRegressionValidParams`](crate::linear::LinearRegressionValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a line with
/// [Fit::fit](crate::traits::Fit::fit) which implicitely verifies the parameter set prior to the
/// estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [with_intercept](Self::with_intercept) | `true` | Fit an intercept, otherwise the line runs through the origin | `false`, `true` |
/// | [degeneracy_threshold](Self::degeneracy_threshold) | `0.0` | Largest slope denominator still treated as degenerate | `[0, inf)` |
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionParams<F>(pub(crate) LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure the line fit
impl<F: Float> LinearRegressionParams<F> {
    /// Create default parameters. By default an intercept is fitted and only an exactly
    /// vanishing denominator is considered degenerate.
    pub fn new() -> Self {
        Self(LinearRegressionValidParams {
            fit_intercept: true,
            degeneracy_threshold: F::zero(),
        })
    }

    /// Configure the regression to fit an intercept.
    pub fn with_intercept(mut self, intercept: bool) -> Self {
        self.0.fit_intercept = intercept;
        self
    }

    /// Set the degeneracy threshold.
    ///
    /// The slope denominator, the sum of squared (centered) records, must exceed this value.
    ///
    /// `threshold` must be non-negative and finite.
    pub fn degeneracy_threshold(mut self, threshold: F) -> Self {
        self.0.degeneracy_threshold = threshold;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = Error;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let threshold = self.0.degeneracy_threshold;
        if !threshold.is_finite() || threshold < F::zero() {
            Err(Error::Parameters(format!(
                "degeneracy threshold should be non-negative and finite, but is {}",
                threshold
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
