//! Error types in Anscombe
//!
use std::fmt;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid parameter {0}")]
    Parameters(String),
    #[error("records and targets differ in length ({records} vs. {targets})")]
    LengthMismatch { records: usize, targets: usize },
    #[error("at least one sample needed")]
    NotEnoughSamples,
    #[error("degenerate input, {0}")]
    DegenerateInput(Degeneracy),
}

/// The way in which a dataset fails to determine a line or a fit quality
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degeneracy {
    /// All records share one value, the slope is undefined
    ConstantRecords,
    /// All targets share one value, the total sum of squares vanishes
    ConstantTargets,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::ConstantRecords => write!(f, "records have zero variance"),
            Degeneracy::ConstantTargets => write!(f, "targets have zero total sum of squares"),
        }
    }
}

/// Check that records and targets pair up and are not empty
pub(crate) fn check_samples(records: usize, targets: usize) -> Result<()> {
    if records != targets {
        Err(Error::LengthMismatch { records, targets })
    } else if records == 0 {
        Err(Error::NotEnoughSamples)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let err = Error::LengthMismatch {
            records: 3,
            targets: 2,
        };
        assert_eq!(
            err.to_string(),
            "records and targets differ in length (3 vs. 2)"
        );

        let err = Error::DegenerateInput(Degeneracy::ConstantRecords);
        assert_eq!(
            err.to_string(),
            "degenerate input, records have zero variance"
        );
        assert_eq!(
            Error::NotEnoughSamples.to_string(),
            "at least one sample needed"
        );
    }

    #[test]
    fn sample_check_prefers_mismatch_over_empty() {
        assert_eq!(
            check_samples(0, 1),
            Err(Error::LengthMismatch {
                records: 0,
                targets: 1
            })
        );
        assert_eq!(check_samples(0, 0), Err(Error::NotEnoughSamples));
        assert!(check_samples(2, 2).is_ok());
    }
}
