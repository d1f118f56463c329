//! `anscombe-datasets` provides Anscombe's quartet ready to be used in tests, benchmarks and
//! reports.
//!
//! The quartet consists of four datasets of eleven samples each. They share nearly identical
//! means, variances, correlation and least squares line, yet look completely different when
//! plotted.
//!
//! The values are kept in the immutable table [`QUARTET`]; [`quartet`] and [`quartet_member`]
//! turn them into [`anscombe::Dataset`]s:
//! ```ignore
//! for dataset in anscombe_datasets::quartet() {
//!     let line = LinearRegression::params().fit(&dataset)?;
//!     /// ...
//! }
//! ```

use anscombe::Dataset;

/// Number of samples in every member of the quartet
pub const SAMPLES: usize = 11;

/// One member of the quartet as stored in the static table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Member {
    pub name: &'static str,
    pub records: [f64; SAMPLES],
    pub targets: [f64; SAMPLES],
}

impl Member {
    /// Copy the member into a named dataset
    pub fn to_dataset(&self) -> Dataset<f64> {
        Dataset::from((self.records, self.targets)).with_name(self.name)
    }
}

// records shared by the first three members
const SHARED_RECORDS: [f64; SAMPLES] = [10., 8., 13., 9., 11., 14., 6., 4., 12., 7., 5.];

/// Anscombe's quartet, in its conventional order
pub static QUARTET: [Member; 4] = [
    Member {
        name: "I",
        records: SHARED_RECORDS,
        targets: [
            8.04, 6.95, 7.58, 8.81, 8.33, 9.96, 7.24, 4.26, 10.84, 4.82, 5.68,
        ],
    },
    Member {
        name: "II",
        records: SHARED_RECORDS,
        targets: [
            9.14, 8.14, 8.74, 8.77, 9.26, 8.10, 6.13, 3.10, 9.13, 7.26, 4.74,
        ],
    },
    Member {
        name: "III",
        records: SHARED_RECORDS,
        targets: [
            7.46, 6.77, 12.74, 7.11, 7.81, 8.84, 6.08, 5.39, 8.15, 6.42, 5.73,
        ],
    },
    Member {
        name: "IV",
        records: [8., 8., 8., 8., 8., 8., 8., 19., 8., 8., 8.],
        targets: [
            6.58, 5.76, 7.71, 8.84, 8.47, 7.04, 5.25, 12.50, 5.56, 7.91, 6.89,
        ],
    },
];

/// All four members of the quartet, in order
pub fn quartet() -> Vec<Dataset<f64>> {
    QUARTET.iter().map(Member::to_dataset).collect()
}

/// A single member of the quartet by its 1-based position, `None` outside of `1..=4`
pub fn quartet_member(index: usize) -> Option<Dataset<f64>> {
    index
        .checked_sub(1)
        .and_then(|idx| QUARTET.get(idx))
        .map(Member::to_dataset)
}
