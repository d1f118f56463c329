//! Report on the least squares lines of a sequence of datasets
//!
//! Every dataset is fitted with the default [`LinearRegression`] parameters and scored with R².
//! The rendered report lists the datasets 1-indexed, each followed by an empty line:
//!
//! ```text
//! Dataset 1:
//! Slope: 0.5001
//! Intercept: 3.0001
//! R²: 0.6665
//!
//! ```
use std::fmt;

use anscombe::linear::LinearRegression;
use anscombe::prelude::*;

/// Fitted line and goodness of fit of one dataset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub index: usize,
    pub slope: f64,
    pub intercept: f64,
    pub r2: f64,
}

impl Summary {
    /// Fit `dataset` and score the line, `index` is the 1-based position in the report
    pub fn of(index: usize, dataset: &Dataset<f64>) -> Result<Self> {
        let line = LinearRegression::params().fit(dataset)?;
        let r2 = line.r2(dataset)?;

        tracing::debug!(
            dataset = index,
            dataset_name = dataset.name().unwrap_or_default(),
            slope = line.slope(),
            intercept = line.intercept(),
            r2,
            "fitted dataset"
        );

        Ok(Summary {
            index,
            slope: line.slope(),
            intercept: line.intercept(),
            r2,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {}:", self.index)?;
        writeln!(f, "Slope: {:.4}", self.slope)?;
        writeln!(f, "Intercept: {:.4}", self.intercept)?;
        write!(f, "R²: {:.4}", self.r2)
    }
}

/// Summarize every dataset, stopping at the first one that cannot be fitted
pub fn summarize(datasets: &[Dataset<f64>]) -> Result<Vec<Summary>> {
    datasets
        .iter()
        .enumerate()
        .map(|(idx, dataset)| Summary::of(idx + 1, dataset))
        .collect()
}

/// Render the full report
pub fn render(datasets: &[Dataset<f64>]) -> Result<String> {
    let report = summarize(datasets)?
        .iter()
        .map(|summary| format!("{}\n\n", summary))
        .collect();

    Ok(report)
}
