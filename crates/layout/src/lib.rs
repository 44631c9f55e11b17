//! # lading-layout
//!
//! Print-layout decisions that depend on rendered geometry: how many
//! destination summary rows fit under the detail table of a report's
//! closing page, and how the rest reflow onto continuation pages.
//!
//! Row heights come from a [`RowHeightEstimator`] capability rather
//! than a concrete rendering API. A browser-backed caller measures real
//! rows and hands the heights in as a value; headless callers use the
//! fixed-height fallback. Measurements are plain values constructed
//! once per generation, so nothing accumulates across report runs.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Continuation pages must hold at least one summary row.")]
    ZeroContinuationRows,
}

pub mod estimator;
pub mod overflow;

pub use estimator::{FixedRowEstimator, MeasuredRowHeights, RowHeightEstimator, measure_rows};
pub use overflow::{FitAnalysis, SummaryPlan, check_row_fit, plan_summary};
