//! RowHeightEstimator trait for abstracting row measurement.
//!
//! Summary pagination needs the rendered height of each destination
//! summary row, but the pipeline must not depend on a rendering API.
//! This trait lets the visual layer supply real measurements while
//! headless targets fall back to a constant height.

use lading_types::BranchGroup;
use std::fmt::Debug;

/// A source of rendered row heights for summary pagination.
///
/// # Implementations
///
/// - [`FixedRowEstimator`]: constant height per row (always available,
///   the headless fallback)
/// - [`MeasuredRowHeights`]: per-row heights captured by a prior render
///   pass
pub trait RowHeightEstimator: Debug {
    /// Height of the summary row for `group`, the `index`-th row of the
    /// summary section.
    fn row_height(&self, index: usize, group: &BranchGroup) -> f32;

    /// Returns a human-readable name for this estimator (for logging).
    fn name(&self) -> &'static str;
}

/// Estimates every row at one fixed height.
///
/// Used when no rendering pass is available. Never fails, so report
/// generation works in any environment.
#[derive(Debug, Clone, Copy)]
pub struct FixedRowEstimator {
    pub row_height: f32,
}

impl FixedRowEstimator {
    pub fn new(row_height: f32) -> Self {
        Self { row_height }
    }
}

impl Default for FixedRowEstimator {
    fn default() -> Self {
        // Matches the rendered height of one summary table row at the
        // print stylesheet's default font size.
        Self { row_height: 22.0 }
    }
}

impl RowHeightEstimator for FixedRowEstimator {
    fn row_height(&self, _index: usize, _group: &BranchGroup) -> f32 {
        self.row_height
    }

    fn name(&self) -> &'static str {
        "FixedRowEstimator"
    }
}

/// Row heights captured by a previous render pass.
///
/// The caller renders the summary once, measures each row, and hands
/// the heights in. A fresh value is built per generation; stale
/// measurements from an earlier run can never leak in because nothing
/// here is global or mutable.
#[derive(Debug, Clone)]
pub struct MeasuredRowHeights {
    heights: Vec<f32>,
    fallback: f32,
}

impl MeasuredRowHeights {
    /// Wraps measured heights; rows beyond the measured range use
    /// `fallback`.
    pub fn new(heights: Vec<f32>, fallback: f32) -> Self {
        Self { heights, fallback }
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}

impl RowHeightEstimator for MeasuredRowHeights {
    fn row_height(&self, index: usize, _group: &BranchGroup) -> f32 {
        match self.heights.get(index) {
            Some(&height) => height,
            None => {
                log::debug!(
                    "no measurement for summary row {}, using fallback {:.2}",
                    index,
                    self.fallback
                );
                self.fallback
            }
        }
    }

    fn name(&self) -> &'static str {
        "MeasuredRowHeights"
    }
}

/// The explicit measure step: one height per group, in group order.
pub fn measure_rows(groups: &[BranchGroup], estimator: &dyn RowHeightEstimator) -> Vec<f32> {
    groups
        .iter()
        .enumerate()
        .map(|(index, group)| estimator.row_height(index, group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> BranchGroup {
        BranchGroup {
            branch_id: None,
            branch_name: name.to_string(),
            records: Vec::new(),
        }
    }

    #[test]
    fn test_fixed_estimator_is_constant() {
        let estimator = FixedRowEstimator::new(18.0);
        assert_eq!(estimator.row_height(0, &group("A")), 18.0);
        assert_eq!(estimator.row_height(99, &group("B")), 18.0);
    }

    #[test]
    fn test_measured_heights_with_fallback() {
        let estimator = MeasuredRowHeights::new(vec![20.0, 35.5], 22.0);
        assert_eq!(estimator.row_height(0, &group("A")), 20.0);
        assert_eq!(estimator.row_height(1, &group("B")), 35.5);
        assert_eq!(estimator.row_height(2, &group("C")), 22.0);
    }

    #[test]
    fn test_measure_rows_in_group_order() {
        let groups = vec![group("A"), group("B"), group("C")];
        let heights = measure_rows(&groups, &MeasuredRowHeights::new(vec![10.0, 11.0], 9.0));
        assert_eq!(heights, vec![10.0, 11.0, 9.0]);
    }
}
