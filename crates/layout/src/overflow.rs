// crates/layout/src/overflow.rs
//! Greedy placement of summary rows against a measured page height.

use crate::LayoutError;

pub struct FitAnalysis {
    pub fits: bool,
    pub remaining_height: f32,
}

/// Centralized check whether a row fits in the remaining space.
///
/// * `cursor_y`: the current Y position relative to the top of the
///   summary container.
/// * `row_height`: the required height for the row.
/// * `container_height`: the total height available for summary rows.
pub fn check_row_fit(cursor_y: f32, row_height: f32, container_height: f32) -> FitAnalysis {
    let available = (container_height - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    FitAnalysis {
        fits: row_height <= available + EPSILON,
        remaining_height: available,
    }
}

/// Placement of summary rows across the closing page and continuation
/// pages. Rows are identified by their index into the measured
/// sequence, so callers can map them back to groups without cloning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryPlan {
    /// Rows that fit under the detail table on the closing page.
    pub closing_page: Vec<usize>,
    /// Rows reflowed onto continuation pages, in order.
    pub continuation_pages: Vec<Vec<usize>>,
}

impl SummaryPlan {
    /// Number of continuation pages the plan needs.
    pub fn continuation_count(&self) -> usize {
        self.continuation_pages.len()
    }

    /// Whether grand totals belong on the closing page (no overflow)
    /// or on the final continuation page.
    pub fn totals_on_closing_page(&self) -> bool {
        self.continuation_pages.is_empty()
    }
}

/// Partitions summary rows into "fits on the closing page" and
/// overflow.
///
/// Rows fill the container greedily top-down and placement stops at the
/// first row that would overflow; everything from that row on reflows
/// into continuation pages of `rows_per_page` rows each. Ordering is
/// preserved throughout. An oversized first row is not an error: it
/// opens the first continuation page instead.
pub fn plan_summary(
    heights: &[f32],
    container_height: f32,
    rows_per_page: usize,
) -> Result<SummaryPlan, LayoutError> {
    if rows_per_page == 0 {
        return Err(LayoutError::ZeroContinuationRows);
    }

    let mut cursor_y = 0.0f32;
    let mut placed = 0;
    for (index, &height) in heights.iter().enumerate() {
        let analysis = check_row_fit(cursor_y, height, container_height);
        if !analysis.fits {
            log::debug!(
                "summary row {} ({:.2}) overflows remaining {:.2}, deferring {} rows",
                index,
                height,
                analysis.remaining_height,
                heights.len() - index
            );
            break;
        }
        cursor_y += height;
        placed += 1;
    }

    let continuation_pages = (placed..heights.len())
        .collect::<Vec<usize>>()
        .chunks(rows_per_page)
        .map(|chunk| chunk.to_vec())
        .collect();

    Ok(SummaryPlan {
        closing_page: (0..placed).collect(),
        continuation_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_fit() {
        let plan = plan_summary(&[10.0, 10.0, 10.0], 100.0, 24).unwrap();
        assert_eq!(plan.closing_page, vec![0, 1, 2]);
        assert!(plan.continuation_pages.is_empty());
        assert!(plan.totals_on_closing_page());
    }

    #[test]
    fn test_stops_at_first_overflowing_row() {
        // Third row would exceed 25.0; it and everything after defer,
        // even rows that would individually still fit.
        let plan = plan_summary(&[10.0, 10.0, 10.0, 2.0], 25.0, 24).unwrap();
        assert_eq!(plan.closing_page, vec![0, 1]);
        assert_eq!(plan.continuation_pages, vec![vec![2, 3]]);
        assert!(!plan.totals_on_closing_page());
    }

    #[test]
    fn test_overflow_chunks_into_pages() {
        let heights = vec![10.0; 60];
        let plan = plan_summary(&heights, 100.0, 24).unwrap();
        assert_eq!(plan.closing_page.len(), 10);
        let sizes: Vec<usize> = plan.continuation_pages.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![24, 24, 2]);
        assert_eq!(plan.continuation_count(), 3);
    }

    #[test]
    fn test_oversized_first_row_defers() {
        let plan = plan_summary(&[500.0, 10.0], 100.0, 24).unwrap();
        assert!(plan.closing_page.is_empty());
        assert_eq!(plan.continuation_pages, vec![vec![0, 1]]);
    }

    #[test]
    fn test_exact_fit_with_epsilon() {
        // 4 rows of 25.0 sum to exactly the container height
        let plan = plan_summary(&[25.0; 4], 100.0, 24).unwrap();
        assert_eq!(plan.closing_page.len(), 4);
        assert!(plan.continuation_pages.is_empty());
    }

    #[test]
    fn test_empty_summary() {
        let plan = plan_summary(&[], 100.0, 24).unwrap();
        assert!(plan.closing_page.is_empty());
        assert!(plan.totals_on_closing_page());
    }

    #[test]
    fn test_zero_rows_per_page_is_an_error() {
        assert!(matches!(
            plan_summary(&[10.0], 100.0, 0),
            Err(LayoutError::ZeroContinuationRows)
        ));
    }
}
