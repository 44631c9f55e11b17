// src/pipeline/mod.rs
//! Report assembly: records in, printable pages out.
//!
//! Both assembly paths run the same stage chain — group, order,
//! paginate, aggregate — and differ only in page shape. Everything is
//! synchronous and order-sensitive; a generation either completes or
//! its output is discarded.

pub mod builder;
pub mod config;

pub use builder::ReportBuilder;
pub use config::{PageProfile, SummaryConfig};

use crate::document::{
    Letterhead, PageColumns, ReportDocument, ReportKind, ReportPage, ReportRow, ShipmentRow,
    SummaryLine,
};
use crate::error::PipelineError;
use lading_layout::{RowHeightEstimator, measure_rows, plan_summary};
use lading_report::{
    aggregate, grand_totals, group_by_destination, group_totals, order_report, paginate,
    split_columns,
};
use lading_types::{RunningTotals, ShipmentRecord};
use std::collections::HashSet;

/// Parses a raw API payload into shipment records.
///
/// Individual fields degrade to zero/`None` when malformed; only an
/// unreadable payload (not valid JSON at all) is an error.
pub fn records_from_json(payload: &str) -> Result<Vec<ShipmentRecord>, PipelineError> {
    Ok(serde_json::from_str(payload)?)
}

/// Assembles a flat waybill table: sort ascending by waybill number,
/// chunk into pages, then reverse each page's rows before the column
/// split (pages fill LIFO in the printed layout).
pub(crate) fn assemble_row_major(
    kind: ReportKind,
    mut records: Vec<ShipmentRecord>,
    profile: PageProfile,
    letterhead: Letterhead,
) -> ReportDocument {
    records.sort_by(|a, b| a.lr_number.cmp(&b.lr_number));
    let totals = aggregate(&records);

    let record_pages = paginate(records, profile.rows_per_page);
    let page_count = record_pages.len();
    log::debug!("{} assembled as {} row-major pages", kind.label(), page_count);

    let pages = record_pages
        .into_iter()
        .enumerate()
        .map(|(index, mut page_records)| {
            page_records.reverse();
            let rows: Vec<ReportRow> = page_records
                .iter()
                .map(|record| ReportRow::Shipment(ShipmentRow::from_record(record)))
                .collect();
            let (left, right) = split_columns(&rows, profile.column_rows);

            ReportPage {
                number: index + 1,
                label: kind.label(),
                letterhead: letterhead.clone(),
                columns: PageColumns {
                    left: left.to_vec(),
                    right: right.to_vec(),
                },
                summary: Vec::new(),
                grand_totals: (index + 1 == page_count).then(|| totals.clone()),
            }
        })
        .collect();

    ReportDocument {
        kind,
        pages,
        totals,
        selection: None,
    }
}

/// Assembles a destination-grouped manifest: ordered groups flattened
/// into one record sequence, chunked into pages, with a "To: <branch>"
/// heading above each destination's first rendered record and summary
/// rows reflowed across the closing page and continuation pages.
pub(crate) fn assemble_group_major(
    kind: ReportKind,
    records: Vec<ShipmentRecord>,
    profile: PageProfile,
    summary_config: SummaryConfig,
    estimator: &dyn RowHeightEstimator,
    letterhead: Letterhead,
) -> Result<ReportDocument, PipelineError> {
    let mut groups = group_by_destination(records);
    order_report(&mut groups);

    let per_group: Vec<RunningTotals> = groups.iter().map(group_totals).collect();
    let totals = grand_totals(&groups);

    let heights = measure_rows(&groups, estimator);
    let plan = plan_summary(
        &heights,
        summary_config.container_height,
        summary_config.rows_per_continuation,
    )?;
    log::debug!(
        "{}: {} groups, {} summary rows on closing page, {} continuation pages (estimator: {})",
        kind.label(),
        groups.len(),
        plan.closing_page.len(),
        plan.continuation_count(),
        estimator.name()
    );

    // Flatten ordered groups back into one sequence, tagging each row
    // with its group so headings can be emitted at first occurrence.
    let flat: Vec<(usize, ShipmentRow)> = groups
        .iter()
        .enumerate()
        .flat_map(|(group_index, group)| {
            group
                .records
                .iter()
                .map(move |record| (group_index, ShipmentRow::from_record(record)))
        })
        .collect();

    let mut pages: Vec<ReportPage> = Vec::new();
    let mut seen_groups: HashSet<usize> = HashSet::new();

    for page_records in paginate(flat, profile.rows_per_page) {
        let mut columns = PageColumns::default();
        let mut placed = 0usize;

        for (group_index, row) in page_records {
            let column = if placed < profile.column_rows {
                &mut columns.left
            } else {
                &mut columns.right
            };
            // The seen-set lives for exactly one generation and is
            // populated here, at emission time, so a destination whose
            // first record lands on a later page still gets its heading
            // there.
            if seen_groups.insert(group_index) {
                column.push(ReportRow::Heading {
                    branch: groups[group_index].branch_name.clone(),
                });
            }
            column.push(ReportRow::Shipment(row));
            placed += 1;
        }

        pages.push(ReportPage {
            number: pages.len() + 1,
            label: kind.label(),
            letterhead: letterhead.clone(),
            columns,
            summary: Vec::new(),
            grand_totals: None,
        });
    }

    let summary_line = |group_index: usize| SummaryLine {
        branch: groups[group_index].branch_name.clone(),
        totals: per_group[group_index].clone(),
    };

    if let Some(closing) = pages.last_mut() {
        closing.summary = plan.closing_page.iter().copied().map(summary_line).collect();
    }
    for row_indexes in &plan.continuation_pages {
        pages.push(ReportPage {
            number: pages.len() + 1,
            label: kind.label(),
            letterhead: letterhead.clone(),
            columns: PageColumns::default(),
            summary: row_indexes.iter().copied().map(summary_line).collect(),
            grand_totals: None,
        });
    }

    // Grand totals go on whichever page ended up last.
    if let Some(last) = pages.last_mut() {
        last.grand_totals = Some(totals.clone());
    }

    Ok(ReportDocument {
        kind,
        pages,
        totals,
        selection: None,
    })
}
