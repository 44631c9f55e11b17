// src/document.rs
//! The printable report document model.
//!
//! A generated report is an ordered sequence of pages; each page
//! carries its letterhead, its report-type label, its left/right column
//! rows, and, on the final page only, the grand-totals row. The
//! external print/export layer rasterizes these pages; nothing here
//! knows about rendering.

use chrono::NaiveDate;
use lading_report::record_totals;
use lading_types::{
    BranchRecord, CompanyRecord, RunningTotals, SelectionTotals, ShipmentRecord,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// The four printable report kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    /// Flat waybill table for one loading memo.
    LoadingSheet,
    /// Destination-grouped manifest of shipments loaded on a vehicle.
    MotorReport,
    /// Flat waybill table of shipments in transit.
    TransitReport,
    /// Destination-grouped snapshot of undelivered shipments.
    Stock,
}

impl ReportKind {
    /// The title printed under the letterhead.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadingSheet => "LOADING SHEET",
            Self::MotorReport => "MOTOR REPORT",
            Self::TransitReport => "TRANSIT REPORT",
            Self::Stock => "STOCK",
        }
    }

    /// Group-major kinds print destination-grouped rows with summary
    /// lines; row-major kinds print a flat waybill table.
    pub fn is_grouped(&self) -> bool {
        matches!(self, Self::MotorReport | Self::Stock)
    }
}

/// Letterhead fields repeated at the top of every page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Letterhead {
    pub company: Option<CompanyRecord>,
    pub origin: Option<BranchRecord>,
    pub destination: Option<BranchRecord>,
    pub generated_on: Option<NaiveDate>,
}

/// One shipment flattened into printable cells.
#[derive(Debug, Clone, Serialize)]
pub struct ShipmentRow {
    pub lr_number: String,
    pub to_branch: String,
    pub private_mark: Option<String>,
    pub booking_date: Option<NaiveDate>,
    pub article: u64,
    pub weight: Decimal,
    pub charge_weight: Decimal,
    pub payment: Option<&'static str>,
    pub grand_total: Decimal,
}

impl ShipmentRow {
    pub fn from_record(record: &ShipmentRecord) -> Self {
        let totals = record_totals(record);
        Self {
            lr_number: record.lr_number.as_str().to_string(),
            to_branch: record.to_branch.clone(),
            private_mark: record.private_mark.clone(),
            booking_date: record.booking_date,
            article: totals.article,
            weight: totals.weight,
            charge_weight: totals.charge_weight,
            payment: record.payment_type.map(|pt| pt.label()),
            grand_total: record.grand_total,
        }
    }
}

/// A row in a printed column.
#[derive(Debug, Clone, Serialize)]
pub enum ReportRow {
    /// "To: <branch>" heading, printed once above a destination's first
    /// rendered record anywhere in the report.
    Heading { branch: String },
    Shipment(ShipmentRow),
}

/// The two-column split of one page's rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageColumns {
    pub left: Vec<ReportRow>,
    pub right: Vec<ReportRow>,
}

impl PageColumns {
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// One destination's totals line in the summary section.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryLine {
    pub branch: String,
    pub totals: RunningTotals,
}

/// One physical print page.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    /// 1-indexed, printed as "Page No. N".
    pub number: usize,
    pub label: &'static str,
    pub letterhead: Letterhead,
    pub columns: PageColumns,
    /// Destination summary lines placed on this page.
    pub summary: Vec<SummaryLine>,
    /// Present on the final page only.
    pub grand_totals: Option<RunningTotals>,
}

/// A complete generated report, ready for the print/export layer.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub kind: ReportKind,
    pub pages: Vec<ReportPage>,
    /// Report-wide totals, identical to the final page's totals row.
    pub totals: RunningTotals,
    /// Loaded/unloaded split, when a selection was supplied.
    pub selection: Option<SelectionTotals>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
