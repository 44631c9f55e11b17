//! # lading
//!
//! Report engine for a transport-booking back office. Turns a flat list
//! of shipment (waybill) records into ordered, paginated, totaled
//! report pages ready for the print/export layer:
//!
//! - **group**: partition records by destination branch
//! - **order**: destinations case-insensitively by name, waybills
//!   numerically within each destination
//! - **paginate**: fixed-size print pages split into two columns
//! - **aggregate**: per-destination and grand totals in exact decimal
//!   arithmetic
//! - **overflow**: reflow destination summary rows onto continuation
//!   pages against a measured page height
//!
//! ## Design Principle
//!
//! The pipeline crates have **no platform dependencies**: no filesystem
//! access, no async runtime, no threading. Generation is synchronous
//! and deterministic; row-height measurement reaches the engine only
//! through the [`RowHeightEstimator`] capability.

// Re-export foundation crates
pub use lading_layout as layout;
pub use lading_report as report;
pub use lading_types as types;

pub mod document;
pub mod error;
pub mod pipeline;

// Re-export from internal modules
pub use document::{
    Letterhead, PageColumns, ReportDocument, ReportKind, ReportPage, ReportRow, ShipmentRow,
    SummaryLine,
};
pub use error::PipelineError;
pub use pipeline::{PageProfile, ReportBuilder, SummaryConfig, records_from_json};

// Re-export commonly used types from foundation crates
pub use lading_layout::{FixedRowEstimator, MeasuredRowHeights, RowHeightEstimator};
pub use lading_types::{
    BranchGroup, BranchId, BranchRecord, CompanyRecord, LineItem, LrNumber, PaymentType,
    RunningTotals, SelectionTotals, ShipmentRecord,
};
