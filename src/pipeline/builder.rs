// src/pipeline/builder.rs

use super::config::{PageProfile, SummaryConfig};
use super::{assemble_group_major, assemble_row_major, records_from_json};
use crate::document::{Letterhead, ReportDocument, ReportKind};
use crate::error::PipelineError;
use chrono::NaiveDate;
use lading_layout::{FixedRowEstimator, RowHeightEstimator};
use lading_report::aggregate_selection;
use lading_types::{BranchRecord, CompanyRecord, LrNumber, ShipmentRecord};
use std::collections::HashSet;

/// A builder for generating one report document.
///
/// Every setter is optional: with nothing but a kind and records, the
/// builder produces a report with the kind's stock page geometry, a
/// fixed-height summary estimator, and an empty letterhead.
pub struct ReportBuilder {
    kind: ReportKind,
    records: Vec<ShipmentRecord>,
    company: Option<CompanyRecord>,
    origin: Option<BranchRecord>,
    destination: Option<BranchRecord>,
    generated_on: Option<NaiveDate>,
    selection: Option<HashSet<LrNumber>>,
    estimator: Box<dyn RowHeightEstimator>,
    profile: Option<PageProfile>,
    summary: SummaryConfig,
}

impl ReportBuilder {
    pub fn new(kind: ReportKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            company: None,
            origin: None,
            destination: None,
            generated_on: None,
            selection: None,
            estimator: Box::new(FixedRowEstimator::default()),
            profile: None,
            summary: SummaryConfig::default(),
        }
    }

    /// Supplies the fetched shipment records.
    pub fn with_records(mut self, records: Vec<ShipmentRecord>) -> Self {
        self.records = records;
        self
    }

    /// Supplies records as a raw JSON payload from the booking API.
    pub fn with_json_records(mut self, payload: &str) -> Result<Self, PipelineError> {
        self.records = records_from_json(payload)?;
        Ok(self)
    }

    /// Company letterhead fields.
    pub fn with_company(mut self, company: CompanyRecord) -> Self {
        self.company = Some(company);
        self
    }

    /// Origin branch for the letterhead.
    pub fn with_origin_branch(mut self, branch: BranchRecord) -> Self {
        self.origin = Some(branch);
        self
    }

    /// Destination branch for the letterhead.
    pub fn with_destination_branch(mut self, branch: BranchRecord) -> Self {
        self.destination = Some(branch);
        self
    }

    /// Generation date printed on the letterhead.
    pub fn with_generated_on(mut self, date: NaiveDate) -> Self {
        self.generated_on = Some(date);
        self
    }

    /// Waybill numbers currently selected for loading. Adds the
    /// loaded/unloaded totals split to the document.
    pub fn with_selection(mut self, selected: HashSet<LrNumber>) -> Self {
        self.selection = Some(selected);
        self
    }

    /// Overrides the summary row-height estimator. The default is a
    /// fixed-height estimator, which keeps generation working in
    /// headless environments.
    pub fn with_estimator(mut self, estimator: Box<dyn RowHeightEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Overrides the page geometry. The default is the kind's stock
    /// profile (50/25 row-major, 24/12 group-major).
    pub fn with_page_profile(mut self, profile: PageProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Overrides the summary space budget, typically with a measured
    /// container height from a prior render pass.
    pub fn with_summary_config(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    /// Consumes the builder and generates the report.
    pub fn build(self) -> Result<ReportDocument, PipelineError> {
        let profile = self.profile.unwrap_or(if self.kind.is_grouped() {
            PageProfile::GROUP_MAJOR
        } else {
            PageProfile::ROW_MAJOR
        });

        if profile.rows_per_page == 0 {
            return Err(PipelineError::Config(
                "page must hold at least one record".to_string(),
            ));
        }
        if profile.column_rows == 0 || profile.column_rows > profile.rows_per_page {
            return Err(PipelineError::Config(format!(
                "column split of {} does not fit a page of {} records",
                profile.column_rows, profile.rows_per_page
            )));
        }

        let letterhead = Letterhead {
            company: self.company,
            origin: self.origin,
            destination: self.destination,
            generated_on: self.generated_on,
        };

        let selection_totals = self
            .selection
            .map(|selected| aggregate_selection(&self.records, &selected));

        let mut document = if self.kind.is_grouped() {
            assemble_group_major(
                self.kind,
                self.records,
                profile,
                self.summary,
                self.estimator.as_ref(),
                letterhead,
            )?
        } else {
            assemble_row_major(self.kind, self.records, profile, letterhead)
        };
        document.selection = selection_totals;

        Ok(document)
    }
}
