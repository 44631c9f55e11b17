//! Generates a loading sheet with a loaded/unloaded split and dumps the
//! first page as JSON, the way the print layer consumes it.
//!
//! Run with: `cargo run --example loading_sheet`

use lading::{
    BranchId, LineItem, LrNumber, ReportBuilder, ReportKind, ShipmentRecord,
};
use rust_decimal::Decimal;
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let records: Vec<ShipmentRecord> = (1..=60)
        .map(|i| ShipmentRecord {
            lr_number: i.into(),
            to_branch_id: Some(BranchId::new(1)),
            to_branch: "Pune".to_string(),
            grand_total: Decimal::new(1050 + i * 25, 2),
            payment_type: lading::PaymentType::from_code(1 + i % 3),
            details: vec![LineItem {
                article: 1 + (i % 4) as u64,
                weight: Decimal::new(i * 175, 1),
                charge_weight: Decimal::new(i * 180, 1),
            }],
            ..Default::default()
        })
        .collect();

    let loaded: HashSet<LrNumber> = (1..=25).map(LrNumber::from).collect();

    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .with_selection(loaded)
        .build()?;

    println!("{} pages", document.page_count());
    if let Some(selection) = &document.selection {
        println!(
            "loaded: {} articles / {} | remaining: {} articles / {}",
            selection.selected.article,
            selection.selected.total(),
            selection.remaining.article,
            selection.remaining.total()
        );
    }

    let first = serde_json::to_string_pretty(&document.pages[0])?;
    println!("{first}");

    Ok(())
}
