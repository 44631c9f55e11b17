mod common;

use common::TestResult;
use common::fixtures::*;
use lading::{LrNumber, ReportBuilder, ReportKind};
use rust_decimal_macros::dec;
use std::collections::HashSet;

#[test]
fn test_pages_chunk_at_fifty() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let records: Vec<_> = (1..=130).map(|i| simple(i, 1, "Pune")).collect();
    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .build()?;

    assert_eq!(document.page_count(), 3);
    let row_counts: Vec<usize> = document
        .pages
        .iter()
        .map(|p| p.columns.left.len() + p.columns.right.len())
        .collect();
    assert_eq!(row_counts, vec![50, 50, 30]);
    Ok(())
}

#[test]
fn test_rows_print_lifo_within_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // Supplied out of order; the sheet sorts ascending globally, then
    // reverses each page before the column split.
    let mut records: Vec<_> = (1..=60).rev().map(|i| simple(i, 1, "Pune")).collect();
    records.swap(0, 30);
    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .build()?;

    let first = &document.pages[0].columns;
    assert_eq!(first.left.len(), 25);
    assert_eq!(waybills(&first.left)[0], "50");
    assert_eq!(waybills(&first.left)[24], "26");
    assert_eq!(waybills(&first.right)[0], "25");
    assert_eq!(waybills(&first.right)[24], "1");

    // Second page holds 51..=60, again reversed, all in the left column
    let second = &document.pages[1].columns;
    assert_eq!(waybills(&second.left), vec!["60", "59", "58", "57", "56", "55", "54", "53", "52", "51"]);
    assert!(second.right.is_empty());
    Ok(())
}

#[test]
fn test_grand_totals_on_last_page_only() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let records: Vec<_> = (1..=75)
        .map(|i| shipment(i, 1, "Pune", 1, dec!(2.5), 1, dec!(10.10)))
        .collect();
    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .build()?;

    assert!(document.pages[0].grand_totals.is_none());
    let totals = document.pages[1].grand_totals.as_ref().expect("final page totals");
    assert_eq!(totals.article, 75);
    assert_eq!(totals.weight, dec!(187.5));
    assert_eq!(totals.to_pay, dec!(757.50));
    assert_eq!(*totals, document.totals);
    Ok(())
}

#[test]
fn test_selection_splits_loaded_and_remaining() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let records: Vec<_> = (1..=10)
        .map(|i| shipment(i, 1, "Pune", 1, dec!(0.1), 1, dec!(0.1)))
        .collect();
    let selected: HashSet<LrNumber> = (1..=4).map(LrNumber::from).collect();

    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .with_selection(selected)
        .build()?;

    let selection = document.selection.as_ref().expect("selection totals");
    // Exact decimal accumulation: ten times 0.1 is exactly 1
    assert_eq!(selection.all.weight, dec!(1.0));
    assert_eq!(selection.selected.weight, dec!(0.4));
    assert_eq!(selection.remaining.weight, dec!(0.6));
    assert_eq!(selection.remaining.to_pay, dec!(0.6));
    assert_eq!(
        selection.selected.clone() + selection.remaining.clone(),
        selection.all
    );
    Ok(())
}

#[test]
fn test_empty_input_yields_empty_document() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let document = ReportBuilder::new(ReportKind::LoadingSheet).build()?;

    assert_eq!(document.page_count(), 0);
    assert!(document.totals.is_zero());
    Ok(())
}

#[test]
fn test_unparseable_waybills_sort_last() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut records = vec![simple(5, 1, "Pune"), simple(2, 1, "Pune")];
    let mut odd = simple(0, 1, "Pune");
    odd.lr_number = "B/17".into();
    records.insert(1, odd);

    let document = ReportBuilder::new(ReportKind::LoadingSheet)
        .with_records(records)
        .build()?;

    // Sorted 2, 5, B/17 then reversed for display
    let rows = waybills(&document.pages[0].columns.left);
    assert_eq!(rows, vec!["B/17", "5", "2"]);
    Ok(())
}
