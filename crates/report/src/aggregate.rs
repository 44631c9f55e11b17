// crates/report/src/aggregate.rs
//! Exact decimal accumulation of report totals.
//!
//! Totals are computed at two levels, per destination group and
//! report-wide, and the two must agree exactly: summing group totals
//! gives the same `RunningTotals` as aggregating the flat record list.
//! That holds because every component is either integer or
//! `Decimal` and component-wise addition is associative; no float ever
//! enters the accumulation.

use lading_types::{
    BranchGroup, LrNumber, PaymentType, RunningTotals, SelectionTotals, ShipmentRecord,
};
use std::collections::HashSet;

/// Totals for a single record: the sum over its line items, with the
/// grand total bucketed by payment type.
///
/// A record with no line items contributes zero articles and weight. A
/// record with an unmatched payment type contributes to no payment
/// bucket but still counts toward articles and weights.
pub fn record_totals(record: &ShipmentRecord) -> RunningTotals {
    let mut totals = RunningTotals::zero();

    for item in &record.details {
        totals.article += item.article;
        totals.weight += item.weight;
        totals.charge_weight += item.charge_weight;
    }

    match record.payment_type {
        Some(PaymentType::ToPay) => totals.to_pay += record.grand_total,
        Some(PaymentType::Paid) => totals.paid += record.grand_total,
        Some(PaymentType::ToBeBilled) => totals.tbb += record.grand_total,
        None => {}
    }

    totals
}

/// Accumulates totals over any sequence of records.
pub fn aggregate<'a, I>(records: I) -> RunningTotals
where
    I: IntoIterator<Item = &'a ShipmentRecord>,
{
    records
        .into_iter()
        .fold(RunningTotals::zero(), |acc, record| {
            acc + record_totals(record)
        })
}

/// Totals for one destination group's summary row.
pub fn group_totals(group: &BranchGroup) -> RunningTotals {
    aggregate(&group.records)
}

/// Report-wide totals as the sum of group totals.
pub fn grand_totals(groups: &[BranchGroup]) -> RunningTotals {
    groups.iter().map(group_totals).sum()
}

/// Totals for the loading-memo screen: the whole fetched set, the
/// subset selected for loading (keyed by waybill number), and the exact
/// remainder.
pub fn aggregate_selection(
    records: &[ShipmentRecord],
    selected: &HashSet<LrNumber>,
) -> SelectionTotals {
    let all = aggregate(records);
    let loaded = aggregate(
        records
            .iter()
            .filter(|record| selected.contains(&record.lr_number)),
    );
    SelectionTotals::new(all, loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group_by_destination;
    use lading_types::{BranchId, LineItem};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(
        lr: i64,
        to: i64,
        name: &str,
        article: u64,
        weight: Decimal,
        payment: Option<i64>,
        total: Decimal,
    ) -> ShipmentRecord {
        ShipmentRecord {
            lr_number: lr.into(),
            to_branch_id: Some(BranchId::new(to)),
            to_branch: name.to_string(),
            grand_total: total,
            payment_type: payment.and_then(PaymentType::from_code),
            details: vec![LineItem {
                article,
                weight,
                charge_weight: weight,
            }],
            ..Default::default()
        }
    }

    fn sample_records() -> Vec<ShipmentRecord> {
        vec![
            record(5, 1, "B", 2, dec!(10), Some(1), dec!(100)),
            record(3, 1, "B", 1, dec!(5), Some(2), dec!(50)),
            record(8, 2, "A", 3, dec!(15), Some(1), dec!(200)),
        ]
    }

    #[test]
    fn test_worked_example() {
        let totals = aggregate(&sample_records());

        assert_eq!(totals.article, 6);
        assert_eq!(totals.weight, dec!(30));
        assert_eq!(totals.to_pay, dec!(300));
        assert_eq!(totals.paid, dec!(50));
        assert_eq!(totals.tbb, Decimal::ZERO);
        assert_eq!(totals.total(), dec!(350));
    }

    #[test]
    fn test_no_line_items_contributes_zero() {
        let mut r = record(1, 1, "B", 0, dec!(0), Some(1), dec!(75));
        r.details.clear();

        let totals = record_totals(&r);
        assert_eq!(totals.article, 0);
        assert_eq!(totals.weight, Decimal::ZERO);
        assert_eq!(totals.to_pay, dec!(75));
    }

    #[test]
    fn test_unmatched_payment_still_counts_weight() {
        let r = record(1, 1, "B", 4, dec!(20.5), None, dec!(99));

        let totals = record_totals(&r);
        assert_eq!(totals.article, 4);
        assert_eq!(totals.weight, dec!(20.5));
        assert_eq!(totals.total(), Decimal::ZERO);
    }

    #[test]
    fn test_bucket_exclusivity() {
        // Each record's grand total lands in exactly one bucket, so the
        // bucketed sum plus the unmatched remainder equals the raw sum.
        let mut records = sample_records();
        records.push(record(9, 3, "C", 1, dec!(1), None, dec!(40)));

        let totals = aggregate(&records);
        let raw_sum: Decimal = records.iter().map(|r| r.grand_total).sum();
        let unmatched: Decimal = records
            .iter()
            .filter(|r| r.payment_type.is_none())
            .map(|r| r.grand_total)
            .sum();

        assert_eq!(totals.total() + unmatched, raw_sum);
    }

    #[test]
    fn test_additivity_over_partitions() {
        let records: Vec<_> = (0..53)
            .map(|i| {
                record(
                    i,
                    i % 5,
                    "X",
                    (i % 4) as u64,
                    Decimal::new(i * 125 + 7, 2),
                    Some(i % 4),
                    Decimal::new(i * 3301, 2),
                )
            })
            .collect();

        for split in [0, 1, 26, 52, 53] {
            let (a, b) = records.split_at(split);
            assert_eq!(aggregate(a) + aggregate(b), aggregate(&records));
        }
    }

    #[test]
    fn test_grand_totals_agree_both_ways() {
        let records: Vec<_> = (0..40)
            .map(|i| {
                record(
                    i,
                    i % 6,
                    "X",
                    1,
                    Decimal::new(i * 100 + 33, 2),
                    Some(1 + i % 3),
                    Decimal::new(i * 999, 2),
                )
            })
            .collect();

        let flat = aggregate(&records);
        let groups = group_by_destination(records);

        assert_eq!(grand_totals(&groups), flat);
    }

    #[test]
    fn test_selection_partial() {
        let records = sample_records();
        let selected: HashSet<LrNumber> = [LrNumber::from(5)].into_iter().collect();

        let totals = aggregate_selection(&records, &selected);
        assert_eq!(totals.selected.to_pay, dec!(100));
        assert_eq!(totals.remaining.to_pay, dec!(200));
        assert_eq!(totals.remaining.paid, dec!(50));
        assert_eq!(
            totals.selected.clone() + totals.remaining.clone(),
            totals.all
        );
    }

    #[test]
    fn test_selection_empty_and_full() {
        let records = sample_records();

        let none = aggregate_selection(&records, &HashSet::new());
        assert!(none.selected.is_zero());
        assert_eq!(none.remaining, none.all);

        let every: HashSet<LrNumber> =
            records.iter().map(|r| r.lr_number.clone()).collect();
        let full = aggregate_selection(&records, &every);
        assert_eq!(full.selected, full.all);
        assert!(full.remaining.is_zero());
    }
}
