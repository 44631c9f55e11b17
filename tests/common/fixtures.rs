//! Record builders shared by the behavior tests.

use lading::{BranchId, LineItem, PaymentType, ReportRow, ShipmentRecord};
use rust_decimal::Decimal;

/// One shipment with a single line item. `payment` is the wire code
/// (1/2/3); anything else leaves the payment type unmatched.
pub fn shipment(
    lr: i64,
    to: i64,
    branch: &str,
    article: u64,
    weight: Decimal,
    payment: i64,
    total: Decimal,
) -> ShipmentRecord {
    ShipmentRecord {
        lr_number: lr.into(),
        to_branch_id: Some(BranchId::new(to)),
        to_branch: branch.to_string(),
        grand_total: total,
        payment_type: PaymentType::from_code(payment),
        details: vec![LineItem {
            article,
            weight,
            charge_weight: weight,
        }],
        ..Default::default()
    }
}

/// A minimal shipment where only identity and destination matter.
pub fn simple(lr: i64, to: i64, branch: &str) -> ShipmentRecord {
    shipment(lr, to, branch, 1, Decimal::ONE, 1, Decimal::TEN)
}

/// The waybill numbers of a column's shipment rows, skipping headings.
pub fn waybills(rows: &[ReportRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row {
            ReportRow::Shipment(s) => Some(s.lr_number.clone()),
            ReportRow::Heading { .. } => None,
        })
        .collect()
}

/// The branch names of a column's heading rows.
pub fn headings(rows: &[ReportRow]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row {
            ReportRow::Heading { branch } => Some(branch.clone()),
            ReportRow::Shipment(_) => None,
        })
        .collect()
}
