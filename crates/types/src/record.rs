// crates/types/src/record.rs
//! Shipment (booking) records as served by the booking API.

use crate::ids::{BranchId, LrNumber};
use crate::serde_util;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// One line of a consignment: a number of articles with their actual
/// and billable weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default, deserialize_with = "serde_util::count")]
    pub article: u64,
    #[serde(default, deserialize_with = "serde_util::decimal")]
    pub weight: Decimal,
    #[serde(default, deserialize_with = "serde_util::decimal")]
    pub charge_weight: Decimal,
}

/// The three mutually exclusive freight payment categories.
///
/// Wire codes: 1 = to-pay, 2 = paid, 3 = to-be-billed. Records carry
/// `Option<PaymentType>`; any other code deserializes to `None` and
/// contributes to no payment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentType {
    ToPay,
    Paid,
    ToBeBilled,
}

impl PaymentType {
    /// Maps a wire code to a payment type, `None` for unknown codes
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::ToPay),
            2 => Some(Self::Paid),
            3 => Some(Self::ToBeBilled),
            _ => None,
        }
    }

    /// The wire code for this payment type
    pub fn code(&self) -> u8 {
        match self {
            Self::ToPay => 1,
            Self::Paid => 2,
            Self::ToBeBilled => 3,
        }
    }

    /// The label printed on report rows
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToPay => "TO PAY",
            Self::Paid => "PAID",
            Self::ToBeBilled => "TBB",
        }
    }
}

impl Serialize for PaymentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// One consignment (waybill) with its line items.
///
/// Every field is optional or defaulted on the wire: report generation
/// never rejects a record, it degrades the malformed parts to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    #[serde(default)]
    pub lr_number: LrNumber,
    #[serde(default, deserialize_with = "serde_util::branch_id")]
    pub from_branch_id: Option<BranchId>,
    #[serde(default, deserialize_with = "serde_util::branch_id")]
    pub to_branch_id: Option<BranchId>,
    #[serde(default)]
    pub from_branch: String,
    #[serde(default)]
    pub to_branch: String,
    #[serde(default, deserialize_with = "serde_util::decimal")]
    pub grand_total: Decimal,
    #[serde(default, deserialize_with = "serde_util::payment_type")]
    pub payment_type: Option<PaymentType>,
    #[serde(default, rename = "bookingDetails")]
    pub details: Vec<LineItem>,
    #[serde(default)]
    pub private_mark: Option<String>,
    #[serde(default)]
    pub booking_date: Option<NaiveDate>,
}

/// Shipments bound for one destination branch, the unit report
/// summaries reduce over.
#[derive(Debug, Clone, Serialize)]
pub struct BranchGroup {
    /// Grouping key. `None` collects every record that arrived without
    /// a destination id.
    pub branch_id: Option<BranchId>,
    /// Display name, taken from the first record seen for this key.
    pub branch_name: String,
    pub records: Vec<ShipmentRecord>,
}

impl BranchGroup {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
