// crates/types/src/totals.rs
//! Running totals over shipment records.
//!
//! All monetary and weight accumulation uses `rust_decimal::Decimal`.
//! Native floats drift over thousands of line items; report totals must
//! match the branch ledgers to the paisa, so every component here is
//! exact and component-wise addition is associative.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Totals for a set of shipment records: piece count, weights, and the
/// three payment-type buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotals {
    pub article: u64,
    pub weight: Decimal,
    pub charge_weight: Decimal,
    pub to_pay: Decimal,
    pub paid: Decimal,
    pub tbb: Decimal,
}

impl RunningTotals {
    pub fn zero() -> Self {
        Self::default()
    }

    /// The grand collectible amount: to-pay + paid + to-be-billed.
    pub fn total(&self) -> Decimal {
        self.to_pay + self.paid + self.tbb
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Add for RunningTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for RunningTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.article += rhs.article;
        self.weight += rhs.weight;
        self.charge_weight += rhs.charge_weight;
        self.to_pay += rhs.to_pay;
        self.paid += rhs.paid;
        self.tbb += rhs.tbb;
    }
}

impl Sub for RunningTotals {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            article: self.article.saturating_sub(rhs.article),
            weight: self.weight - rhs.weight,
            charge_weight: self.charge_weight - rhs.charge_weight,
            to_pay: self.to_pay - rhs.to_pay,
            paid: self.paid - rhs.paid,
            tbb: self.tbb - rhs.tbb,
        }
    }
}

impl Sum for RunningTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// Totals for the loading-memo screen, which shows the full fetched set
/// against the subset currently selected for loading.
///
/// `remaining` is derived by component-wise decimal subtraction, never
/// recomputed from the record list, so the three parts stay consistent
/// by construction: `selected + remaining == all` exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionTotals {
    pub all: RunningTotals,
    pub selected: RunningTotals,
    pub remaining: RunningTotals,
}

impl SelectionTotals {
    pub fn new(all: RunningTotals, selected: RunningTotals) -> Self {
        let remaining = all.clone() - selected.clone();
        Self {
            all,
            selected,
            remaining,
        }
    }
}
