//! Newtype wrappers for semantic identifiers
//!
//! These types provide compile-time type safety to prevent mixing up
//! branch ids with other numeric identifiers, and give waybill numbers
//! a total, numeric-first ordering.

use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// An identifier for a branch (booking office / delivery station).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchId(i64);

impl BranchId {
    /// Creates a new BranchId from a raw id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this branch id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for BranchId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BranchId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for BranchId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Upstream serves ids both as JSON numbers and as numeric strings.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(id) => Ok(Self(id)),
            Raw::Str(s) => s
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| de::Error::custom(format!("invalid branch id '{}'", s))),
        }
    }
}

/// A lorry-receipt (waybill) serial number.
///
/// Stored as the raw string received from upstream together with its
/// parsed numeric value. Ordering is numeric: parseable numbers ascend
/// by value, values that do not parse as a number sort after all
/// parseable ones, and the raw string breaks remaining ties. The order
/// is total, so sorting a batch of waybills is deterministic for every
/// input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LrNumber {
    raw: String,
    value: Option<i64>,
}

impl LrNumber {
    /// Creates an LrNumber from its raw representation
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = raw.trim().parse::<i64>().ok();
        Self { raw, value }
    }

    /// Returns the raw string representation
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed numeric value, if the raw string was numeric
    pub fn value(&self) -> Option<i64> {
        self.value
    }
}

impl From<i64> for LrNumber {
    fn from(n: i64) -> Self {
        Self {
            raw: n.to_string(),
            value: Some(n),
        }
    }
}

impl From<&str> for LrNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LrNumber {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for LrNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Ord for LrNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for LrNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for LrNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for LrNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Str(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Int(n)) => Self::from(n),
            Some(Raw::Float(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Self::from(f as i64)
            }
            Some(Raw::Float(f)) => Self::new(f.to_string()),
            Some(Raw::Str(s)) => Self::new(s),
            None => Self::default(),
        })
    }
}
