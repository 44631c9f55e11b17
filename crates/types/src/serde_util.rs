//! Lenient field deserializers for upstream API payloads.
//!
//! The booking API serves numeric fields inconsistently: sometimes as
//! JSON numbers, sometimes as strings, sometimes as `null`. Report
//! generation must never fail on malformed input, so every helper here
//! resolves garbage to zero (or `None`) instead of erroring.

use crate::ids::BranchId;
use crate::record::PaymentType;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny};

/// Deserializes a decimal that may arrive as a number, a numeric
/// string, `null`, or garbage. Anything unparseable becomes zero.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Dec(Decimal),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Dec(value)) => value,
        _ => Decimal::ZERO,
    })
}

/// Deserializes a piece count that may arrive as a number, a numeric
/// string, `null`, or garbage. Anything unparseable becomes zero.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(u64),
        Float(f64),
        Str(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) if f.is_finite() && f >= 0.0 => f.trunc() as u64,
        Some(Raw::Str(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Deserializes a routing branch id that may arrive as a number, a
/// numeric string, `null`, or garbage. Anything unparseable becomes
/// `None`, so the record groups under the unknown-destination key
/// instead of failing the whole payload.
pub fn branch_id<'de, D>(deserializer: D) -> Result<Option<BranchId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Id(BranchId),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Id(id)) => Some(id),
        _ => None,
    })
}

/// Deserializes a payment-type wire code (1, 2 or 3, numeric or
/// string). Unknown or missing codes become `None`.
pub fn payment_type<'de, D>(deserializer: D) -> Result<Option<PaymentType>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(code)) => PaymentType::from_code(code),
        Some(Raw::Str(s)) => s.trim().parse::<i64>().ok().and_then(PaymentType::from_code),
        _ => None,
    })
}
