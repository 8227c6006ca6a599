//! Lenient numeric coercion for untrusted wire fields.
//!
//! The backend is loose about numeric types: a price may arrive as a JSON
//! number, a string (`"5.50"`), or garbage, and a quantity may be a string
//! (`"2"`) or missing entirely. Display and total computation must never
//! fail on such a field, so every price/quantity read goes through the
//! coercion helpers here: invalid input coerces to zero instead of erroring.
//!
//! Two forms are provided:
//! - pure functions over [`serde_json::Value`] ([`to_safe_decimal`],
//!   [`to_safe_quantity`]) for ad-hoc coercion
//! - `deserialize_with` adapters ([`lenient_decimal`], [`lenient_quantity`])
//!   so wire structs coerce at the deserialization boundary and carry clean
//!   types everywhere else

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce an arbitrary JSON value to a non-negative decimal.
///
/// Accepts JSON numbers and numeric strings (leading/trailing whitespace
/// tolerated). Anything else - null, booleans, objects, unparseable or
/// negative values - coerces to zero.
#[must_use]
pub fn to_safe_decimal(value: &Value) -> Decimal {
    let parsed = match value {
        Value::Number(n) => n.to_string().parse::<Decimal>().ok(),
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };

    match parsed {
        Some(d) if d.is_sign_positive() || d.is_zero() => d,
        _ => Decimal::ZERO,
    }
}

/// Coerce an arbitrary JSON value to a quantity.
///
/// Accepts JSON integers and integer strings. Fractional numbers truncate
/// toward zero. Anything negative or unparseable coerces to zero.
#[must_use]
pub fn to_safe_quantity(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                u32::try_from(i).unwrap_or(0)
            } else {
                // Fractional or negative; truncate and bounds-check.
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .and_then(|f| {
                        let truncated = f.trunc();
                        (truncated <= f64::from(u32::MAX)).then_some(truncated as u32)
                    })
                    .unwrap_or(0)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// Serde adapter: deserialize any JSON value into a coerced [`Decimal`].
///
/// Pair with `#[serde(default)]` so a missing field also coerces to zero.
///
/// # Errors
///
/// Only fails if the underlying JSON is malformed; a wrong-typed field
/// coerces instead of erroring.
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_safe_decimal(&value))
}

/// Serde adapter: deserialize any JSON value into a coerced quantity.
///
/// # Errors
///
/// Only fails if the underlying JSON is malformed; a wrong-typed field
/// coerces instead of erroring.
pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_safe_quantity(&value))
}
