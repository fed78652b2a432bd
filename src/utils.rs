//! Utility functions for the wait estimator

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Read a JSON value as a number.
///
/// Numbers, numeric strings and booleans have a numeric reading; `null`,
/// blank or non-numeric strings, arrays and objects do not.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Non-finite and negative readings count as zero
pub fn sanitize_minutes(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Minutes from an untyped value, zero when missing or invalid
pub fn minutes_from_value(value: &Value) -> f64 {
    coerce_number(value).map(sanitize_minutes).unwrap_or(0.0)
}

/// Whole count from an untyped value, zero when missing or invalid.
///
/// Fractional counts truncate toward zero; huge counts saturate.
pub fn count_from_value(value: &Value) -> u32 {
    // `as` truncates and saturates for finite non-negative input
    minutes_from_value(value) as u32
}

/// Identifier text from an untyped value.
///
/// Numbers are rendered in decimal; blank strings count as absent.
pub fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
