//! Lenient scalar coercion. A value that does not fit its target type becomes `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Number, Value};

pub fn as_str(value: Option<&Value>) -> Option<String> {
	match value? {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		other => Some(other.to_string()),
	}
}

pub fn as_int(value: Option<&Value>) -> Option<i64> {
	match value? {
		Value::Number(number) => number_to_int(number),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
}

pub fn as_decimal(value: Option<&Value>) -> Option<Decimal> {
	match value? {
		Value::Number(number) => parse_decimal(&number.to_string()),
		Value::String(text) => parse_decimal(text.trim()),
		_ => None,
	}
}

/// Parses plain or scientific decimal text without going through binary floating point.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
	if text.is_empty() {
		return None;
	}

	Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)).ok()
}

fn number_to_int(number: &Number) -> Option<i64> {
	if let Some(value) = number.as_i64() {
		return Some(value);
	}

	let value = number.as_f64()?;

	if !value.is_finite() {
		return None;
	}

	let truncated = value.trunc();

	if truncated < i64::MIN as f64 || truncated > i64::MAX as f64 {
		return None;
	}

	Some(truncated as i64)
}
