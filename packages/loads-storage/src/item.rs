use std::{cmp::Ordering, collections::BTreeMap};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::KEY_ATTRIBUTE;

/// A schemaless stored document.
pub type Item = BTreeMap<String, AttrValue>;

/// A single stored attribute.
///
/// Persisted externally tagged (`{"S": "..."}`, `{"N": "1200.50"}`, `"NULL"`) so numbers keep their
/// exact decimal text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
	#[serde(rename = "NULL")]
	Null,
	S(String),
	N(Decimal),
}
impl AttrValue {
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::S(value) => Some(value.as_str()),
			_ => None,
		}
	}

	/// Orders two values of the same kind. Mixed kinds and nulls are incomparable.
	pub fn compare(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Self::S(left), Self::S(right)) => Some(left.cmp(right)),
			(Self::N(left), Self::N(right)) => Some(left.cmp(right)),
			_ => None,
		}
	}

	/// Renders the value for API responses. Numbers become JSON numbers.
	pub fn to_json(&self) -> Value {
		match self {
			Self::Null => Value::Null,
			Self::S(value) => Value::String(value.clone()),
			Self::N(value) => decimal_to_json(value),
		}
	}
}

pub fn item_key(item: &Item) -> Option<&str> {
	item.get(KEY_ATTRIBUTE).and_then(AttrValue::as_str)
}

pub fn item_to_json(item: &Item) -> Value {
	let object: Map<String, Value> =
		item.iter().map(|(name, value)| (name.clone(), value.to_json())).collect();

	Value::Object(object)
}

fn decimal_to_json(value: &Decimal) -> Value {
	if value.fract().is_zero()
		&& let Some(integer) = value.to_i64()
	{
		return Value::Number(Number::from(integer));
	}

	value.to_f64().and_then(Number::from_f64).map_or(Value::Null, Value::Number)
}
