use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::coerce::{as_decimal, as_int, as_str};

pub const LOAD_ID: &str = "load_id";
pub const ACCEPTED_LOADRATE: &str = "accepted_loadrate";

/// Designated coercion target of a load record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
	Text,
	Integer,
	Decimal,
}

/// Every persisted field in storage order.
pub const FIELDS: [(&str, FieldKind); 19] = [
	("mcnumber", FieldKind::Text),
	(LOAD_ID, FieldKind::Text),
	("origin", FieldKind::Text),
	("destination", FieldKind::Text),
	("pickup_datetime", FieldKind::Text),
	("delivery_datetime", FieldKind::Text),
	("equipment_type", FieldKind::Text),
	("weight", FieldKind::Decimal),
	("commodity_type", FieldKind::Text),
	("num_of_pieces", FieldKind::Integer),
	("miles", FieldKind::Integer),
	("dimensions", FieldKind::Text),
	("loadboard_rate", FieldKind::Decimal),
	(ACCEPTED_LOADRATE, FieldKind::Decimal),
	("call_outcome", FieldKind::Text),
	("carrier_sentiment", FieldKind::Text),
	("init_sentiment", FieldKind::Text),
	("final_sentiment", FieldKind::Text),
	("call_duration", FieldKind::Integer),
];

/// A coerced field value. `Null` marks a field that was absent or failed coercion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
	Null,
	Text(String),
	Integer(i64),
	Decimal(Decimal),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRecord {
	fields: Vec<(&'static str, FieldValue)>,
}
impl LoadRecord {
	/// Coerces every known field of `raw`; unknown keys are dropped.
	pub fn from_fields(raw: &Map<String, Value>) -> Self {
		let fields = FIELDS
			.iter()
			.map(|(name, kind)| (*name, coerce_field(*kind, raw.get(*name))))
			.collect();

		Self { fields }
	}

	pub fn load_id(&self) -> Option<&str> {
		match self.get(LOAD_ID) {
			Some(FieldValue::Text(id)) => Some(id.as_str()),
			_ => None,
		}
	}

	pub fn get(&self, name: &str) -> Option<&FieldValue> {
		self.fields.iter().find(|(field, _)| *field == name).map(|(_, value)| value)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
		self.fields.iter().map(|(name, value)| (*name, value))
	}
}

pub fn coerce_field(kind: FieldKind, raw: Option<&Value>) -> FieldValue {
	let value = match kind {
		FieldKind::Text => as_str(raw).map(FieldValue::Text),
		FieldKind::Integer => as_int(raw).map(FieldValue::Integer),
		FieldKind::Decimal => as_decimal(raw).map(FieldValue::Decimal),
	};

	value.unwrap_or(FieldValue::Null)
}
