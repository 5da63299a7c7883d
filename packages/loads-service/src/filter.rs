//! Compiles sparse search criteria into one conjunctive store predicate.

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::{Error, Result};
use loads_domain::{
	coerce::{as_decimal, as_int, as_str},
	normalize::{city_only, date_range, title_case},
	record::LOAD_ID,
};
use loads_storage::{
	item::AttrValue,
	predicate::{Condition, Predicate},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
	/// Title-cased city token must appear as a substring.
	CityContains,
	/// Value falls within the criterion's day bucket.
	DayRange,
	TextEq,
	DecimalEq,
	/// Criterion is an inclusive ceiling.
	DecimalAtMost,
	IntegerAtMost,
	TextContains,
}

const RULES: [(&str, Operator); 12] = [
	("origin", Operator::CityContains),
	("destination", Operator::CityContains),
	("pickup_datetime", Operator::DayRange),
	("delivery_datetime", Operator::DayRange),
	("equipment_type", Operator::TextEq),
	("weight", Operator::DecimalAtMost),
	("commodity_type", Operator::TextEq),
	("num_of_pieces", Operator::IntegerAtMost),
	("miles", Operator::IntegerAtMost),
	("dimensions", Operator::TextEq),
	("loadboard_rate", Operator::DecimalEq),
	("notes", Operator::TextContains),
];

/// Builds the predicate for `criteria`. Always seeded with `exists(load_id)`; absent or falsy
/// criteria add no condition.
pub fn compile(criteria: &Map<String, Value>) -> Result<Predicate> {
	let mut predicate = Predicate::new().and(Condition::Exists { attr: LOAD_ID.to_string() });

	for (field, operator) in RULES {
		let Some(raw) = criteria.get(field).filter(|value| is_present(value)) else {
			continue;
		};

		predicate = predicate.and(condition(field, operator, raw)?);
	}

	Ok(predicate)
}

fn condition(field: &str, operator: Operator, raw: &Value) -> Result<Condition> {
	let attr = field.to_string();
	let condition = match operator {
		Operator::CityContains =>
			Condition::Contains { attr, value: title_case(&city_only(&text(raw))) },
		Operator::DayRange => {
			let (low, high) = date_range(&text(raw));

			Condition::Between { attr, low: AttrValue::S(low), high: AttrValue::S(high) }
		},
		Operator::TextEq => Condition::Eq { attr, value: AttrValue::S(text(raw)) },
		Operator::DecimalEq => Condition::Eq { attr, value: AttrValue::N(decimal(field, raw)?) },
		Operator::DecimalAtMost =>
			Condition::Lte { attr, value: AttrValue::N(decimal(field, raw)?) },
		Operator::IntegerAtMost => {
			let ceiling = as_int(Some(raw)).ok_or_else(|| not_numeric(field, "an integer"))?;

			Condition::Lte { attr, value: AttrValue::N(Decimal::from(ceiling)) }
		},
		Operator::TextContains => Condition::Contains { attr, value: text(raw) },
	};

	Ok(condition)
}

/// Falsy criteria (`null`, `""`, `0`, `false`, `[]`, `{}`) impose no constraint.
fn is_present(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(fields) => !fields.is_empty(),
	}
}

fn text(raw: &Value) -> String {
	as_str(Some(raw)).unwrap_or_default()
}

fn decimal(field: &str, raw: &Value) -> Result<Decimal> {
	as_decimal(Some(raw)).ok_or_else(|| not_numeric(field, "a number"))
}

fn not_numeric(field: &str, expected: &str) -> Error {
	Error::InvalidRequest { message: format!("{field} must be {expected}.") }
}
