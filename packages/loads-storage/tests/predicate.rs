use std::str::FromStr;

use rust_decimal::Decimal;

use loads_storage::{
	item::{AttrValue, Item, item_to_json},
	predicate::{Condition, Predicate},
};

fn n(text: &str) -> AttrValue {
	AttrValue::N(Decimal::from_str(text).expect("decimal literal"))
}

fn s(text: &str) -> AttrValue {
	AttrValue::S(text.to_string())
}

fn item(pairs: &[(&str, AttrValue)]) -> Item {
	pairs.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
}

fn exists() -> Predicate {
	Predicate::new().and(Condition::Exists { attr: "load_id".to_string() })
}

#[test]
fn exists_rejects_missing_and_null_keys() {
	let predicate = exists();

	assert!(predicate.matches(&item(&[("load_id", s("L1"))])));
	assert!(!predicate.matches(&item(&[("load_id", AttrValue::Null)])));
	assert!(!predicate.matches(&item(&[("origin", s("Dallas, TX"))])));
}

#[test]
fn lte_is_an_inclusive_ceiling() {
	let predicate =
		exists().and(Condition::Lte { attr: "weight".to_string(), value: n("500") });

	assert!(predicate.matches(&item(&[("load_id", s("L1")), ("weight", n("500"))])));
	assert!(predicate.matches(&item(&[("load_id", s("L1")), ("weight", n("499.99"))])));
	assert!(!predicate.matches(&item(&[("load_id", s("L1")), ("weight", n("501"))])));
	assert!(!predicate.matches(&item(&[("load_id", s("L1")), ("weight", s("400"))])));
}

#[test]
fn eq_compares_decimals_by_value() {
	let predicate =
		exists().and(Condition::Eq { attr: "loadboard_rate".to_string(), value: n("1200") });

	assert!(predicate.matches(&item(&[("load_id", s("L1")), ("loadboard_rate", n("1200.00"))])));
	assert!(!predicate.matches(&item(&[("load_id", s("L1")), ("loadboard_rate", n("1199"))])));
}

#[test]
fn between_is_inclusive_on_both_ends() {
	let predicate = exists().and(Condition::Between {
		attr: "pickup_datetime".to_string(),
		low: s("2024-05-01T00:00:00Z"),
		high: s("2024-05-01T23:59:59Z"),
	});

	for stamp in ["2024-05-01T00:00:00Z", "2024-05-01T12:30:00Z", "2024-05-01T23:59:59Z"] {
		assert!(predicate.matches(&item(&[("load_id", s("L1")), ("pickup_datetime", s(stamp))])));
	}

	assert!(!predicate.matches(&item(&[
		("load_id", s("L1")),
		("pickup_datetime", s("2024-05-02T00:00:00Z")),
	])));
}

#[test]
fn contains_requires_a_string_attribute() {
	let predicate =
		exists().and(Condition::Contains { attr: "origin".to_string(), value: "Dallas".to_string() });

	assert!(predicate.matches(&item(&[("load_id", s("L1")), ("origin", s("Dallas, TX"))])));
	assert!(!predicate.matches(&item(&[("load_id", s("L1")), ("origin", s("dallas, TX"))])));
	assert!(!predicate.matches(&item(&[("load_id", s("L1")), ("origin", n("1"))])));
}

#[test]
fn evaluate_reports_first_failing_condition() {
	let predicate = exists()
		.and(Condition::Eq { attr: "equipment_type".to_string(), value: s("Reefer") })
		.and(Condition::Lte { attr: "miles".to_string(), value: n("100") });
	let (passed, reason) = predicate.evaluate(&item(&[
		("load_id", s("L1")),
		("equipment_type", s("Reefer")),
		("miles", n("250")),
	]));

	assert!(!passed);
	assert_eq!(reason.as_deref(), Some("lte:miles"));
	assert_eq!(predicate.to_value()["args"].as_array().map(Vec::len), Some(3));
}

#[test]
fn items_render_numbers_as_json_numbers() {
	let rendered = item_to_json(&item(&[
		("load_id", s("L1")),
		("miles", n("450")),
		("loadboard_rate", n("1200.5")),
		("notes", AttrValue::Null),
	]));

	assert_eq!(
		rendered,
		serde_json::json!({
			"load_id": "L1",
			"miles": 450,
			"loadboard_rate": 1200.5,
			"notes": null,
		})
	);
}

#[test]
fn attr_values_persist_exact_decimal_text() {
	let encoded = serde_json::to_value(n("1200.10")).expect("encode attribute");

	assert_eq!(encoded, serde_json::json!({ "N": "1200.10" }));

	let decoded: AttrValue = serde_json::from_value(encoded).expect("decode attribute");

	assert_eq!(decoded, n("1200.10"));
	assert_eq!(serde_json::to_value(AttrValue::Null).expect("encode null"), "NULL");
}
