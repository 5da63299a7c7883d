use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::json;

use loads_domain::{
	coerce::{as_decimal, as_int, as_str},
	normalize::{city_only, date_range, title_case},
	record::{FieldValue, LoadRecord},
};

fn day(start: &str, end: &str) -> (String, String) {
	(start.to_string(), end.to_string())
}

#[test]
fn city_only_keeps_leading_token() {
	assert_eq!(city_only("Dallas, TX"), "dallas");
	assert_eq!(city_only("Dallas"), "dallas");
	assert_eq!(city_only("  San Antonio ,TX, USA"), "san antonio");
	assert_eq!(city_only(""), "");
}

#[test]
fn title_case_capitalizes_each_alphabetic_run() {
	assert_eq!(title_case("dallas"), "Dallas");
	assert_eq!(title_case("new york"), "New York");
	assert_eq!(title_case("o'hare"), "O'Hare");
	assert_eq!(title_case("ST. LOUIS"), "St. Louis");
}

#[test]
fn date_range_buckets_the_calendar_day() {
	assert_eq!(
		date_range("2024-05-01T10:00:00Z"),
		day("2024-05-01T00:00:00Z", "2024-05-01T23:59:59Z")
	);
	assert_eq!(
		date_range("2024-05-01T23:30:00.250-05:00"),
		day("2024-05-01T00:00:00Z", "2024-05-01T23:59:59Z")
	);
	assert_eq!(
		date_range("2024-05-01 08:15"),
		day("2024-05-01T00:00:00Z", "2024-05-01T23:59:59Z")
	);
	assert_eq!(date_range("2024-05-01"), day("2024-05-01T00:00:00Z", "2024-05-01T23:59:59Z"));
}

#[test]
fn date_range_falls_back_to_leading_day_token() {
	assert_eq!(
		date_range("2024-05-01 around noon"),
		day("2024-05-01T00:00:00Z", "2024-05-01T23:59:59Z")
	);
	assert_eq!(date_range("soon"), day("soonT00:00:00Z", "soonT23:59:59Z"));
}

#[test]
fn string_coercion_stringifies_scalars() {
	assert_eq!(as_str(Some(&json!("MC-1"))), Some("MC-1".to_string()));
	assert_eq!(as_str(Some(&json!(42))), Some("42".to_string()));
	assert_eq!(as_str(Some(&json!(null))), None);
	assert_eq!(as_str(None), None);
}

#[test]
fn integer_coercion_is_field_local_and_lenient() {
	assert_eq!(as_int(Some(&json!(12))), Some(12));
	assert_eq!(as_int(Some(&json!(" 12 "))), Some(12));
	assert_eq!(as_int(Some(&json!(12.9))), Some(12));
	assert_eq!(as_int(Some(&json!("12.5"))), None);
	assert_eq!(as_int(Some(&json!("twelve"))), None);
	assert_eq!(as_int(Some(&json!(true))), None);
}

#[test]
fn decimal_coercion_avoids_binary_float() {
	assert_eq!(as_decimal(Some(&json!("1200.10"))), Decimal::from_str("1200.10").ok());
	assert_eq!(as_decimal(Some(&json!(0.1))), Decimal::from_str("0.1").ok());
	assert_eq!(as_decimal(Some(&json!("1.5e3"))), Decimal::from_str("1500").ok());
	assert_eq!(as_decimal(Some(&json!("n/a"))), None);
	assert_eq!(as_decimal(Some(&json!(""))), None);
}

#[test]
fn record_coercion_degrades_bad_fields_to_null() {
	let raw = json!({
		"load_id": 981,
		"weight": "heavy",
		"miles": "450",
		"loadboard_rate": 1200.5,
		"unexpected": "dropped"
	});
	let record = LoadRecord::from_fields(raw.as_object().expect("object payload"));

	assert_eq!(record.load_id(), Some("981"));
	assert_eq!(record.get("weight"), Some(&FieldValue::Null));
	assert_eq!(record.get("miles"), Some(&FieldValue::Integer(450)));
	assert_eq!(
		record.get("loadboard_rate"),
		Some(&FieldValue::Decimal(Decimal::from_str("1200.5").expect("decimal literal")))
	);
	assert_eq!(record.get("call_outcome"), Some(&FieldValue::Null));
	assert_eq!(record.get("unexpected"), None);
	assert_eq!(record.fields().count(), 19);
}
