//! Transport envelope decoding. Every failure collapses to an empty field map.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use serde_json::{Map, Value};

const DATA_KEY: &str = "data";
const BODY_KEY: &str = "body";
const BASE64_FLAG_KEY: &str = "isBase64Encoded";
const QUERY_PARAMS_KEY: &str = "queryStringParameters";
const API_KEY_PARAM: &str = "apikey";

/// The shapes a request payload arrives in.
#[derive(Clone, Debug, PartialEq)]
pub enum Envelope {
	/// JSON document as text.
	Inline(String),
	/// Base64 of a UTF-8 JSON document.
	Base64(String),
	/// Already-decoded JSON.
	Decoded(Value),
}
impl Envelope {
	/// Classifies a gateway event by its `body` and `isBase64Encoded` keys.
	pub fn from_event(event: Value) -> Self {
		let Value::Object(mut object) = event else {
			return Self::Decoded(event);
		};
		let base64 = object.get(BASE64_FLAG_KEY).is_some_and(is_truthy);

		match object.remove(BODY_KEY) {
			None | Some(Value::Null) => Self::Decoded(Value::Object(object)),
			Some(Value::String(body)) if base64 => Self::Base64(body),
			Some(Value::String(body)) => Self::Inline(body),
			Some(body) => Self::Decoded(body),
		}
	}

	/// Decodes the payload into a flat field map, unwrapping one `"data"` level.
	pub fn decode(self) -> Map<String, Value> {
		let payload = match self {
			Self::Inline(text) => serde_json::from_str(&text).ok(),
			Self::Base64(text) => decode_base64(&text),
			Self::Decoded(value) => Some(value),
		};

		match payload.map(unwrap_data) {
			Some(Value::Object(fields)) => fields,
			_ => Map::new(),
		}
	}
}

/// A gateway event: the request parameters plus the payload envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct GatewayEvent {
	pub api_key: Option<String>,
	pub envelope: Envelope,
}
impl GatewayEvent {
	pub fn parse(event: Value) -> Self {
		let api_key = event
			.get(QUERY_PARAMS_KEY)
			.and_then(|params| params.get(API_KEY_PARAM))
			.and_then(Value::as_str)
			.map(str::to_string);

		Self { api_key, envelope: Envelope::from_event(event) }
	}
}

/// Gateways differ in how they send the flag; any truthy JSON value counts.
fn is_truthy(flag: &Value) -> bool {
	match flag {
		Value::Null => false,
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => !text.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(fields) => !fields.is_empty(),
	}
}

fn decode_base64(text: &str) -> Option<Value> {
	let bytes = BASE64.decode(text.trim()).ok()?;
	let text = String::from_utf8(bytes).ok()?;

	serde_json::from_str(&text).ok()
}

fn unwrap_data(payload: Value) -> Value {
	match payload {
		Value::Object(mut object) if object.contains_key(DATA_KEY) =>
			object.remove(DATA_KEY).unwrap_or(Value::Null),
		other => other,
	}
}
