use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, LoadsService, Result};
use loads_domain::record::{FieldValue, LoadRecord};
use loads_storage::item::{self, AttrValue, Item};

const SAVED_MESSAGE: &str = "Saved load record.";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngestResponse {
	pub message: String,
	pub data: Value,
}

impl LoadsService {
	/// Coerces `fields` into a load record and replaces whatever is stored under its `load_id`.
	pub async fn ingest(&self, fields: &Map<String, Value>) -> Result<IngestResponse> {
		let record = LoadRecord::from_fields(fields);
		let Some(load_id) =
			record.load_id().filter(|id| !id.trim().is_empty()).map(str::to_string)
		else {
			return Err(Error::InvalidRequest { message: "load_id is required.".to_string() });
		};
		let item = record_to_item(&record);
		let data = item::item_to_json(&item);

		self.store.put(item).await.inspect_err(|err| {
			tracing::error!(load_id = %load_id, error = %err, "Failed to save load record.");
		})?;

		tracing::info!(load_id = %load_id, "Saved load record.");

		Ok(IngestResponse { message: SAVED_MESSAGE.to_string(), data })
	}
}

pub fn record_to_item(record: &LoadRecord) -> Item {
	record.fields().map(|(name, value)| (name.to_string(), field_to_attr(value))).collect()
}

fn field_to_attr(value: &FieldValue) -> AttrValue {
	match value {
		FieldValue::Null => AttrValue::Null,
		FieldValue::Text(text) => AttrValue::S(text.clone()),
		FieldValue::Integer(integer) => AttrValue::N((*integer).into()),
		FieldValue::Decimal(decimal) => AttrValue::N(*decimal),
	}
}
