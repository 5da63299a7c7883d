use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, LoadsService, Result};
use loads_domain::{
	coerce::{as_decimal, as_str},
	record::{ACCEPTED_LOADRATE, LOAD_ID},
};
use loads_storage::item::AttrValue;

const SUCCESS_STATUS: &str = "success";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateResponse {
	pub status: String,
	pub updated_attributes: Map<String, Value>,
}

impl LoadsService {
	/// Sets `accepted_loadrate` on an existing record and returns the stored value.
	pub async fn update_accepted_rate(&self, fields: &Map<String, Value>) -> Result<UpdateResponse> {
		let load_id = as_str(fields.get(LOAD_ID)).filter(|id| !id.trim().is_empty());
		let raw_rate = fields.get(ACCEPTED_LOADRATE).filter(|rate| !rate.is_null());
		let (Some(load_id), Some(raw_rate)) = (load_id, raw_rate) else {
			return Err(Error::InvalidRequest {
				message: "Missing load_id or accepted_loadrate".to_string(),
			});
		};
		let rate = as_decimal(Some(raw_rate)).ok_or_else(|| Error::InvalidRequest {
			message: format!("{ACCEPTED_LOADRATE} must be a number."),
		})?;
		let stored = self
			.store
			.update_attribute(&load_id, ACCEPTED_LOADRATE, AttrValue::N(rate))
			.await
			.inspect_err(|err| {
				tracing::warn!(load_id = %load_id, error = %err, "Failed to update accepted rate.");
			})?;

		tracing::info!(load_id = %load_id, "Updated accepted rate.");

		let mut updated_attributes = Map::new();

		updated_attributes.insert(ACCEPTED_LOADRATE.to_string(), stored.to_json());

		Ok(UpdateResponse { status: SUCCESS_STATUS.to_string(), updated_attributes })
	}
}
