use serde_json::{Map, Value};

use crate::{LoadsService, Result, filter};
use loads_storage::item;

impl LoadsService {
	/// Scans the whole store with the predicate compiled from `criteria`.
	pub async fn search(&self, criteria: &Map<String, Value>) -> Result<Vec<Value>> {
		let predicate = filter::compile(criteria)?;

		tracing::debug!(filter = %predicate.to_value(), "Compiled search filter.");

		let items = self.store.scan(&predicate).await.inspect_err(|err| {
			tracing::error!(error = %err, "Load record scan failed.");
		})?;

		tracing::info!(
			criteria = criteria.len(),
			conditions = predicate.conditions().len(),
			matched = items.len(),
			"Searched load records."
		);

		Ok(items.iter().map(item::item_to_json).collect())
	}
}
