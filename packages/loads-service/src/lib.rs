pub mod envelope;
pub mod filter;
pub mod ingest;
pub mod search;
pub mod update;

mod error;

pub use envelope::{Envelope, GatewayEvent};
pub use error::{Error, Result, STORE_FAILURE_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use ingest::IngestResponse;
pub use update::UpdateResponse;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use loads_storage::store::RecordStore;

/// The three request paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
	Ingest,
	Search,
	Update,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
	Ingested(IngestResponse),
	Found(Vec<Value>),
	Updated(UpdateResponse),
}

pub struct LoadsService {
	store: Arc<dyn RecordStore>,
	api_key: String,
}
impl LoadsService {
	pub fn new(store: Arc<dyn RecordStore>, api_key: impl Into<String>) -> Self {
		Self { store, api_key: api_key.into() }
	}

	/// Checks the shared secret carried in the `apikey` request parameter.
	pub fn authorize(&self, provided: Option<&str>) -> Result<()> {
		match provided {
			Some(key) if key == self.api_key => Ok(()),
			_ => Err(Error::Unauthorized),
		}
	}

	/// Authorizes, decodes the envelope, and runs one operation.
	pub async fn invoke(
		&self,
		operation: Operation,
		api_key: Option<&str>,
		envelope: Envelope,
	) -> Result<Outcome> {
		if let Err(err) = self.authorize(api_key) {
			tracing::warn!(?operation, "Rejected request with an invalid API key.");

			return Err(err);
		}

		let fields = envelope.decode();

		match operation {
			Operation::Ingest => self.ingest(&fields).await.map(Outcome::Ingested),
			Operation::Search => self.search(&fields).await.map(Outcome::Found),
			Operation::Update => self.update_accepted_rate(&fields).await.map(Outcome::Updated),
		}
	}
}
