use std::sync::Arc;

use loads_config::{Config, StorageBackend};
use loads_service::LoadsService;
use loads_storage::{db::PgStore, memory::MemoryStore, store::RecordStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LoadsService>,
}
impl AppState {
	pub async fn new(config: &Config) -> color_eyre::Result<Self> {
		let store: Arc<dyn RecordStore> = match config.storage.backend {
			StorageBackend::Postgres => {
				let postgres = config.storage.postgres.as_ref().ok_or_else(|| {
					color_eyre::eyre::eyre!("storage.postgres is required for the postgres backend.")
				})?;
				let store = PgStore::connect(postgres).await?;

				store.ensure_schema().await?;

				tracing::info!(table = %store.table(), "Connected to Postgres load store.");

				Arc::new(store)
			},
			StorageBackend::Memory => {
				tracing::warn!("Using the in-memory load store; records are lost on exit.");

				Arc::new(MemoryStore::new())
			},
		};

		Ok(Self::with_store(store, &config.security.api_key))
	}

	pub fn with_store(store: Arc<dyn RecordStore>, api_key: &str) -> Self {
		Self { service: Arc::new(LoadsService::new(store, api_key)) }
	}
}
