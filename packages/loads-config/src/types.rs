use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	#[serde(default)]
	pub backend: StorageBackend,
	pub postgres: Option<Postgres>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
	#[default]
	Postgres,
	Memory,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
	/// Table holding one JSONB document per load record.
	#[serde(default = "default_table")]
	pub table: String,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	/// Shared secret expected in the `apikey` request parameter.
	pub api_key: String,
	#[serde(default = "default_bind_localhost_only")]
	pub bind_localhost_only: bool,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_table() -> String {
	"loads".to_string()
}

fn default_bind_localhost_only() -> bool {
	true
}
