mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Security, Service, Storage, StorageBackend};

use std::{fs, path::Path};

use regex::Regex;

const TABLE_NAME_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.security.api_key.is_empty() {
		return Err(Error::Validation {
			message: "security.api_key must be non-empty.".to_string(),
		});
	}

	match (cfg.storage.backend, cfg.storage.postgres.as_ref()) {
		(StorageBackend::Postgres, None) => {
			return Err(Error::Validation {
				message: "storage.postgres is required when storage.backend is postgres."
					.to_string(),
			});
		},
		(StorageBackend::Postgres, Some(postgres)) => validate_postgres(postgres)?,
		(StorageBackend::Memory, _) => {},
	}

	Ok(())
}

fn validate_postgres(postgres: &Postgres) -> Result<()> {
	if postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}
	if !Regex::new(TABLE_NAME_PATTERN).map(|re| re.is_match(&postgres.table)).unwrap_or(false) {
		return Err(Error::Validation {
			message: "storage.postgres.table must be a plain SQL identifier.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.security.api_key = cfg.security.api_key.trim().to_string();

	if let Some(postgres) = cfg.storage.postgres.as_mut() {
		postgres.table = postgres.table.trim().to_string();
	}
}
