pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized - invalid API key";
pub const STORE_FAILURE_MESSAGE: &str = "Load store request failed.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unauthorized - invalid API key")]
	Unauthorized,
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<loads_storage::Error> for Error {
	fn from(err: loads_storage::Error) -> Self {
		match err {
			loads_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			loads_storage::Error::NotFound(message) => Self::NotFound { message },
			loads_storage::Error::Sqlx(inner) => {
				tracing::error!(error = %inner, "Load store query failed.");

				Self::Storage { message: STORE_FAILURE_MESSAGE.to_string() }
			},
			loads_storage::Error::Codec(inner) => {
				tracing::error!(error = %inner, "Load store payload failed to encode or decode.");

				Self::Storage { message: STORE_FAILURE_MESSAGE.to_string() }
			},
		}
	}
}
