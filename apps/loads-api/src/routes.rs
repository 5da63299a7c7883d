use axum::{
	Json, Router,
	body::Bytes,
	extract::{Path, Query, State, rejection::QueryRejection},
	http::{HeaderMap, HeaderValue, StatusCode, header},
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::AppState;
use loads_service::{Envelope, Error, GatewayEvent, Operation, Outcome, UNAUTHORIZED_MESSAGE};

const BASE64_ENCODING: &str = "base64";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/loads", post(ingest))
		.route("/v1/loads/search", post(search))
		.route("/v1/loads/accepted_rate", post(update_accepted_rate))
		.route("/v1/events/{operation}", post(event))
		.with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiKeyParams {
	apikey: Option<String>,
}
impl ApiKeyParams {
	/// A query string that does not deserialize carries no usable key.
	fn from_query(query: Result<Query<Self>, QueryRejection>) -> Option<String> {
		query.ok().and_then(|Query(params)| params.apikey)
	}
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn ingest(
	State(state): State<AppState>,
	query: Result<Query<ApiKeyParams>, QueryRejection>,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let api_key = ApiKeyParams::from_query(query);

	dispatch(&state, Operation::Ingest, api_key.as_deref(), body_envelope(&headers, body)).await
}

async fn search(
	State(state): State<AppState>,
	query: Result<Query<ApiKeyParams>, QueryRejection>,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let api_key = ApiKeyParams::from_query(query);

	dispatch(&state, Operation::Search, api_key.as_deref(), body_envelope(&headers, body)).await
}

async fn update_accepted_rate(
	State(state): State<AppState>,
	query: Result<Query<ApiKeyParams>, QueryRejection>,
	headers: HeaderMap,
	body: Bytes,
) -> Response {
	let api_key = ApiKeyParams::from_query(query);

	dispatch(&state, Operation::Update, api_key.as_deref(), body_envelope(&headers, body)).await
}

/// Accepts a whole gateway event: `body`, `isBase64Encoded`, and `queryStringParameters`.
async fn event(
	State(state): State<AppState>,
	Path(operation): Path<Operation>,
	body: Bytes,
) -> Response {
	let raw = serde_json::from_slice(&body).unwrap_or(Value::Null);
	let GatewayEvent { api_key, envelope } = GatewayEvent::parse(raw);

	dispatch(&state, operation, api_key.as_deref(), envelope).await
}

async fn dispatch(
	state: &AppState,
	operation: Operation,
	api_key: Option<&str>,
	envelope: Envelope,
) -> Response {
	match state.service.invoke(operation, api_key, envelope).await {
		Ok(Outcome::Ingested(response)) => Json(response).into_response(),
		Ok(Outcome::Found(records)) => {
			let mut response = Json(records).into_response();

			response
				.headers_mut()
				.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

			response
		},
		Ok(Outcome::Updated(response)) => Json(response).into_response(),
		Err(err) => ApiError::from(err).into_response(),
	}
}

fn body_envelope(headers: &HeaderMap, body: Bytes) -> Envelope {
	let text = String::from_utf8(body.to_vec()).unwrap_or_default();
	let base64 = headers
		.get("content-transfer-encoding")
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| value.trim().eq_ignore_ascii_case(BASE64_ENCODING));

	if base64 { Envelope::Base64(text) } else { Envelope::Inline(text) }
}

#[derive(Debug, Serialize)]
struct UnauthorizedBody {
	error: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	status: &'static str,
	message: String,
}

#[derive(Debug)]
pub enum ApiError {
	Unauthorized,
	Failed { status: StatusCode, message: String },
}

impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		let status = match &err {
			Error::Unauthorized => return Self::Unauthorized,
			Error::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
			Error::NotFound { .. } => StatusCode::NOT_FOUND,
			Error::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
		};

		Self::Failed { status, message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		match self {
			Self::Unauthorized =>
				(StatusCode::UNAUTHORIZED, Json(UnauthorizedBody { error: UNAUTHORIZED_MESSAGE }))
					.into_response(),
			Self::Failed { status, message } =>
				(status, Json(ErrorBody { status: "error", message })).into_response(),
		}
	}
}
