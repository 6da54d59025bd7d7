use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use std::collections::HashMap;
use tracing::info;

use crate::handlers::common::{bad_request, internal_error, ErrorResponse};
use crate::state::AppState;
use mixer_types::{ContentItem, MixRequest};

/// Upper bound on the `count` and `offset` query parameters; anything
/// larger is rejected before any allocation is sized from it
const MAX_WINDOW_PARAM: usize = 10_000;

/// GET /api/v1/feed - Mixed content for a `(count, offset)` window
///
/// Both query parameters are required numerics; anything missing or
/// malformed is rejected before the mixing core runs.
pub async fn get_feed(
	State(state): State<AppState>,
	Query(params): Query<HashMap<String, String>>,
	headers: HeaderMap,
) -> Result<Json<Vec<ContentItem>>, (StatusCode, Json<ErrorResponse>)> {
	let count = required_usize(&params, "count")?;
	let offset = required_usize(&params, "offset")?;
	let user_key = client_key(&headers);

	info!(count, offset, "received feed request");

	let items = state
		.mixer_service
		.mix(MixRequest::new(count, offset, user_key))
		.await
		.map_err(|e| {
			internal_error("CONFIGURATION_ERROR", format!("unable to mix content: {}", e))
		})?;

	Ok(Json(items))
}

fn required_usize(
	params: &HashMap<String, String>,
	name: &str,
) -> Result<usize, (StatusCode, Json<ErrorResponse>)> {
	let raw = params.get(name).ok_or_else(|| {
		bad_request(
			"MISSING_PARAMETER",
			format!("missing required query parameter '{}'", name),
		)
	})?;

	let value: usize = raw.parse().map_err(|_| {
		bad_request(
			"INVALID_PARAMETER",
			format!("query parameter '{}' must be a non-negative integer", name),
		)
	})?;

	if value > MAX_WINDOW_PARAM {
		return Err(bad_request(
			"INVALID_PARAMETER",
			format!(
				"query parameter '{}' must not exceed {}",
				name, MAX_WINDOW_PARAM
			),
		));
	}

	Ok(value)
}

/// Caller identity forwarded to providers; proxies put the client address
/// in `x-forwarded-for`
fn client_key(headers: &HeaderMap) -> String {
	headers
		.get("x-forwarded-for")
		.or_else(|| headers.get("x-real-ip"))
		.and_then(|v| v.to_str().ok())
		.map(|v| v.split(',').next().unwrap_or(v).trim().to_string())
		.unwrap_or_else(|| "anonymous".to_string())
}
