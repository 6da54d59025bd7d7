use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use std::collections::HashMap;

use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
	pub status: String,
	pub providers: HashMap<String, bool>,
}

/// GET /ready - Readiness probe with per-provider health checks
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let providers = state.mixer_service.health_check_all().await;
	let all_healthy = providers.values().all(|v| *v) || providers.is_empty();

	let status = if all_healthy { "ready" } else { "degraded" };
	let code = if all_healthy {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};

	(
		code,
		Json(ReadinessResponse {
			status: status.to_string(),
			providers,
		}),
	)
}
