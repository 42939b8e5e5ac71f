use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn down() -> Self {
        Self {
            status: "DOWN".to_string(),
        }
    }
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

/// Reports UP while the vote storage answers.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.tally().health_check().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::default())),
        Err(e) => {
            warn!(backend = state.tally().backend_name(), error = %e, "Health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::down()))
        },
    }
}
