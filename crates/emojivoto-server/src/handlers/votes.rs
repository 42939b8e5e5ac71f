//! Voting handlers.

use axum::{Json, extract::State, http::StatusCode};
use emojivoto_store::emojivoto_core::VoteCount;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Body of POST /votes.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub shortcode: String,
}

/// Handler for POST /votes.
///
/// Only codes present in the catalog are counted.
#[instrument(skip_all, fields(code = %request.shortcode))]
pub async fn cast_vote(
    State(state): State<AppState>,
    Json(request): Json<VoteRequest>,
) -> Result<StatusCode, AppError> {
    let code = request.shortcode;

    if code.is_empty() {
        return Err(AppError::BadRequest("shortcode must not be empty".to_string()));
    }

    if state.directory().resolve(&code).await.is_none() {
        return Err(AppError::NotFound { code });
    }

    state.tally().vote(&code).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /leaderboard.
pub async fn leaderboard(State(state): State<AppState>) -> Result<Json<Vec<VoteCount>>, AppError> {
    let results = state.tally().results().await?;
    Ok(Json(results))
}
