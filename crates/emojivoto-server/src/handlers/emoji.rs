//! Emoji directory handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use emojivoto_store::emojivoto_core::Item;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Handler for GET /emoji.
pub async fn list_emoji(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.directory().list().to_vec())
}

/// Handler for GET /emoji/{code}.
#[instrument(skip_all, fields(code = %code))]
pub async fn find_emoji(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Item>, AppError> {
    state
        .directory()
        .resolve(&code)
        .await
        .map(Json)
        .ok_or(AppError::NotFound { code })
}
