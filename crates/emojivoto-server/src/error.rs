use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use emojivoto_store::{CacheError, TallyError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug)]
pub enum AppError {
    /// No catalog item for the requested shortcode
    NotFound { code: String },

    /// Parametros invalidos
    BadRequest(String),

    /// Error interno
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            AppError::NotFound { code } => (
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("No emoji found for shortcode {}", code),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad Request", msg),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                msg,
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<TallyError> for AppError {
    fn from(err: TallyError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Errors that stop the service before it starts listening.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to initialize vote storage: {0}")]
    Tally(#[from] TallyError),

    #[error("failed to initialize emoji cache: {0}")]
    Cache(#[from] CacheError),
}
