use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bfly_store::StoreError;
use bfly_types::ValidationError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Failures starting or configuring the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A request that could not be served.
///
/// The `Display` text is exactly what the client receives in
/// `{"error": ...}`. Store failures are logged and reported generically.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody(#[source] ValidationError),

    #[error("Invalid rating. Must be a number between 0 and 5.")]
    InvalidRating,

    #[error("Not found")]
    NotFound,

    #[error("Rating not found")]
    RatingNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Butterfly not found")]
    ButterflyNotFound,

    #[error("Internal server error")]
    Store(#[from] StoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidBody(_)
            | Self::InvalidRating
            | Self::UserNotFound
            | Self::ButterflyNotFound => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::RatingNotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Store(e) => error!(error = %e, "request failed"),
            Self::InvalidBody(reason) => warn!(%reason, "rejected request body"),
            _ => {}
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
