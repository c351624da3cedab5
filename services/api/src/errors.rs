use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use submission_store::StoreError;
use tracing::error;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn invalid_index() -> Self {
        Self::bad_request("Invalid index")
    }

    pub fn submission_not_found() -> Self {
        Self::not_found("Submission not found")
    }

    /// Maps a failed `save` to a 500 carrying the operation's own message.
    pub fn persist_failed(message: &'static str, err: StoreError) -> Self {
        error!(error = %err, "{}", message);
        Self::internal_server_error(message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

/// Load-side storage failures. Saves go through [`AppError::persist_failed`].
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let message = match err {
            StoreError::Decode(_) => "Failed to parse database",
            StoreError::Read(_) => "Failed to read database",
            StoreError::Write(_) | StoreError::Encode(_) => "Failed to write database",
        };
        error!(error = %err, "{}", message);
        AppError::internal_server_error(message)
    }
}

pub type AppResult<T> = Result<T, AppError>;
