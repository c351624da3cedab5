use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};
use tracing::debug;

use super::MessageResponse;
use crate::{
    errors::{AppError, AppResult},
    extractors::Store,
    validation::require_index,
};

/// Remove the submission at `:index`; later submissions shift down by one.
pub async fn handler(
    Store(store): Store,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(raw_index) = path.map_err(|_| AppError::invalid_index())?;
    let index = require_index(Some(&raw_index))?;

    let mut submissions = store.load().await?;
    if index >= submissions.len() {
        debug!(index, "Submission not found at index");
        return Err(AppError::submission_not_found());
    }
    submissions.remove(index);

    store
        .save(&submissions)
        .await
        .map_err(|err| AppError::persist_failed("Failed to delete submission", err))?;

    Ok(Json(MessageResponse::new("Submission deleted successfully")))
}
