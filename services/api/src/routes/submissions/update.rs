use axum::{
    extract::{rejection::PathRejection, Path},
    Json,
};
use tracing::debug;

use super::MessageResponse;
use crate::{
    errors::{AppError, AppResult},
    extractors::{Store, SubmissionPayload},
    validation::require_index,
};

/// Replace the submission at `:index` wholesale.
///
/// The index is checked before the body, so a bad index wins over a bad
/// payload.
pub async fn handler(
    Store(store): Store,
    path: Result<Path<String>, PathRejection>,
    payload: Result<SubmissionPayload, AppError>,
) -> AppResult<Json<MessageResponse>> {
    let Path(raw_index) = path.map_err(|_| AppError::invalid_index())?;
    let index = require_index(Some(&raw_index))?;
    let SubmissionPayload(input) = payload?;
    let submission = input.validate()?;

    let mut submissions = store.load().await?;
    let Some(slot) = submissions.get_mut(index) else {
        debug!(index, "Submission not found at index");
        return Err(AppError::submission_not_found());
    };
    *slot = submission;

    store
        .save(&submissions)
        .await
        .map_err(|err| AppError::persist_failed("Failed to update submission", err))?;

    Ok(Json(MessageResponse::new("Submission updated successfully")))
}
