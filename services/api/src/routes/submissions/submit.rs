use axum::Json;
use tracing::debug;

use super::MessageResponse;
use crate::{
    errors::{AppError, AppResult},
    extractors::{Store, SubmissionPayload},
};

/// Append a new submission to the end of the store.
pub async fn handler(
    Store(store): Store,
    SubmissionPayload(input): SubmissionPayload,
) -> AppResult<Json<MessageResponse>> {
    let submission = input.validate()?;
    debug!(stopwatch_time = %submission.stopwatch_time, "Validated submission");

    let mut submissions = store.load().await?;
    submissions.push(submission);
    store
        .save(&submissions)
        .await
        .map_err(|err| AppError::persist_failed("Failed to save submission", err))?;

    debug!(index = submissions.len() - 1, "Submission appended");
    Ok(Json(MessageResponse::new("Submission saved successfully")))
}
