use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use submission_store::Submission;
use tracing::debug;

use crate::{
    errors::{AppError, AppResult},
    extractors::Store,
    validation::{query_values, require_index},
};

/// Fetch the submission at `?index=N`.
///
/// When `index` is repeated, the first occurrence is used.
pub async fn handler(
    Store(store): Store,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Submission>> {
    let Query(params) = query.map_err(|_| AppError::invalid_index())?;
    let index = require_index(query_values(&params, "index").next())?;

    let mut submissions = store.load().await?;
    if index >= submissions.len() {
        debug!(index, "Submission not found at index");
        return Err(AppError::submission_not_found());
    }

    Ok(Json(submissions.swap_remove(index)))
}
