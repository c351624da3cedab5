use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use submission_store::Submission;
use tracing::debug;

use crate::{
    errors::{AppError, AppResult},
    extractors::Store,
    validation::query_values,
};

/// First submission whose email matches exactly (case-sensitive).
///
/// A repeated `email` parameter never matches a stored email.
pub async fn handler(
    Store(store): Store,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Submission>> {
    let Query(params) = query.map_err(|_| AppError::bad_request("Email is required"))?;
    let emails: Vec<&str> = query_values(&params, "email").collect();
    let email = match emails.as_slice() {
        [] | [""] => return Err(AppError::bad_request("Email is required")),
        [email] => Some(*email),
        _ => None,
    };

    let found = store
        .load()
        .await?
        .into_iter()
        .find(|submission| email == Some(submission.email.as_str()));

    match found {
        Some(submission) => Ok(Json(submission)),
        None => {
            debug!(email = ?email, "No submission with email");
            Err(AppError::submission_not_found())
        }
    }
}
