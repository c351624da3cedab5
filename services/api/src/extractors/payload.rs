use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value;

use crate::{errors::AppError, validation::SubmissionInput};

/// Submission body, decoded leniently.
///
/// An empty body reads as an object with no fields, so it fails presence
/// validation rather than decoding. Anything that is not a JSON object is
/// rejected with 400. No `Content-Type` is required.
pub struct SubmissionPayload(pub SubmissionInput);

#[async_trait]
impl<S> FromRequest<S> for SubmissionPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(SubmissionPayload(SubmissionInput::default()));
        }

        let value: Value =
            serde_json::from_slice(&bytes).map_err(|_| AppError::bad_request("Invalid JSON body"))?;
        if !value.is_object() {
            return Err(AppError::bad_request("Invalid JSON body"));
        }

        serde_json::from_value(value)
            .map(SubmissionPayload)
            .map_err(|_| AppError::bad_request("Invalid JSON body"))
    }
}
