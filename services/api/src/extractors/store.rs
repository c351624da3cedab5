use crate::AppState;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::convert::Infallible;
use submission_store::SharedStore;

/// Handle to the submission store configured on the router.
pub struct Store(pub SharedStore);

#[async_trait]
impl<S> FromRequestParts<S> for Store
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(Store(app_state.store))
    }
}
