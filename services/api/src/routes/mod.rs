use axum::{routing::get, Json, Router};

use crate::AppState;

mod submissions;

/// Liveness probe.
async fn ping() -> Json<bool> {
    Json(true)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .merge(submissions::router())
}
