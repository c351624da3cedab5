use axum::{
    routing::{self, get, post, put},
    Router,
};
use serde::Serialize;

use crate::AppState;

mod delete;
mod read;
mod search;
mod submit;
mod update;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(submit::handler))
        .route("/read", get(read::handler))
        .route("/update/:index", put(update::handler))
        .route("/delete/:index", routing::delete(delete::handler))
        .route("/search", get(search::handler))
}
