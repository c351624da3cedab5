use axum::Router;
use std::{path::Path, sync::Arc};
use submission_store::{JsonFileStore, SharedStore, SubmissionStore};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod errors;
pub mod extractors;
mod routes;
pub mod validation;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: impl SubmissionStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// State backed by the JSON file at `database_path`, created if missing.
    pub async fn open(database_path: &Path) -> anyhow::Result<Self> {
        let store = JsonFileStore::open(database_path).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to open submission store at {}: {}",
                database_path.display(),
                e
            )
        })?;

        Ok(Self::new(store))
    }
}

/// Full application router with tracing and CORS layers applied.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
