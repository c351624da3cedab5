use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;

use submission_api::config::Config;
use submission_api::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "submission_api=debug,submission_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        environment = %config.environment,
        database_path = %config.database_path.display(),
        "Loaded configuration"
    );

    let state = AppState::open(&config.database_path).await?;
    let app = submission_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
