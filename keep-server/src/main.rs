//! keep-server — Kingdom roster REST backend
//!
//! Long-running service that:
//! - Stores the kingdom → clan → army member hierarchy in PostgreSQL
//! - Serves the roster CRUD API consumed by the web frontend
//! - Sits behind the Nginx reverse proxy defined in nginx/nginx.conf

mod api;
mod config;
mod db;
mod error;
mod password;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // Initialize tracing
    let default_filter = if config.debug {
        "keep_server=debug,tower_http=debug"
    } else {
        "keep_server=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    tracing::info!("Starting keep-server (env: {})", config.environment);

    // Initialize application state (DB pool + migrations)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state, &config.cors_allowed_origin);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("keep-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
