//! dispatch-server — order-to-courier assignment service
//!
//! Long-running HTTP service that:
//! - Accepts delivery orders and delivery partner registrations
//! - Assigns each order to the best available partner in its zone
//! - Keeps all state in a process-wide in-memory store

use dispatch_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dispatch_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting dispatch-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config);

    // Build router
    let app = api::create_router(state);

    // Start HTTP server
    let http_addr = format!("{}:{}", config.host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("dispatch-server HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
