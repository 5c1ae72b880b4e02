mod handlers;
mod types;
mod state;
pub use handlers::*;
pub use types::*;
pub use state::*;

use tokio::net::TcpListener;
use axum::{
    Router,
    routing::get
};
use tower_http::cors::{Any, CorsLayer};
use std::sync::Arc;
use std::net::SocketAddr;
use tracing::info;
use anyhow::Result;
use std::time::Duration;

pub async fn serve(host: String, port: u16, state: AppState) -> Result<()> {
    let state = Arc::new(state);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    // Build router with routes and middleware
    let app = Router::new()
        // Core endpoints
        .route("/health", get(health_check))
        .route("/events", get(list_events))

        // Analysis endpoints
        .route("/summary", get(get_summary))
        .route("/tiers", get(get_tiers))
        .route("/histogram", get(get_histogram))
        .route("/scatter", get(get_scatter))
        .route("/analysis", get(get_analysis))
        .layer(cors)
        .with_state(state);

    // Create socket address
    let addr = format!("{}:{}", host, port)
        .parse::<SocketAddr>()?;

    // Create TCP listener
    let listener = TcpListener::bind(&addr).await?;

    info!("API server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
