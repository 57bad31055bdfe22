//! # HTTP Server
//!
//! Builds the combined router and serves it on the configured address.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;

use super::routes::{account_routes, health_handler, AppState};

/// Build the full application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", account_routes(state))
        .layer(cors)
}

/// Serve until the listener fails
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = TcpListener::bind(addr).await?;
    Logger::info("SERVER_LISTENING", &[("addr", &addr.to_string())]);
    axum::serve(listener, router).await
}
