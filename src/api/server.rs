//! HTTP API server

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::middleware::require_auth;
use crate::auth::store::UserStore;
use crate::config::Config;
use crate::error::Result;

use super::routes;

/// Application state shared across handlers
///
/// Everything here is read-only after startup, so handlers share it
/// through a plain `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub users: UserStore,
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let users = UserStore::from_config(&config);
    if users.is_empty() {
        tracing::warn!("No users configured; login will always reject");
    }

    let state = Arc::new(AppState { config, users });

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
fn create_router(state: SharedState) -> Router {
    let protected = Router::new()
        .route("/api/me", get(routes::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        // Open routes
        .route("/api/health", get(routes::health))
        .route("/api/auth/login", post(routes::login))
        // Routes behind the token guard
        .merge(protected)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
