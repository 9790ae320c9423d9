//! HTTP API routes

pub mod assign;
pub mod extract;
pub mod health;
pub mod orders;
pub mod partners;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the fully configured application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health probe - public route
        .route("/health", get(health::health_check))
        // Order CRUD + listings
        .merge(orders::router())
        // Partner CRUD + listings
        .merge(partners::router())
        // Assignment
        .route("/assign", post(assign::assign_order))
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
