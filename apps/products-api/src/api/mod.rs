//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::server::health_router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
}
