//! Readiness endpoint

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::server::{run_health_checks, HealthCheckFuture};
use database::postgres::check_health;

use crate::state::AppState;

/// 200 while PostgreSQL answers, 503 otherwise
async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    match run_health_checks(checks).await {
        Ok(ready) => ready.into_response(),
        Err(not_ready) => not_ready.into_response(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
