// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard, health_check};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Named routes, as `(name, path)`
pub const APP_DASHBOARD: (&str, &str) = ("app_dashboard", "/dashboard");
pub const HEALTH: (&str, &str) = ("healthz", "/healthz");

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(HEALTH.1, get(health_check))
        .route(APP_DASHBOARD.1, get(dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
