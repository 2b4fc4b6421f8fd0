// HTTP request handlers
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::AppError;
use crate::presentation::router::{APP_DASHBOARD, HEALTH};
use axum::{body::Body, extract::State, http::HeaderMap, http::Response};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    tracing::trace!(route = HEALTH.0, "health check");
    "ok"
}

/// Dashboard home page
pub async fn dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response<Body>, AppError> {
    tracing::debug!(route = APP_DASHBOARD.0, "rendering dashboard");
    let html = state.dashboard_service.render_dashboard()?;
    html_response(html, accepts_brotli(&headers))
        .await
        .map_err(AppError::Response)
}
