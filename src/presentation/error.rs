use crate::application::template_renderer::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("could not build response ({0})")]
    Response(StatusCode),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let status = match self {
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Response(status) => status,
        };
        (status, "internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_maps_to_500() {
        let err = AppError::from(RenderError::NotFound {
            template: "x.html".to_string(),
        });
        assert_eq!(err.to_string(), "template 'x.html' not found");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
