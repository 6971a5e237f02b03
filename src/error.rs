use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::github::client::GitHubError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream failure: {0}")]
    BadGateway(String),
}

impl From<GitHubError> for AppError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::NotFound => AppError::NotFound("Repository not found".into()),
            GitHubError::Fetch { message, .. } => AppError::BadGateway(message),
            GitHubError::Network(e) => AppError::BadGateway(format!("GitHub request failed: {}", e)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
        };

        tracing::error!(status = %status, error = %message);

        let body = json!({
            "data": null,
            "error": {
                "code": status.as_u16(),
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}
