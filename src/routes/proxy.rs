use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::repo::RepoId;
use crate::state::AppState;

/// GET /api/github/repos/{owner}/{repo}
///
/// Forwards to GitHub with the server's token attached and relays status,
/// content type, and body verbatim, success or not. Keeping the upstream
/// error body intact means proxied clients see exactly what a direct client
/// would, GitHub's own "message" field included.
pub async fn get_repo(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    let id = RepoId::new(owner, repo);

    let resp = match state.github.repo_response(&id).await {
        Ok(resp) => resp,
        Err(err) => return upstream_unreachable(&id, err),
    };

    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();

    match resp.bytes().await {
        Ok(body) => {
            tracing::debug!(repo = %id, status = %status, "Relayed repository metadata");
            let mut response = (status, body).into_response();
            if let Some(ct) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, ct);
            }
            response
        }
        Err(err) => upstream_unreachable(&id, err),
    }
}

/// GET /api/github/repos/{owner}/{repo}/readme
///
/// Relays the raw README text. Any upstream failure relays the status with
/// an empty body; the client side treats that as "no README".
pub async fn get_readme(
    State(state): State<AppState>,
    Path((owner, repo)): Path<(String, String)>,
) -> Response {
    let id = RepoId::new(owner, repo);

    let resp = match state.github.readme_response(&id).await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::error!(repo = %id, error = %err, "GitHub unreachable");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = resp.status();
    if !status.is_success() {
        tracing::debug!(repo = %id, status = %status, "No README to relay");
        return status.into_response();
    }

    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();

    match resp.bytes().await {
        Ok(body) => {
            let mut response = (status, body).into_response();
            if let Some(ct) = content_type {
                response.headers_mut().insert(header::CONTENT_TYPE, ct);
            }
            response
        }
        Err(err) => {
            tracing::error!(repo = %id, error = %err, "README relay failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

fn upstream_unreachable(id: &RepoId, err: reqwest::Error) -> Response {
    tracing::error!(repo = %id, error = %err, "GitHub unreachable");
    (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "message": "Failed to reach GitHub" })),
    )
        .into_response()
}
