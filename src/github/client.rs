use chrono::Utc;
use reqwest::{header, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::age::RepoAge;
use crate::models::repo::{Repo, RepoId, RepoInfo};

/// Public GitHub REST API v3 base.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Repository not found")]
    NotFound,

    #[error("{message}")]
    Fetch { status: StatusCode, message: String },

    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Error body GitHub sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Client for the two GitHub endpoints this service needs.
///
/// Built once at composition time in one of two modes: `direct` talks to the
/// GitHub API itself and may carry the access token; `proxied` talks to a
/// relay mounted under `/api/github` and never holds a token. The relay
/// mirrors the direct request/response shape, so both modes share one code
/// path against different bases.
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Direct-mode client for contexts that hold the secret. `token` is
    /// handed over once here and immutable afterwards; None means
    /// unauthenticated (rate-limited) requests.
    pub fn direct(base_url: impl Into<String>, token: Option<String>) -> Result<Self, GitHubError> {
        Self::build(base_url.into(), token)
    }

    /// Proxied-mode client for contexts without secret access, pointed at a
    /// `/api/github` relay. No token is ever attached.
    pub fn proxied(base_url: impl Into<String>) -> Result<Self, GitHubError> {
        Self::build(base_url.into(), None)
    }

    fn build(base_url: String, token: Option<String>) -> Result<Self, GitHubError> {
        // GitHub rejects requests without a User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, path: &str, accept: &'static str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, accept);
        if let Some(token) = &self.token {
            req = req.header(header::AUTHORIZATION, format!("token {}", token));
        }
        req
    }

    /// Raw metadata response, uninspected. The proxy route relays this
    /// verbatim; `fetch_repo` layers status handling on top.
    pub(crate) async fn repo_response(&self, id: &RepoId) -> Result<Response, reqwest::Error> {
        self.get(&format!("/repos/{}/{}", id.owner, id.repo), ACCEPT_JSON)
            .send()
            .await
    }

    /// Raw README response requesting `vnd.github.v3.raw` content.
    pub(crate) async fn readme_response(&self, id: &RepoId) -> Result<Response, reqwest::Error> {
        self.get(
            &format!("/repos/{}/{}/readme", id.owner, id.repo),
            ACCEPT_RAW,
        )
        .send()
        .await
    }

    /// Fetch repository metadata. 404 maps to `NotFound`; any other
    /// non-success status becomes `Fetch` carrying the body's `message` when
    /// one is present; transport failures propagate as `Network`.
    pub async fn fetch_repo(&self, id: &RepoId) -> Result<Repo, GitHubError> {
        let resp = self.repo_response(id).await?;
        let status = resp.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GitHubError::NotFound);
        }
        if !status.is_success() {
            let message = resp
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("Failed to fetch repository: {}", status));
            return Err(GitHubError::Fetch { status, message });
        }

        Ok(resp.json().await?)
    }

    /// Fetch metadata and derive the age breakdown at wall-clock now.
    pub async fn fetch_repo_info(&self, id: &RepoId) -> Result<RepoInfo, GitHubError> {
        let repo = self.fetch_repo(id).await?;
        let age = RepoAge::since(repo.created_at, Utc::now());
        Ok(RepoInfo { repo, age })
    }

    /// Fetch the README as raw text. Every failure, transport errors
    /// included, collapses to None: the README is supplementary and its
    /// absence must never sink a lookup.
    pub async fn fetch_readme(&self, id: &RepoId) -> Option<String> {
        let resp = match self.readme_response(id).await {
            Ok(resp) => resp,
            Err(err) => {
                debug!(repo = %id, error = %err, "README request failed");
                return None;
            }
        };

        if !resp.status().is_success() {
            debug!(repo = %id, status = %resp.status(), "No README available");
            return None;
        }

        match resp.text().await {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(repo = %id, error = %err, "README body read failed");
                None
            }
        }
    }
}
