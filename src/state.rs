use crate::config::AppConfig;
use crate::github::client::GitHubClient;
use std::sync::Arc;

/// Shared handles for the request handlers. Everything here is immutable
/// after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub github: GitHubClient,
    pub start_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, github: GitHubClient) -> Self {
        Self {
            config: Arc::new(config),
            github,
            start_time: chrono::Utc::now(),
        }
    }
}
