use std::env;

use crate::github::client::GITHUB_API_BASE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Base URL the outbound client targets. Overridable so tests and
    /// self-hosted GitHub instances can point elsewhere.
    pub github_api_base: String,
    /// Access token handed to the client constructor at startup. Optional:
    /// without it requests go out unauthenticated and rate-limited.
    pub github_token: Option<String>,
    pub log_level: String,
}

impl AppConfig {
    /// Read configuration from the environment. Called once at process start;
    /// the resulting values are immutable for the life of the process.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            github_api_base: env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| GITHUB_API_BASE.into()),
            github_token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }
}
