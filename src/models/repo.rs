use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::age::RepoAge;

/// The owner/name pair addressing a repository on GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Repository metadata as the GitHub API reports it. Parsed straight off the
/// response; unknown fields are dropped and nothing is mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Null for repositories that have never been pushed to.
    pub pushed_at: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub default_branch: String,
    pub owner: RepoOwner,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoOwner {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

/// Snapshot of a repository plus its derived age, built fresh per lookup and
/// discarded afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RepoInfo {
    pub repo: Repo,
    pub age: RepoAge,
}

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub q: String,
}
