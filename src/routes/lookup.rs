use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::github::parse::parse_repo_input;
use crate::models::repo::LookupQuery;
use crate::state::AppState;

/// GET /api/lookup?q=<free-form input>
///
/// The whole pipeline in one request: parse the input, fetch metadata,
/// derive the age, try for a README. Metadata failures surface as errors;
/// a missing README is just null in the payload.
pub async fn lookup_repo(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<Value>, AppError> {
    let id = parse_repo_input(&query.q).ok_or_else(|| {
        AppError::BadRequest("Enter a repository as \"owner/repo\" or a GitHub URL".into())
    })?;

    let info = state.github.fetch_repo_info(&id).await?;
    let readme = state.github.fetch_readme(&id).await;

    tracing::info!(
        repo = %id,
        stars = info.repo.stargazers_count,
        total_days = info.age.total_days,
        has_readme = readme.is_some(),
        "Repository lookup"
    );

    Ok(Json(json!({
        "data": {
            "repo": info.repo,
            "age": info.age,
            "age_text": info.age.to_string(),
            "readme": readme,
        },
        "error": null
    })))
}
