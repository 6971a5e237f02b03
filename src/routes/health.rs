use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn status(State(state): State<AppState>) -> Json<Value> {
    let uptime = chrono::Utc::now()
        .signed_duration_since(state.start_time)
        .num_seconds();

    Json(json!({
        "data": {
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_seconds": uptime,
            "github_api_base": state.config.github_api_base,
            "authenticated": state.config.github_token.is_some(),
        },
        "error": null
    }))
}
