pub mod health;
pub mod lookup;
pub mod proxy;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new().route("/health", get(health::health));

    // API routes
    let api_routes = Router::new()
        .route("/status", get(health::status))
        .route("/lookup", get(lookup::lookup_repo))
        // Token-injecting relays for clients without secret access
        .route("/github/repos/{owner}/{repo}", get(proxy::get_repo))
        .route(
            "/github/repos/{owner}/{repo}/readme",
            get(proxy::get_readme),
        );

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID
    let x_request_id = http::HeaderName::from_static("x-request-id");

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
