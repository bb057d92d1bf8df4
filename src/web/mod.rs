// Web server — Axum-based match endpoint for the lost-and-found frontend.
//
// One JSON route does the real work: POST /match takes the two raw
// descriptions and returns the similarity report. CORS is wide open because
// the mobile frontend calls this from a different origin. Everything here is
// boundary plumbing — input validation turns into 400s, internal failures
// into 500s, and the matching logic stays inside the Matcher.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::matching::Matcher;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
///
/// The Matcher is immutable after startup, so cloning the state only
/// bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<Matcher>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(matcher: Arc<Matcher>, port: u16, bind: &str) -> Result<()> {
    let state = AppState { matcher };
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Reclaim match endpoint listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Build the router. Public so integration tests can drive it with
/// `tower::ServiceExt::oneshot` instead of binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/match", post(handlers::matching::match_descriptions))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Deployment health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
