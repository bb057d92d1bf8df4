// POST /match — score a lost description against a found description.
//
// Request body: { "lost_desc": "...", "found_desc": "..." }
// Both fields are required and must be non-empty after trimming.
//
// 200 -> { similarity_score, preprocessed_lost, preprocessed_found }
// 400 -> { error } when either field is missing or blank
// 500 -> { error } when scoring fails internally

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::web::{api_error, AppState};

/// The two raw descriptions to compare. Fields are optional at the serde
/// level so a missing field produces a 400 with a useful message instead of
/// a generic body-rejection error.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub lost_desc: Option<String>,
    #[serde(default)]
    pub found_desc: Option<String>,
}

/// POST /match — compare the two descriptions and return a MatchReport.
pub async fn match_descriptions(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> impl IntoResponse {
    let lost = request.lost_desc.as_deref().unwrap_or("").trim();
    let found = request.found_desc.as_deref().unwrap_or("").trim();

    if lost.is_empty() || found.is_empty() {
        return api_error(
            StatusCode::BAD_REQUEST,
            "Both lost and found descriptions are required",
        );
    }

    match state.matcher.compare(lost, found) {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to score description pair");
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to score description pair",
            )
        }
    }
}
