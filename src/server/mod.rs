//! HTTP endpoints.
//!
//! Axum router exposing the matchup summaries to the frontend.

pub mod routes;
pub mod state;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::api::league_api::UpstreamError;
pub use state::AppState;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. 'league_id' and 'week' are required.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    Validation,

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: INVALID_INPUT_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::Upstream(e) => {
                error!(error = %e, "league data fetch failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/generate_results", post(routes::generate_results))
        .route("/get_league_matchups", post(routes::get_league_matchups))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
