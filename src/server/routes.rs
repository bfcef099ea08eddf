use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Number;
use std::fmt;

use crate::server::state::AppState;
use crate::server::ApiError;

/// A league id or week, sent as either a JSON string or number
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestParam {
    Number(Number),
    Text(String),
}

impl RequestParam {
    /// Empty strings and zero count as missing
    fn is_present(&self) -> bool {
        match self {
            RequestParam::Number(value) => value.as_f64().is_some_and(|n| n != 0.0),
            RequestParam::Text(value) => !value.is_empty(),
        }
    }
}

impl fmt::Display for RequestParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestParam::Number(value) => write!(f, "{}", value),
            RequestParam::Text(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchupRequest {
    pub league_id: Option<RequestParam>,
    pub week: Option<RequestParam>,
}

impl MatchupRequest {
    /// Returns (league_id, week) if both are present
    fn validate(self) -> Result<(String, String), ApiError> {
        match (self.league_id, self.week) {
            (Some(league_id), Some(week)) if league_id.is_present() && week.is_present() => {
                Ok((league_id.to_string(), week.to_string()))
            }
            _ => Err(ApiError::Validation),
        }
    }
}

fn parse_request(
    payload: Result<Json<MatchupRequest>, JsonRejection>,
) -> Result<(String, String), ApiError> {
    let Json(request) = payload.map_err(|_| ApiError::Validation)?;
    request.validate()
}

pub async fn home() -> &'static str {
    "API is working!"
}

pub async fn generate_results(
    State(state): State<AppState>,
    payload: Result<Json<MatchupRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (league_id, week) = parse_request(payload)?;
    let results = state.service.generate_results(&league_id, &week).await?;
    Ok(Json(results))
}

pub async fn get_league_matchups(
    State(state): State<AppState>,
    payload: Result<Json<MatchupRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let (league_id, week) = parse_request(payload)?;
    let results = state.service.league_matchups(&league_id, &week).await?;
    Ok(Json(results))
}
