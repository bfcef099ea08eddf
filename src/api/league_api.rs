use crate::models::{MatchupEntry, Roster, User};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Failure fetching league data. Never retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Invalid league API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("League API returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("Unexpected response shape from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for the league API (rosters, users and weekly matchups)
#[derive(Debug, Clone)]
pub struct LeagueApiClient {
    client: Client,
    base_url: Url,
}

impl LeagueApiClient {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| UpstreamError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub async fn fetch_rosters(&self, league_id: &str) -> Result<Vec<Roster>, UpstreamError> {
        self.get_json(&["league", league_id, "rosters"]).await
    }

    pub async fn fetch_users(&self, league_id: &str) -> Result<Vec<User>, UpstreamError> {
        self.get_json(&["league", league_id, "users"]).await
    }

    pub async fn fetch_matchups(
        &self,
        league_id: &str,
        week: &str,
    ) -> Result<Vec<MatchupEntry>, UpstreamError> {
        self.get_json(&["league", league_id, "matchups", week]).await
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, UpstreamError> {
        let url = self.endpoint(segments);
        debug!(%url, "fetching league data");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| UpstreamError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| UpstreamError::Http {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| UpstreamError::Parse {
            url: url.to_string(),
            source,
        })
    }
}
