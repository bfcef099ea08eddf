pub mod api;
pub mod config;
pub mod models;
pub mod server;
pub mod utils;

pub use api::*;
pub use models::*;
pub use utils::*;

use anyhow::Result;
use api::league_api::{LeagueApiClient, UpstreamError};
use api::player_mapping_api::PlayerNameResolver;
use config::AppConfig;
use tracing::info;
use utils::matchup_aggregator::aggregate_matchups;
use utils::result_formatter::ResultFormatter;
use utils::team_directory::TeamDirectory;

/// Fetches a league's week, pairs the teams and renders the summaries
#[derive(Debug, Clone)]
pub struct MatchupService {
    league_api: LeagueApiClient,
    resolver: PlayerNameResolver,
}

impl MatchupService {
    pub fn new(league_api: LeagueApiClient, resolver: PlayerNameResolver) -> Self {
        Self {
            league_api,
            resolver,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            LeagueApiClient::new(&config.league_api_base_url)?,
            PlayerNameResolver::new(&config.player_mapping_base_url)?,
        ))
    }

    /// Scored summaries, one per matchup
    pub async fn generate_results(
        &self,
        league_id: &str,
        week: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let matchups = self.fetch_matchups(league_id, week).await?;
        let formatter = ResultFormatter::new(&self.resolver);

        let mut results = Vec::with_capacity(matchups.len());
        for matchup in &matchups {
            results.push(formatter.scored_summary(matchup).await);
        }
        Ok(results)
    }

    /// Player-only summaries, one per matchup
    pub async fn league_matchups(
        &self,
        league_id: &str,
        week: &str,
    ) -> Result<Vec<String>, UpstreamError> {
        let matchups = self.fetch_matchups(league_id, week).await?;
        let formatter = ResultFormatter::new(&self.resolver);

        let mut results = Vec::with_capacity(matchups.len());
        for matchup in &matchups {
            results.push(formatter.player_summary(matchup).await);
        }
        Ok(results)
    }

    async fn fetch_matchups(
        &self,
        league_id: &str,
        week: &str,
    ) -> Result<Vec<Matchup>, UpstreamError> {
        let rosters = self.league_api.fetch_rosters(league_id).await?;
        let users = self.league_api.fetch_users(league_id).await?;
        let directory = TeamDirectory::build(&rosters, &users);
        let entries = self.league_api.fetch_matchups(league_id, week).await?;

        let matchups = aggregate_matchups(&entries, &directory);
        info!(
            league_id,
            week,
            teams = directory.len(),
            entries = entries.len(),
            matchups = matchups.len(),
            "aggregated league matchups"
        );
        Ok(matchups)
    }
}
