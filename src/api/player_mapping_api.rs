use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str =
    "https://sleeperplayermapping-bbepc9crdbe8e8du.centralus-01.azurewebsites.net";
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

#[derive(Debug, Serialize)]
struct MapPlayerIdsRequest<'a> {
    player_ids: &'a [String],
}

/// Resolves player ids to display names through the player mapping service
#[derive(Debug, Clone)]
pub struct PlayerNameResolver {
    client: Client,
    endpoint: Url,
}

impl PlayerNameResolver {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut endpoint = Url::parse(base_url)
            .with_context(|| format!("Invalid player mapping base URL: {}", base_url))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Player mapping URL cannot be a base: {}", base_url))?
            .pop_if_empty()
            .push("map_player_ids");

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    /// Resolve a batch of ids with a single request.
    ///
    /// Returns one `(id, name)` pair per requested id, in request order. Ids the
    /// service leaves out map to "Unknown Player". If the request fails in any way
    /// the whole batch maps to "Unknown Player".
    pub async fn resolve(&self, player_ids: &[String]) -> Vec<(String, String)> {
        if player_ids.is_empty() {
            return Vec::new();
        }

        let names = match self.lookup(player_ids).await {
            Ok(names) => names,
            Err(e) => {
                let error = format!("{:#}", e);
                warn!(%error, count = player_ids.len(), "player lookup failed, using placeholders");
                HashMap::new()
            }
        };

        player_ids
            .iter()
            .map(|id| {
                let name = names
                    .get(id)
                    .and_then(Value::as_str)
                    .unwrap_or(UNKNOWN_PLAYER)
                    .to_string();
                (id.clone(), name)
            })
            .collect()
    }

    /// Raw id → name object. Values that aren't strings are treated as unresolved.
    async fn lookup(&self, player_ids: &[String]) -> Result<HashMap<String, Value>> {
        debug!(url = %self.endpoint, count = player_ids.len(), "resolving player names");

        let names = self
            .client
            .post(self.endpoint.clone())
            .json(&MapPlayerIdsRequest { player_ids })
            .send()
            .await
            .context("Failed to reach player mapping service")?
            .error_for_status()
            .context("Player mapping service returned error")?
            .json::<HashMap<String, Value>>()
            .await
            .context("Failed to parse player mapping response")?;

        Ok(names)
    }
}
