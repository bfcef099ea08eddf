//! Configuration loaded from the environment (and `.env`).

use crate::api::{league_api, player_mapping_api};
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the league data API
    pub league_api_base_url: String,
    /// Base URL of the player mapping service, `/map_player_ids` is appended
    pub player_mapping_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            league_api_base_url: league_api::DEFAULT_BASE_URL.to_string(),
            player_mapping_base_url: player_mapping_api::DEFAULT_BASE_URL.to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => defaults.port,
        };

        let config = Self {
            league_api_base_url: lookup("LEAGUE_API_BASE_URL")
                .unwrap_or(defaults.league_api_base_url),
            player_mapping_base_url: lookup("PLAYER_MAPPING_BASE_URL")
                .unwrap_or(defaults.player_mapping_base_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_url("LEAGUE_API_BASE_URL", &self.league_api_base_url)?;
        validate_url("PLAYER_MAPPING_BASE_URL", &self.player_mapping_base_url)?;

        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "Server port must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_url(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let valid = Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        })
    }
}
