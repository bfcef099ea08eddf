pub mod league_api;
pub mod player_mapping_api;
