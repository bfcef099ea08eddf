pub mod matchup_aggregator;
pub mod result_formatter;
pub mod team_directory;
