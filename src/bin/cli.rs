use anyhow::{Context, Result};
use clap::Parser;
use sleeper_matchups::config::AppConfig;
use sleeper_matchups::MatchupService;
use tracing_subscriber::EnvFilter;

/// Print a week's matchup summaries for a league
#[derive(Parser)]
#[command(name = "cli")]
#[command(version)]
struct Cli {
    /// League id
    #[arg(long)]
    league_id: String,

    /// Week number
    #[arg(long)]
    week: u32,

    /// List every starter instead of scores and star performances
    #[arg(long)]
    players: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let service = MatchupService::from_config(&config)?;
    let week = cli.week.to_string();

    let summaries = if cli.players {
        service.league_matchups(&cli.league_id, &week).await
    } else {
        service.generate_results(&cli.league_id, &week).await
    }
    .context("Failed to fetch league data")?;

    println!("League {} - Week {}\n", cli.league_id, cli.week);
    if summaries.is_empty() {
        println!("No matchups found.");
    }
    for (i, summary) in summaries.iter().enumerate() {
        println!("{}. {}", i + 1, summary);
    }

    Ok(())
}
