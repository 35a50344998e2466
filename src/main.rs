//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use prediction_league::{
    cli::{Commands, PredictionLeague},
    commands::{
        league_data::handle_league_data,
        matches::{handle_matches, handle_results},
        predictions::{
            handle_day_predictions, handle_playoff_predictions, handle_submit_playoff_predictions,
            handle_submit_predictions,
        },
        roster::{handle_auth, handle_reminders, handle_teams},
    },
    ClientConfig, LeagueClient,
};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "prediction_league=debug"
    } else {
        "prediction_league=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = PredictionLeague::parse();
    init_logging(app.verbose);

    let client = LeagueClient::new(ClientConfig::load()?)?;
    let as_json = app.json;

    match app.command {
        Commands::League { league, day } => {
            handle_league_data(&client, league.league_id, day, as_json).await?
        }
        Commands::Matches { league } => handle_matches(&client, league.league_id, as_json).await?,
        Commands::Results { league, day } => {
            handle_results(&client, league.league_id, day, as_json).await?
        }
        Commands::Predictions { target } => {
            handle_day_predictions(&client, target.user_id, target.league.league_id, as_json)
                .await?
        }
        Commands::PlayoffPredictions { target } => {
            handle_playoff_predictions(&client, target.user_id, target.league.league_id, as_json)
                .await?
        }
        Commands::SubmitPredictions { file } => handle_submit_predictions(&client, &file).await?,
        Commands::SubmitPlayoffPredictions { file } => {
            handle_submit_playoff_predictions(&client, &file).await?
        }
        Commands::Teams { league } => handle_teams(&client, league.league_id, as_json).await?,
        Commands::Reminders => handle_reminders(&client, as_json).await?,
        Commands::Auth { token } => handle_auth(&client, &token, as_json).await?,
    }

    Ok(())
}
