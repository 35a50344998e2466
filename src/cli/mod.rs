//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{DayNumber, LeagueId, UserId};

/// League selection shared between commands
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `PREDICTION_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,
}

/// User + league selection for predictions lookups
#[derive(Debug, Args)]
pub struct UserLeagueArgs {
    #[clap(flatten)]
    pub league: LeagueArgs,

    /// User ID (or set `PREDICTION_LEAGUE_USER_ID` env var).
    #[clap(long, short)]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Parser)]
#[clap(name = "prediction-league", about = "Prediction league service CLI")]
pub struct PredictionLeague {
    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,

    /// Log requests and responses to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show league standings, or one day's results per user.
    League {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Show per-user results for this day instead of the standings.
        #[clap(long, short)]
        day: Option<DayNumber>,
    },

    /// List the matches of the league's current day.
    Matches {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// List settled results for one day.
    Results {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Day number.
        #[clap(long, short)]
        day: DayNumber,
    },

    /// Show a user's day predictions.
    Predictions {
        #[clap(flatten)]
        target: UserLeagueArgs,
    },

    /// Show a user's playoff bracket predictions.
    PlayoffPredictions {
        #[clap(flatten)]
        target: UserLeagueArgs,
    },

    /// Submit day predictions from a JSON file.
    SubmitPredictions {
        /// Path to a JSON file holding the predictions bundle.
        #[clap(long, short)]
        file: PathBuf,
    },

    /// Submit playoff bracket predictions from a JSON file.
    SubmitPlayoffPredictions {
        /// Path to a JSON file holding the playoff predictions.
        #[clap(long, short)]
        file: PathBuf,
    },

    /// List the teams taking part in a league.
    Teams {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// List users due a reminder (needs `PREDICTION_LEAGUE_REMINDER_PASSWORD`).
    Reminders,

    /// Resolve a session token to its user.
    Auth {
        /// Opaque session token.
        #[clap(long)]
        token: String,
    },
}
