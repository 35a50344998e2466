//! Prediction League Client Library
//!
//! A Rust client for a fantasy-prediction league service: league standings,
//! match schedules and results, and user predictions.
//!
//! ## Features
//!
//! - **League Normalization**: Array-shaped league responses are re-keyed by day,
//!   user and match for direct lookup
//! - **Unified Errors**: Failed calls with a full response collapse into one
//!   `"{code}: {phrase}\n{payload}"` error; network failures pass through untouched
//! - **Explicit Absence**: Predictions that were never submitted come back as `None`
//! - **Pluggable Transport**: Swap the `reqwest` transport for your own
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prediction_league::{ClientConfig, DayNumber, LeagueClient, LeagueId};
//!
//! # async fn example() -> prediction_league::Result<()> {
//! let client = LeagueClient::new(ClientConfig::load()?)?;
//! let league = client.get_league(&LeagueId::new("L1")).await?;
//!
//! if let Some(day) = league.day(DayNumber::new(1)) {
//!     println!("{} users played day 1", day.user_results.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export PREDICTION_LEAGUE_API_URL=https://localhost:3846
//! export PREDICTION_LEAGUE_ID=L1
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod error;

// Re-export commonly used types
pub use api::{League, LeagueClient, LeagueDay, UserDayResult};
pub use cli::types::{DayNumber, EventId, LeagueId, MatchId, TeamId, TournamentId, UserId};
pub use crate::core::{ClientConfig, Transport, TransportFailure};
pub use error::{unify, LeagueError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "PREDICTION_LEAGUE_ID";
pub const USER_ID_ENV_VAR: &str = "PREDICTION_LEAGUE_USER_ID";
