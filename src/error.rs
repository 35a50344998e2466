//! Error types for the prediction league client

use thiserror::Error;

use crate::cli::types::{DayNumber, LeagueId};
use crate::core::http::TransportFailure;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    /// Canonical error for a failed call that came back with a full response.
    ///
    /// Only the rendered message is stable: `"{code}: {phrase}\n{payload}"`.
    #[error("{0}")]
    Api(String),

    /// A failed call without usable response metadata, passed through as-is.
    #[error(transparent)]
    Transport(TransportFailure),

    #[error("Malformed response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("User ID not provided and {env_var} environment variable not set")]
    MissingUserId { env_var: String },

    #[error("League {league_id} has no day {day}")]
    UnknownDay { league_id: LeagueId, day: DayNumber },

    /// A predictions file that could not be read or parsed.
    #[error("{0:#}")]
    Draft(anyhow::Error),

    #[error("Invalid {kind}: identifiers must not be empty")]
    InvalidId { kind: &'static str },

    #[error("Failed to parse day number: {0}")]
    InvalidDay(#[from] std::num::ParseIntError),
}

impl LeagueError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Collapse a failed remote call into a single [`LeagueError`].
///
/// When the failure carries a status code, a status phrase and a payload, the
/// result is the canonical [`LeagueError::Api`] error rendered as
/// `"{code}: {phrase}\n{payload}"`. When any of the three is missing (for
/// example the request never reached the server) the original failure is
/// returned untouched inside [`LeagueError::Transport`].
///
/// No status code is treated specially here. Operations that accept a 404 as
/// "nothing there yet" must check for it before calling this.
pub fn unify(failure: TransportFailure) -> LeagueError {
    let message = failure.response.as_ref().and_then(|response| {
        let code = response.status?;
        let phrase = response.status_text.as_deref()?;
        let payload = response.data.as_deref()?;
        Some(format!("{code}: {phrase}\n{payload}"))
    });

    match message {
        Some(message) => LeagueError::Api(message),
        None => LeagueError::Transport(failure),
    }
}
