//! Command implementations for the prediction league CLI

pub mod league_data;
pub mod matches;
pub mod predictions;
pub mod roster;


use serde::Serialize;

use crate::{LeagueError, LeagueId, Result, UserId, LEAGUE_ID_ENV_VAR, USER_ID_ENV_VAR};

/// Use the explicit league ID, else `PREDICTION_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| LeagueError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Use the explicit user ID, else `PREDICTION_LEAGUE_USER_ID`.
pub fn resolve_user_id(user_id: Option<UserId>) -> Result<UserId> {
    user_id
        .or_else(|| {
            std::env::var(USER_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<UserId>().ok())
        })
        .ok_or_else(|| LeagueError::MissingUserId {
            env_var: USER_ID_ENV_VAR.to_string(),
        })
}

/// Print either pretty JSON or the given text lines.
pub(crate) fn emit<T: Serialize>(value: &T, as_json: bool, lines: Vec<String>) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(value)?); // tarpaulin::skip
    } else {
        for line in lines {
            println!("{line}"); // tarpaulin::skip
        }
    }
    Ok(())
}
