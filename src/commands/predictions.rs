//! Show and submit day and playoff predictions

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    api::{
        types::{DayPredictions, PlayoffPredictions, Prediction},
        LeagueClient,
    },
    LeagueError, LeagueId, Result, TeamId, Transport, UserId,
};

use super::{emit, resolve_league_id, resolve_user_id};

pub const NO_PREDICTIONS: &str = "no predictions submitted yet";

/// Day predictions as read from a file. `date` defaults to submission time.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPredictionsDraft {
    pub user_id: UserId,
    pub league_id: LeagueId,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub predictions: Vec<Prediction>,
}

impl DayPredictionsDraft {
    pub fn into_submission(self, now: DateTime<Utc>) -> DayPredictions {
        DayPredictions {
            user_id: self.user_id,
            league_id: self.league_id,
            date: self.date.unwrap_or(now),
            predictions: self.predictions,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffPredictionsDraft {
    pub user_id: UserId,
    pub league_id: LeagueId,
    pub team_ids: Vec<TeamId>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl PlayoffPredictionsDraft {
    pub fn into_submission(self, now: DateTime<Utc>) -> PlayoffPredictions {
        PlayoffPredictions {
            user_id: self.user_id,
            league_id: self.league_id,
            team_ids: self.team_ids,
            date: self.date.unwrap_or(now),
        }
    }
}

pub async fn handle_day_predictions<T: Transport>(
    client: &LeagueClient<T>,
    user_id: Option<UserId>,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<()> {
    let user_id = resolve_user_id(user_id)?;
    let league_id = resolve_league_id(league_id)?;

    match client.get_day_predictions(&user_id, &league_id).await? {
        Some(bundle) => {
            let lines = format_day_predictions(&bundle);
            emit(&bundle, as_json, lines)?;
        }
        None => println!("{NO_PREDICTIONS}"), // tarpaulin::skip
    }
    Ok(())
}

pub async fn handle_playoff_predictions<T: Transport>(
    client: &LeagueClient<T>,
    user_id: Option<UserId>,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<()> {
    let user_id = resolve_user_id(user_id)?;
    let league_id = resolve_league_id(league_id)?;

    match client.get_playoff_predictions(&user_id, &league_id).await? {
        Some(bracket) => {
            let lines = format_playoff_predictions(&bracket);
            emit(&bracket, as_json, lines)?;
        }
        None => println!("{NO_PREDICTIONS}"), // tarpaulin::skip
    }
    Ok(())
}

pub async fn handle_submit_predictions<T: Transport>(
    client: &LeagueClient<T>,
    file: &Path,
) -> Result<()> {
    let draft: DayPredictionsDraft = read_draft(file).map_err(LeagueError::Draft)?;
    let bundle = draft.into_submission(Utc::now());
    client.submit_day_predictions(&bundle).await?;
    println!(
        "Submitted {} predictions for {} in league {}",
        bundle.predictions.len(),
        bundle.user_id,
        bundle.league_id
    ); // tarpaulin::skip
    Ok(())
}

pub async fn handle_submit_playoff_predictions<T: Transport>(
    client: &LeagueClient<T>,
    file: &Path,
) -> Result<()> {
    let draft: PlayoffPredictionsDraft = read_draft(file).map_err(LeagueError::Draft)?;
    let bracket = draft.into_submission(Utc::now());
    client.submit_playoff_predictions(&bracket).await?;
    println!(
        "Submitted playoff bracket of {} teams for {} in league {}",
        bracket.team_ids.len(),
        bracket.user_id,
        bracket.league_id
    ); // tarpaulin::skip
    Ok(())
}

pub fn read_draft<D: DeserializeOwned>(file: &Path) -> anyhow::Result<D> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", file.display()))
}

pub fn format_day_predictions(bundle: &DayPredictions) -> Vec<String> {
    let mut lines = vec![format!(
        "{} in league {} ({})",
        bundle.user_id,
        bundle.league_id,
        bundle.date.format("%Y-%m-%d %H:%M")
    )];
    lines.extend(
        bundle
            .predictions
            .iter()
            .map(|p| format!("  {} -> {}", p.match_id, p.choice_team_id)),
    );
    lines
}

pub fn format_playoff_predictions(bracket: &PlayoffPredictions) -> Vec<String> {
    let mut lines = vec![format!(
        "{} in league {} ({})",
        bracket.user_id,
        bracket.league_id,
        bracket.date.format("%Y-%m-%d %H:%M")
    )];
    lines.extend(
        bracket
            .team_ids
            .iter()
            .enumerate()
            .map(|(i, team)| format!("  {}. {team}", i + 1)),
    );
    lines
}
