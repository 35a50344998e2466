//! Wire types exchanged with the prediction league service.
//!
//! Everything here mirrors the service's camelCase JSON. Fields named `date`
//! and `firstMatchDate` are materialized as `DateTime<Utc>` while decoding.

use crate::cli::types::{DayNumber, EventId, LeagueId, MatchId, TeamId, TournamentId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(
        rename = "logo_url",
        alias = "logoUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_url: Option<String>,
    pub country: Country,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

/// A league participant. Only `id` is guaranteed; the profile is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            avatar: None,
        }
    }

    /// Display name, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// A scheduled match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub team1: Team,
    pub team2: Team,
    pub date: DateTime<Utc>,
    /// Series format label, e.g. `"BO3"`.
    pub format: String,
    pub event_id: EventId,
    pub tournament_id: TournamentId,
    /// Importance rating.
    pub stars: u8,
    pub day: DayNumber,
}

impl Match {
    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        [&self.team1, &self.team2]
            .into_iter()
            .find(|team| &team.id == id)
    }
}

/// A settled match. Unsettled matches have no result representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub match_info: Match,
    pub team1_score: u32,
    pub team2_score: u32,
    pub winner: TeamId,
}

impl MatchResult {
    /// The winning team, or `None` when `winner` names neither side.
    pub fn winning_team(&self) -> Option<&Team> {
        self.match_info.team(&self.winner)
    }

    pub fn losing_team(&self) -> Option<&Team> {
        let winner = self.winning_team()?;
        if winner.id == self.match_info.team1.id {
            Some(&self.match_info.team2)
        } else {
            Some(&self.match_info.team1)
        }
    }

    /// True when `winner` is one of the two teams and also has the higher score.
    pub fn is_consistent(&self) -> bool {
        match self.winning_team() {
            Some(team) if team.id == self.match_info.team1.id => {
                self.team1_score > self.team2_score
            }
            Some(_) => self.team2_score > self.team1_score,
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub match_id: MatchId,
    pub choice_team_id: TeamId,
}

/// A user's picks for one league day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPredictions {
    pub user_id: UserId,
    pub league_id: LeagueId,
    pub date: DateTime<Utc>,
    pub predictions: Vec<Prediction>,
}

/// A user's playoff bracket, teams in predicted finishing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffPredictions {
    pub user_id: UserId,
    pub league_id: LeagueId,
    pub team_ids: Vec<TeamId>,
    pub date: DateTime<Utc>,
}

/// One user who still has to submit picks before the next match starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderEntry {
    pub user: User,
    pub league_id: LeagueId,
    #[serde(default)]
    pub league_name: String,
    pub first_match_date: DateTime<Utc>,
}

/// Per-league configuration flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSettings {
    #[serde(default)]
    pub allow_mid_day_matches: bool,
    #[serde(default)]
    pub playoff_predictions_enabled: bool,
    #[serde(default)]
    pub allow_default_predictions: bool,
}

/// A settled pick. Shared by the wire format and the enriched league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub match_id: MatchId,
    pub prediction_team_id: TeamId,
    pub was_correct: bool,
}

/// League as sent by the service: every collection is a plain array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLeague {
    pub id: LeagueId,
    #[serde(default)]
    pub name: String,
    pub tournament_id: TournamentId,
    #[serde(default)]
    pub tournament_name: String,
    pub finished: bool,
    pub league_days: Vec<ApiLeagueDay>,
    pub user_scores: Vec<ApiUserScore>,
    #[serde(default)]
    pub max_score: i64,
    #[serde(flatten)]
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUserScore {
    pub user_id: UserId,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLeagueDay {
    pub day: DayNumber,
    pub user_day_scores: Vec<ApiUserDayResult>,
    #[serde(default)]
    pub max_day_score: i64,
    #[serde(default)]
    pub max_running_score: i64,
}

/// One user's results for one day.
///
/// The service identifies the user either with a nested `user` object or a
/// flat `userId`; both decode to `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawUserDayResult")]
pub struct ApiUserDayResult {
    pub user: User,
    pub day_number: DayNumber,
    pub day_score: i64,
    pub running_score: i64,
    pub predictions: Vec<PredictionResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUserDayResult {
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    user_id: Option<UserId>,
    day_number: DayNumber,
    day_score: i64,
    #[serde(default)]
    running_score: i64,
    #[serde(default)]
    predictions: Vec<PredictionResult>,
}

impl TryFrom<RawUserDayResult> for ApiUserDayResult {
    type Error = String;

    fn try_from(raw: RawUserDayResult) -> Result<Self, Self::Error> {
        let user = match (raw.user, raw.user_id) {
            (Some(user), _) => user,
            (None, Some(id)) => User::new(id),
            (None, None) => return Err("user day result has neither `user` nor `userId`".into()),
        };
        Ok(Self {
            user,
            day_number: raw.day_number,
            day_score: raw.day_score,
            running_score: raw.running_score,
            predictions: raw.predictions,
        })
    }
}
