//! Enriched league model: the wire league re-keyed for direct lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::types::{LeagueSettings, PredictionResult, User};
use crate::cli::types::{DayNumber, LeagueId, MatchId, TournamentId, UserId};

/// A league with its days, users and predictions indexed by key.
///
/// Day numbers may have gaps (day 2 is reserved by the service), so iterate
/// `days` rather than counting up from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    pub id: LeagueId,
    pub name: String,
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    pub finished: bool,
    pub days: BTreeMap<DayNumber, LeagueDay>,
    /// Total score so far, per user.
    pub user_scores: BTreeMap<UserId, i64>,
    pub max_score: i64,
    pub settings: LeagueSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDay {
    pub day: DayNumber,
    pub user_results: BTreeMap<UserId, UserDayResult>,
    pub max_day_score: i64,
    /// Highest cumulative score anyone could have reached by the end of this day.
    pub max_running_score: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDayResult {
    pub user: User,
    pub day_number: DayNumber,
    pub day_score: i64,
    pub running_score: i64,
    pub predictions: BTreeMap<MatchId, PredictionResult>,
}

impl League {
    pub fn day(&self, day: DayNumber) -> Option<&LeagueDay> {
        self.days.get(&day)
    }

    pub fn user_day(&self, day: DayNumber, user_id: &UserId) -> Option<&UserDayResult> {
        self.day(day)?.user_results.get(user_id)
    }

    /// The highest-numbered day present.
    pub fn latest_day(&self) -> Option<&LeagueDay> {
        self.days.values().next_back()
    }

    pub fn score_of(&self, user_id: &UserId) -> Option<i64> {
        self.user_scores.get(user_id).copied()
    }

    /// Users ordered by total score, highest first. Ties are broken by id.
    pub fn standings(&self) -> Vec<(&UserId, i64)> {
        let mut standings: Vec<_> = self
            .user_scores
            .iter()
            .map(|(user_id, score)| (user_id, *score))
            .collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        standings
    }

    /// Insert or replace a day under its own day number.
    pub fn insert_day(&mut self, day: LeagueDay) -> Option<LeagueDay> {
        self.days.insert(day.day, day)
    }
}

impl UserDayResult {
    pub fn prediction(&self, match_id: &MatchId) -> Option<&PredictionResult> {
        self.predictions.get(match_id)
    }

    pub fn correct_count(&self) -> usize {
        self.predictions.values().filter(|p| p.was_correct).count()
    }
}
