use std::collections::BTreeMap;
use tracing::trace;

use crate::api::league::{League, LeagueDay, UserDayResult};
use crate::api::types::{ApiLeague, ApiLeagueDay, ApiUserDayResult, ApiUserScore};


/// Re-key a sequence into a map, converting each item on the way.
///
/// Later items overwrite earlier ones with the same key.
pub fn index_by<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key: impl Fn(&T) -> K,
    convert: impl Fn(T) -> V,
) -> BTreeMap<K, V>
where
    K: Ord,
{
    let mut idx = BTreeMap::new();
    for item in items {
        idx.insert(key(&item), convert(item));
    }
    idx
}

/// Turn the service's array-shaped league into the keyed [`League`].
///
/// Days are keyed by `day`, users by their id and predictions by `matchId`.
/// Input is trusted: nothing is validated beyond what decoding already did.
pub fn normalize(league: ApiLeague) -> League {
    trace!(
        league = %league.id,
        days = league.league_days.len(),
        users = league.user_scores.len(),
        "normalizing league"
    );

    League {
        id: league.id,
        name: league.name,
        tournament_id: league.tournament_id,
        tournament_name: league.tournament_name,
        finished: league.finished,
        days: index_by(league.league_days, |d| d.day, normalize_day),
        user_scores: index_by(league.user_scores, |s| s.user_id.clone(), |s| s.score),
        max_score: league.max_score,
        settings: league.settings,
    }
}

fn normalize_day(day: ApiLeagueDay) -> LeagueDay {
    LeagueDay {
        day: day.day,
        user_results: index_by(day.user_day_scores, |r| r.user.id.clone(), normalize_user_day),
        max_day_score: day.max_day_score,
        max_running_score: day.max_running_score,
    }
}

fn normalize_user_day(result: ApiUserDayResult) -> UserDayResult {
    UserDayResult {
        user: result.user,
        day_number: result.day_number,
        day_score: result.day_score,
        running_score: result.running_score,
        predictions: index_by(result.predictions, |p| p.match_id.clone(), |p| p),
    }
}

impl League {
    /// Flatten back to the service's array shape, in key order.
    ///
    /// For any league produced by [`normalize`],
    /// `normalize(league.clone().into_dto()) == league`.
    pub fn into_dto(self) -> ApiLeague {
        ApiLeague {
            id: self.id,
            name: self.name,
            tournament_id: self.tournament_id,
            tournament_name: self.tournament_name,
            finished: self.finished,
            league_days: self.days.into_values().map(LeagueDay::into_dto).collect(),
            user_scores: self
                .user_scores
                .into_iter()
                .map(|(user_id, score)| ApiUserScore { user_id, score })
                .collect(),
            max_score: self.max_score,
            settings: self.settings,
        }
    }
}

impl LeagueDay {
    fn into_dto(self) -> ApiLeagueDay {
        ApiLeagueDay {
            day: self.day,
            user_day_scores: self
                .user_results
                .into_values()
                .map(|r| ApiUserDayResult {
                    user: r.user,
                    day_number: r.day_number,
                    day_score: r.day_score,
                    running_score: r.running_score,
                    predictions: r.predictions.into_values().collect(),
                })
                .collect(),
            max_day_score: self.max_day_score,
            max_running_score: self.max_running_score,
        }
    }
}
