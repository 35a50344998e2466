//! League standings and per-day results

use crate::{
    api::{League, LeagueClient, LeagueDay},
    DayNumber, LeagueError, LeagueId, Result, Transport,
};

use super::{emit, resolve_league_id};

/// Handle the league command
pub async fn handle_league_data<T: Transport>(
    client: &LeagueClient<T>,
    league_id: Option<LeagueId>,
    day: Option<DayNumber>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let league = client.get_league(&league_id).await?;

    match day {
        Some(day) => {
            let league_day = league
                .day(day)
                .ok_or(LeagueError::UnknownDay { league_id, day })?;
            emit(league_day, as_json, format_day(league_day))
        }
        None => emit(&league, as_json, format_standings(&league)),
    }
}

/// Header line plus one ranked line per user.
pub fn format_standings(league: &League) -> Vec<String> {
    let status = if league.finished { "finished" } else { "in progress" };
    let mut lines = vec![format!(
        "{} ({}) - {} [{}], max score {}",
        league.name, league.id, league.tournament_name, status, league.max_score
    )];

    let mut rank = 0;
    let mut previous = None;
    for (position, (user_id, score)) in league.standings().into_iter().enumerate() {
        // Tied users share a rank.
        if previous != Some(score) {
            rank = position + 1;
            previous = Some(score);
        }
        lines.push(format!("{rank:>3}. {user_id:<20} {score:>5}"));
    }
    lines
}

/// One line per user: score for the day, running score and correct picks.
pub fn format_day(day: &LeagueDay) -> Vec<String> {
    let mut lines = vec![format!(
        "Day {} - max {} (running max {})",
        day.day, day.max_day_score, day.max_running_score
    )];
    for result in day.user_results.values() {
        lines.push(format!(
            "{:<20} {:>3} / {:>4}  {}/{} correct",
            result.user.display_name(),
            result.day_score,
            result.running_score,
            result.correct_count(),
            result.predictions.len()
        ));
    }
    lines
}
