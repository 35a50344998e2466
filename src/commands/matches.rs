//! Current-day matches and settled day results

use crate::{
    api::{
        types::{Match, MatchResult},
        LeagueClient,
    },
    DayNumber, LeagueId, Result, Transport,
};

use super::{emit, resolve_league_id};

pub async fn handle_matches<T: Transport>(
    client: &LeagueClient<T>,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let matches = client.get_current_day_matches(&league_id).await?;
    let lines = if matches.is_empty() {
        vec!["No matches scheduled".to_string()]
    } else {
        matches.iter().map(format_match).collect()
    };
    emit(&matches, as_json, lines)
}

pub async fn handle_results<T: Transport>(
    client: &LeagueClient<T>,
    league_id: Option<LeagueId>,
    day: DayNumber,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let results = client.get_results_from_day(&league_id, day).await?;
    let lines = if results.is_empty() {
        vec![format!("No results for day {day}")]
    } else {
        results.iter().map(format_result).collect()
    };
    emit(&results, as_json, lines)
}

pub fn format_match(m: &Match) -> String {
    format!(
        "{} {} vs {} ({}, {}*) {}",
        m.date.format("%Y-%m-%d %H:%M"),
        m.team1.name,
        m.team2.name,
        m.format,
        m.stars,
        m.id
    )
}

/// `"A 2-1 B, winner A"`, flagged when the winner and scores disagree.
pub fn format_result(result: &MatchResult) -> String {
    let m = &result.match_info;
    let winner = result
        .winning_team()
        .map(|team| team.name.as_str())
        .unwrap_or(result.winner.as_str());
    let mut line = format!(
        "{} {}-{} {}, winner {}",
        m.team1.name, result.team1_score, result.team2_score, m.team2.name, winner
    );
    if !result.is_consistent() {
        line.push_str(" (inconsistent)");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(winner: &str, team1_score: u32, team2_score: u32) -> MatchResult {
        serde_json::from_value(json!({
            "id": "m1",
            "team1": { "id": "t1", "name": "Alpha", "country": { "name": "Norway", "code": "NO" } },
            "team2": { "id": "t2", "name": "Beta", "country": { "name": "Sweden", "code": "SE" } },
            "date": "2024-05-01T18:00:00Z",
            "format": "BO3",
            "eventId": "e1",
            "tournamentId": "tour1",
            "stars": 2,
            "day": 1,
            "team1Score": team1_score,
            "team2Score": team2_score,
            "winner": winner
        }))
        .unwrap()
    }

    #[test]
    fn test_format_match() {
        let result = result("t1", 2, 1);
        assert_eq!(
            format_match(&result.match_info),
            "2024-05-01 18:00 Alpha vs Beta (BO3, 2*) m1"
        );
    }

    #[test]
    fn test_format_result_names_winner() {
        assert_eq!(format_result(&result("t2", 0, 2)), "Alpha 0-2 Beta, winner Beta");
    }

    #[test]
    fn test_format_result_flags_inconsistent_scores() {
        assert_eq!(
            format_result(&result("t1", 0, 2)),
            "Alpha 0-2 Beta, winner Alpha (inconsistent)"
        );
        assert_eq!(
            format_result(&result("t9", 2, 0)),
            "Alpha 2-0 Beta, winner t9 (inconsistent)"
        );
    }
}
