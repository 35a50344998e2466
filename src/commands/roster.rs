//! Teams, reminder roster and token lookup

use crate::{
    api::{
        types::{ReminderEntry, Team},
        LeagueClient,
    },
    LeagueId, Result, Transport,
};

use super::{emit, resolve_league_id};

pub async fn handle_teams<T: Transport>(
    client: &LeagueClient<T>,
    league_id: Option<LeagueId>,
    as_json: bool,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let teams = client.get_league_teams(&league_id).await?;
    let lines = teams.iter().map(format_team).collect();
    emit(&teams, as_json, lines)
}

pub async fn handle_reminders<T: Transport>(client: &LeagueClient<T>, as_json: bool) -> Result<()> {
    let entries = client.get_reminder_roster().await?;
    let lines = if entries.is_empty() {
        vec!["Nobody needs a reminder".to_string()]
    } else {
        entries.iter().map(format_reminder).collect()
    };
    emit(&entries, as_json, lines)
}

pub async fn handle_auth<T: Transport>(
    client: &LeagueClient<T>,
    token: &str,
    as_json: bool,
) -> Result<()> {
    let user = client.authenticate(token).await?;
    let line = format!("{} ({})", user.display_name(), user.id);
    emit(&user, as_json, vec![line])
}

pub fn format_team(team: &Team) -> String {
    match team.rank {
        Some(rank) => format!("#{rank:<3} {} [{}] {}", team.name, team.country.code, team.id),
        None => format!("     {} [{}] {}", team.name, team.country.code, team.id),
    }
}

pub fn format_reminder(entry: &ReminderEntry) -> String {
    format!(
        "{} - {} ({}) starts {}",
        entry.user.display_name(),
        entry.league_name,
        entry.league_id,
        entry.first_match_date.format("%Y-%m-%d %H:%M")
    )
}
