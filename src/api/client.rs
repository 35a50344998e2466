//! Access operations for the prediction league service.
//!
//! Each operation makes exactly one call through the configured
//! [`Transport`]. Failed calls go through [`unify`]; the two predictions
//! fetches first turn a 404 into `Ok(None)`. There are no retries.

use reqwest::Url;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::{
    api::{
        league::League,
        normalize::normalize,
        types::{
            ApiLeague, DayPredictions, Match, MatchResult, PlayoffPredictions, ReminderEntry,
            Team, User,
        },
    },
    cli::types::{DayNumber, LeagueId, UserId},
    core::{
        config::ClientConfig,
        http::{
            BasicAuth, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport,
            TransportFailure,
        },
    },
    error::unify,
    LeagueError, Result,
};

#[cfg(test)]
mod tests;

/// Client for the prediction league service.
///
/// Holds no mutable state, so one client (or clones of it) can serve any
/// number of concurrent calls.
#[derive(Debug, Clone)]
pub struct LeagueClient<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl LeagueClient<ReqwestTransport> {
    /// Client that talks HTTP through `reqwest`.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> LeagueClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a league and index its days, users and predictions.
    #[instrument(skip_all, fields(league_id = %league_id))]
    pub async fn get_league(&self, league_id: &LeagueId) -> Result<League> {
        let dto: ApiLeague = self.get_json(&["league", "id", league_id.as_str()]).await?;
        Ok(normalize(dto))
    }

    /// Matches scheduled for the league's current day.
    #[instrument(skip_all, fields(league_id = %league_id))]
    pub async fn get_current_day_matches(&self, league_id: &LeagueId) -> Result<Vec<Match>> {
        self.get_json(&["match", "leagueId", league_id.as_str()])
            .await
    }

    /// Settled results for one day of the league.
    #[instrument(skip_all, fields(league_id = %league_id, day = %day))]
    pub async fn get_results_from_day(
        &self,
        league_id: &LeagueId,
        day: DayNumber,
    ) -> Result<Vec<MatchResult>> {
        let day = day.to_string();
        self.get_json(&["match", "results", "leagueId", league_id.as_str(), "day", &day])
            .await
    }

    #[instrument(skip_all, fields(user_id = %predictions.user_id, league_id = %predictions.league_id))]
    pub async fn submit_day_predictions(&self, predictions: &DayPredictions) -> Result<()> {
        self.put_json(&["match", "predictions"], predictions).await
    }

    /// A user's day predictions, or `None` if they have not submitted any.
    #[instrument(skip_all, fields(user_id = %user_id, league_id = %league_id))]
    pub async fn get_day_predictions(
        &self,
        user_id: &UserId,
        league_id: &LeagueId,
    ) -> Result<Option<DayPredictions>> {
        self.get_optional_json(&[
            "match",
            "predictions",
            "userId",
            user_id.as_str(),
            "leagueId",
            league_id.as_str(),
        ])
        .await
    }

    #[instrument(skip_all, fields(user_id = %predictions.user_id, league_id = %predictions.league_id))]
    pub async fn submit_playoff_predictions(&self, predictions: &PlayoffPredictions) -> Result<()> {
        self.put_json(&["match", "playoffPredictions"], predictions)
            .await
    }

    /// A user's playoff bracket, or `None` if they have not submitted one.
    #[instrument(skip_all, fields(user_id = %user_id, league_id = %league_id))]
    pub async fn get_playoff_predictions(
        &self,
        user_id: &UserId,
        league_id: &LeagueId,
    ) -> Result<Option<PlayoffPredictions>> {
        self.get_optional_json(&[
            "match",
            "playoffPredictions",
            "userId",
            user_id.as_str(),
            "leagueId",
            league_id.as_str(),
        ])
        .await
    }

    /// Resolve an opaque session token to the user it belongs to.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        self.get_json(&["user", "token", token]).await
    }

    #[instrument(skip_all, fields(league_id = %league_id))]
    pub async fn get_league_teams(&self, league_id: &LeagueId) -> Result<Vec<Team>> {
        self.get_json(&["league", "teams", "leagueId", league_id.as_str()])
            .await
    }

    /// Users who still need a reminder before their next match day.
    ///
    /// Authenticates with basic auth (empty user name, configured password).
    #[instrument(skip_all)]
    pub async fn get_reminder_roster(&self) -> Result<Vec<ReminderEntry>> {
        let password = self
            .config
            .reminder_password
            .clone()
            .ok_or_else(|| LeagueError::config("reminder password is not configured"))?;

        let mut request = self.request(HttpMethod::Get, &["reminder", "users"], None)?;
        request.auth = Some(BasicAuth {
            username: String::new(),
            password,
        });

        let response = self.execute(request).await.map_err(unify)?;
        decode("/reminder/users", &response)
    }

    fn request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: Option<String>,
    ) -> Result<HttpRequest> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| LeagueError::config(format!("invalid base URL: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| LeagueError::config("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);

        Ok(HttpRequest {
            method,
            url: url.to_string(),
            body,
            auth: None,
        })
    }

    /// One round trip. Non-2xx responses become failures even when the
    /// transport resolved them.
    async fn execute(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportFailure> {
        let response = self.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(response.into_failure())
        }
    }

    async fn get_json<D: DeserializeOwned>(&self, segments: &[&str]) -> Result<D> {
        let request = self.request(HttpMethod::Get, segments, None)?;
        let response = self.execute(request).await.map_err(unify)?;
        decode(&display_path(segments), &response)
    }

    async fn get_optional_json<D: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<D>> {
        let request = self.request(HttpMethod::Get, segments, None)?;
        match self.execute(request).await {
            Ok(response) => decode(&display_path(segments), &response).map(Some),
            Err(failure) if failure.status() == Some(404) => {
                debug!("nothing submitted yet");
                Ok(None)
            }
            Err(failure) => Err(unify(failure)),
        }
    }

    async fn put_json<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<()> {
        let body = serde_json::to_string(body).map_err(LeagueError::Encode)?;
        let request = self.request(HttpMethod::Put, segments, Some(body))?;
        self.execute(request).await.map_err(unify)?;
        Ok(())
    }
}

fn display_path(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

fn decode<D: DeserializeOwned>(path: &str, response: &HttpResponse) -> Result<D> {
    debug!(path, bytes = response.data.len(), "decoding response");
    serde_json::from_str(&response.data).map_err(|source| LeagueError::Decode {
        path: path.to_string(),
        source,
    })
}
