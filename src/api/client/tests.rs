//! Unit tests for access operations against a scripted transport

use super::*;
use crate::core::http::FailureResponse;
use crate::api::types::Prediction;
use crate::cli::types::{MatchId, TeamId};
use chrono::Utc;
use serde_json::json;
use std::sync::Mutex;

type Reply = std::result::Result<HttpResponse, TransportFailure>;

/// Transport that answers every request with the same reply and records
/// what it was asked to send.
struct StubTransport {
    reply: Reply,
    sent: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    fn replying(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn ok(data: serde_json::Value) -> Self {
        Self::replying(Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            data: data.to_string(),
        }))
    }

    fn rejecting(status: u16, status_text: &str, data: &str) -> Self {
        Self::replying(Err(TransportFailure::with_response(
            format!("Request failed with status code {status}"),
            FailureResponse {
                status: Some(status),
                status_text: Some(status_text.to_string()),
                data: Some(data.to_string()),
            },
        )))
    }

    fn last_request(&self) -> HttpRequest {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }

    fn request_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Reply {
        self.sent.lock().unwrap().push(request);
        self.reply.clone()
    }
}

fn client(transport: StubTransport) -> LeagueClient<StubTransport> {
    LeagueClient::with_transport(ClientConfig::new("https://league.test").unwrap(), transport)
}

fn league_id() -> LeagueId {
    LeagueId::new("L1")
}

fn user_id() -> UserId {
    UserId::new("u1")
}

fn day_predictions() -> DayPredictions {
    DayPredictions {
        user_id: user_id(),
        league_id: league_id(),
        date: Utc::now(),
        predictions: vec![Prediction {
            match_id: MatchId::new("m1"),
            choice_team_id: TeamId::new("t1"),
        }],
    }
}

fn team(id: &str) -> serde_json::Value {
    json!({ "id": id, "name": id.to_uppercase(), "country": { "name": "Sweden", "code": "SE" } })
}

#[cfg(test)]
mod request_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_league_normalizes() {
        let stub = StubTransport::ok(json!({
            "id": "L1",
            "tournamentId": "tour1",
            "finished": false,
            "leagueDays": [
                { "day": 1, "userDayScores": [
                    { "userId": "u1", "dayNumber": 1, "dayScore": 1, "predictions": [] }
                ] },
                { "day": 3, "userDayScores": [] }
            ],
            "userScores": [{ "userId": "u1", "score": 1 }]
        }));
        let client = client(stub);

        let league = client.get_league(&league_id()).await.unwrap();

        assert_eq!(league.days.len(), 2);
        assert!(league.day(DayNumber::new(2)).is_none());
        assert!(league.user_day(DayNumber::new(1), &user_id()).is_some());

        let request = client.transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://league.test/league/id/L1");
        assert!(request.body.is_none());
        assert!(request.auth.is_none());
    }

    #[tokio::test]
    async fn test_endpoint_paths() {
        let client = client(StubTransport::ok(json!([])));

        client.get_current_day_matches(&league_id()).await.unwrap();
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/match/leagueId/L1"
        );

        client
            .get_results_from_day(&league_id(), DayNumber::new(4))
            .await
            .unwrap();
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/match/results/leagueId/L1/day/4"
        );

        client.get_league_teams(&league_id()).await.unwrap();
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/league/teams/leagueId/L1"
        );

        assert_eq!(client.transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_identifiers_are_percent_encoded() {
        let client = client(StubTransport::ok(json!([])));
        client
            .get_current_day_matches(&LeagueId::new("a/b c"))
            .await
            .unwrap();
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/match/leagueId/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_base_url_path_prefix_is_kept() {
        let config = ClientConfig::new("https://league.test/api/").unwrap();
        let client = LeagueClient::with_transport(config, StubTransport::ok(json!([])));
        client.get_league_teams(&league_id()).await.unwrap();
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/api/league/teams/leagueId/L1"
        );
    }

    #[tokio::test]
    async fn test_submit_day_predictions_success() {
        let stub = StubTransport::replying(Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            data: String::new(),
        }));
        let client = client(stub);
        let predictions = day_predictions();

        let result = client.submit_day_predictions(&predictions).await;
        assert!(result.is_ok());

        let request = client.transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://league.test/match/predictions");
        let body: DayPredictions = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, predictions);
    }

    #[tokio::test]
    async fn test_submit_playoff_predictions_body() {
        let client = client(StubTransport::ok(json!(null)));
        let predictions = PlayoffPredictions {
            user_id: user_id(),
            league_id: league_id(),
            team_ids: vec![TeamId::new("t2"), TeamId::new("t1")],
            date: Utc::now(),
        };

        client.submit_playoff_predictions(&predictions).await.unwrap();

        let request = client.transport.last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://league.test/match/playoffPredictions");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["teamIds"], json!(["t2", "t1"]));
    }

    #[tokio::test]
    async fn test_get_day_predictions_found() {
        let client = client(StubTransport::ok(json!({
            "userId": "u1",
            "leagueId": "L1",
            "date": "2024-05-04T12:00:00Z",
            "predictions": [{ "matchId": "m1", "choiceTeamId": "t1" }]
        })));

        let found = client
            .get_day_predictions(&user_id(), &league_id())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.predictions.len(), 1);
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/match/predictions/userId/u1/leagueId/L1"
        );
    }

    #[tokio::test]
    async fn test_authenticate_returns_user() {
        let client = client(StubTransport::ok(json!({ "id": "u1", "name": "Ana" })));
        let user = client.authenticate("tok-123").await.unwrap();
        assert_eq!(user.id, user_id());
        assert_eq!(
            client.transport.last_request().url,
            "https://league.test/user/token/tok-123"
        );
    }

    #[tokio::test]
    async fn test_get_league_teams_decodes() {
        let client = client(StubTransport::ok(json!([team("t1"), team("t2")])));
        let teams = client.get_league_teams(&league_id()).await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].name, "T2");
    }

    #[tokio::test]
    async fn test_reminder_roster_uses_basic_auth() {
        let config = ClientConfig::new("https://league.test")
            .unwrap()
            .with_reminder_password("s3cret");
        let client = LeagueClient::with_transport(
            config,
            StubTransport::ok(json!([{
                "user": { "id": "u1" },
                "leagueId": "L1",
                "leagueName": "Office",
                "firstMatchDate": "2024-05-05T08:00:00Z"
            }])),
        );

        let roster = client.get_reminder_roster().await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].league_name, "Office");

        let request = client.transport.last_request();
        assert_eq!(request.url, "https://league.test/reminder/users");
        let auth = request.auth.unwrap();
        assert_eq!(auth.username, "");
        assert_eq!(auth.password, "s3cret");
    }

    #[tokio::test]
    async fn test_reminder_roster_without_password_sends_nothing() {
        let client = client(StubTransport::ok(json!([])));
        let err = client.get_reminder_roster().await.unwrap_err();
        assert!(matches!(err, LeagueError::Config { .. }));
        assert_eq!(client.transport.request_count(), 0);
    }
}

#[cfg(test)]
mod failure_tests {
    use super::*;

    #[tokio::test]
    async fn test_day_predictions_404_is_absence() {
        let client = client(StubTransport::rejecting(404, "Not Found", "no predictions"));
        let result = client.get_day_predictions(&user_id(), &league_id()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_playoff_predictions_404_is_absence() {
        let client = client(StubTransport::rejecting(404, "Not Found", "no predictions"));
        let result = client.get_playoff_predictions(&user_id(), &league_id()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_resolved_404_is_absence_too() {
        let client = client(StubTransport::replying(Ok(HttpResponse {
            status: 404,
            status_text: "Not Found".to_string(),
            data: "no predictions".to_string(),
        })));
        let result = client.get_day_predictions(&user_id(), &league_id()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_404_elsewhere_is_an_error() {
        let client = client(StubTransport::rejecting(404, "Not Found", "no such league"));
        let err = client.get_league(&league_id()).await.unwrap_err();
        assert_eq!(err.to_string(), "404: Not Found\nno such league");
    }

    #[tokio::test]
    async fn test_server_error_is_unified() {
        let client = client(StubTransport::rejecting(500, "Internal Server Error", "boom"));
        let err = client.get_current_day_matches(&league_id()).await.unwrap_err();

        assert!(matches!(err, LeagueError::Api(_)));
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
        assert!(message.contains("boom"));
    }

    #[tokio::test]
    async fn test_server_error_on_predictions_fetch_is_unified() {
        let client = client(StubTransport::rejecting(500, "Internal Server Error", "boom"));
        let err = client
            .get_day_predictions(&user_id(), &league_id())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "500: Internal Server Error\nboom");
    }

    #[tokio::test]
    async fn test_resolved_non_success_is_unified() {
        let client = client(StubTransport::replying(Ok(HttpResponse {
            status: 400,
            status_text: "Bad Request".to_string(),
            data: "day already started".to_string(),
        })));
        let err = client
            .submit_day_predictions(&day_predictions())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "400: Bad Request\nday already started");
    }

    #[tokio::test]
    async fn test_network_failure_passes_through() {
        let failure = TransportFailure::network("network down");
        let client = client(StubTransport::replying(Err(failure.clone())));

        let err = client.get_league(&league_id()).await.unwrap_err();
        match err {
            LeagueError::Transport(inner) => assert_eq!(inner, failure),
            other => panic!("Expected Transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_network_failure_on_predictions_fetch_passes_through() {
        let client = client(StubTransport::replying(Err(TransportFailure::network(
            "network down",
        ))));
        let err = client
            .get_playoff_predictions(&user_id(), &league_id())
            .await
            .unwrap_err();
        assert!(matches!(err, LeagueError::Transport(_)));
        assert_eq!(err.to_string(), "network down");
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let client = client(StubTransport::replying(Ok(HttpResponse {
            status: 200,
            status_text: "OK".to_string(),
            data: "<html>oops</html>".to_string(),
        })));

        let err = client.get_league(&league_id()).await.unwrap_err();
        match err {
            LeagueError::Decode { path, .. } => assert_eq!(path, "/league/id/L1"),
            other => panic!("Expected Decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_single_attempt_per_call() {
        let client = client(StubTransport::rejecting(503, "Service Unavailable", "later"));
        let _ = client.get_league(&league_id()).await;
        assert_eq!(client.transport.request_count(), 1);
    }
}
