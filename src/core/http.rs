//! HTTP transport seam for the prediction league service.
//!
//! Requests and responses are plain data. [`LeagueClient`](crate::api::client::LeagueClient)
//! builds an [`HttpRequest`], hands it to a [`Transport`] and interprets what
//! comes back; nothing in the client touches the network directly.

use std::future::Future;

use reqwest::{header::CONTENT_TYPE, Client, Method};
use thiserror::Error;
use tracing::debug;

use crate::{core::config::ClientConfig, LeagueError, Result};

const USER_AGENT: &str = concat!("prediction-league/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
}

impl HttpMethod {
    fn as_reqwest(self) -> Method {
        match self {
            HttpMethod::Get => Method::GET,
            HttpMethod::Put => Method::PUT,
        }
    }
}

/// HTTP basic credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Serialized JSON body, sent with `content-type: application/json`.
    pub body: Option<String>,
    pub auth: Option<BasicAuth>,
}

/// A response that made it back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub data: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Re-express a non-2xx response the way a rejecting transport reports it.
    pub fn into_failure(self) -> TransportFailure {
        TransportFailure {
            message: format!("Request failed with status code {}", self.status),
            response: Some(FailureResponse {
                status: Some(self.status),
                status_text: Some(self.status_text),
                data: Some(self.data),
            }),
        }
    }
}

/// Whatever is known about a failed call's response. Each field is checked
/// separately because not every failure carries all three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureResponse {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub data: Option<String>,
}

/// A call that did not succeed.
///
/// `message` is the transport's own diagnostic. `response` is present only
/// when the server answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFailure {
    pub message: String,
    pub response: Option<FailureResponse>,
}

impl TransportFailure {
    /// A failure that never produced a response (connection refused, DNS, TLS).
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
    }

    pub fn with_response(message: impl Into<String>, response: FailureResponse) -> Self {
        Self {
            message: message.into(),
            response: Some(response),
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().and_then(|r| r.status)
    }
}

/// Executes requests against the remote service.
///
/// Implementations either resolve with the server's response or reject with
/// a [`TransportFailure`]. Rejecting non-2xx responses is allowed but not
/// required; the client checks the status of resolved responses too.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = std::result::Result<HttpResponse, TransportFailure>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
///
/// Rejects non-2xx responses with status, reason phrase and body attached,
/// and rejects network-level errors with no response at all.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(config.accepts_invalid_certs())
            .build()
            .map_err(|e| LeagueError::config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportFailure> {
        debug!(method = ?request.method, url = %request.url, "sending request");

        let mut builder = self
            .client
            .request(request.method.as_reqwest(), &request.url);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        if let Some(auth) = request.auth {
            builder = builder.basic_auth(auth.username, Some(auth.password));
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportFailure::network(error_chain(&e)))?;

        let status = response.status();
        // Statuses without a registered phrase still count as a full response.
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        debug!(status = status.as_u16(), "received response");

        match response.text().await {
            Ok(data) if status.is_success() => Ok(HttpResponse {
                status: status.as_u16(),
                status_text,
                data,
            }),
            Ok(data) => Err(TransportFailure::with_response(
                format!("Request failed with status code {}", status.as_u16()),
                FailureResponse {
                    status: Some(status.as_u16()),
                    status_text: Some(status_text),
                    data: Some(data),
                },
            )),
            // The body could not be read; keep what is known without a payload.
            Err(e) => Err(TransportFailure::with_response(
                error_chain(&e),
                FailureResponse {
                    status: Some(status.as_u16()),
                    status_text: Some(status_text),
                    data: None,
                },
            )),
        }
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
