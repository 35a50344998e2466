//! Client configuration: where the service lives and how to reach it.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use crate::{LeagueError, Result};


pub const API_URL_ENV_VAR: &str = "PREDICTION_LEAGUE_API_URL";
pub const INSECURE_ENV_VAR: &str = "PREDICTION_LEAGUE_INSECURE";
pub const REMINDER_PASSWORD_ENV_VAR: &str = "PREDICTION_LEAGUE_REMINDER_PASSWORD";

/// Local development server address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://localhost:3846";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Settings injected into [`LeagueClient`](crate::api::client::LeagueClient).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Scheme, host and optional port (and path prefix) of the service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Accept self-signed certificates. Always on for [`DEFAULT_BASE_URL`],
    /// whose development server uses one.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Password for the reminder roster endpoint (basic auth, empty user).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_password: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field(
                "reminder_password",
                &self.reminder_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            accept_invalid_certs: false,
            reminder_password: None,
        }
    }
}

impl ClientConfig {
    /// Configuration for an explicit base URL, validated and without a trailing `/`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut config = Self {
            base_url: base_url.to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_reminder_password(mut self, password: impl Into<String>) -> Self {
        self.reminder_password = Some(password.into());
        self
    }

    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Whether TLS certificate checks are skipped for this configuration.
    pub fn accepts_invalid_certs(&self) -> bool {
        self.accept_invalid_certs || self.base_url == DEFAULT_BASE_URL
    }

    /// Load the config file at [`config_path`] (if any) and apply environment overrides.
    ///
    /// # Environment Variables
    /// - `PREDICTION_LEAGUE_API_URL` - Override the base URL
    /// - `PREDICTION_LEAGUE_INSECURE` - `1`/`true` to accept invalid certificates
    /// - `PREDICTION_LEAGUE_REMINDER_PASSWORD` - Reminder roster password
    pub fn load() -> Result<Self> {
        let mut config = Self::read_file(&config_path())?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(API_URL_ENV_VAR) {
            self.base_url = base_url;
        }

        if let Ok(insecure) = std::env::var(INSECURE_ENV_VAR) {
            self.accept_invalid_certs = matches!(
                insecure.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }

        if let Ok(password) = std::env::var(REMINDER_PASSWORD_ENV_VAR) {
            self.reminder_password = Some(password);
        }
    }

    /// Check the base URL and normalize away any trailing `/`.
    pub fn validate(&mut self) -> Result<()> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(LeagueError::config("base URL must not be empty"));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| LeagueError::config(format!("invalid base URL {trimmed:?}: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LeagueError::config(format!(
                "base URL must use http or https, got {:?}",
                url.scheme()
            )));
        }

        self.base_url = trimmed.to_string();
        Ok(())
    }
}

/// Path: ~/.config/prediction-league/config.json
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("prediction-league").join("config.json")
}
