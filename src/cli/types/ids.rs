//! ID types for the prediction league service.

use crate::error::{LeagueError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares an opaque string identifier.
///
/// Every identifier the service hands out is an opaque string; wrapping each
/// kind in its own type keeps a `UserId` from being passed where a
/// `MatchId` is expected.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = LeagueError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(LeagueError::InvalidId {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// Type-safe wrapper for league identifiers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prediction_league::LeagueId;
    ///
    /// let league_id: LeagueId = "L1".parse().unwrap();
    /// assert_eq!(league_id.as_str(), "L1");
    /// assert_eq!(league_id.to_string(), "L1");
    /// ```
    LeagueId
}

string_id! {
    /// Type-safe wrapper for user identifiers
    UserId
}

string_id! {
    /// Type-safe wrapper for match identifiers
    MatchId
}

string_id! {
    TeamId
}

string_id! {
    TournamentId
}

string_id! {
    EventId
}
