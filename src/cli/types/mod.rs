//! Type-safe wrappers for prediction league identifiers and day numbers.

pub mod ids;
pub mod time;

pub use ids::{EventId, LeagueId, MatchId, TeamId, TournamentId, UserId};
pub use time::DayNumber;
