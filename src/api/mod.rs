//! Prediction league service API: wire types, the enriched league model,
//! normalization and the access operations.

pub mod client;
pub mod league;
pub mod normalize;
pub mod types;

pub use client::LeagueClient;
pub use league::{League, LeagueDay, UserDayResult};
pub use normalize::{index_by, normalize};
