pub mod dto;
pub mod duration;
pub mod error;
pub mod live;
pub mod models;
pub mod services;
pub mod source;
pub mod store;

pub use error::{Result, ScoringError};
pub use live::{ComputedStandings, LiveStandings};
pub use services::{Standings, compute_leaderboard};
pub use source::{JsonFileSource, SnapshotSource};
pub use store::CompetitionStore;
