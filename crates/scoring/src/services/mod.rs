pub mod leaderboard;

pub use leaderboard::{Event, Standings, compute_leaderboard};
