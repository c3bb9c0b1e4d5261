pub mod leaderboard;
pub mod results;
pub mod teams;
