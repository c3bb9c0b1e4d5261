pub mod leaderboard;
pub mod result;
pub mod team;
