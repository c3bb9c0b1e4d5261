pub mod category;
pub mod leaderboard_entry;
pub mod result;
pub mod snapshot;
pub mod team;

pub use category::Category;
pub use leaderboard_entry::LeaderboardEntry;
pub use result::TeamResult;
pub use snapshot::Snapshot;
pub use team::Team;
