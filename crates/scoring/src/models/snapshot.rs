use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Team, TeamResult};

/// The roster and result collections as seen at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Snapshot {
    /// Bumped by the store on every mutation. Zero for snapshots read from files.
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub results: Vec<TeamResult>,
}

impl Snapshot {
    pub fn new(teams: Vec<Team>, results: Vec<TeamResult>) -> Self {
        Self {
            version: 0,
            teams,
            results,
        }
    }
}
