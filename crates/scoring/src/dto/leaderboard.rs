use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::duration::format_duration;
use crate::models::{Category, LeaderboardEntry};
use crate::services::Standings;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Version of the roster snapshot the standings were computed from
    pub version: u64,
    pub categories: Vec<CategoryStandings>,
}

impl LeaderboardResponse {
    pub fn from_standings(version: u64, standings: &Standings) -> Self {
        Self {
            version,
            categories: standings
                .iter()
                .map(|(category, entries)| CategoryStandings::new(*category, entries))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStandings {
    pub category: Category,
    pub label: String,
    pub entries: Vec<LeaderboardRow>,
}

impl CategoryStandings {
    pub fn new(category: Category, entries: &[LeaderboardEntry]) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            entries: entries.iter().cloned().map(LeaderboardRow::from).collect(),
        }
    }
}

/// A leaderboard entry with its WOD time formatted for display.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
    pub wod_time: Option<String>,
}

impl From<LeaderboardEntry> for LeaderboardRow {
    fn from(entry: LeaderboardEntry) -> Self {
        let wod_time = format_duration(entry.wod_seconds);
        Self { entry, wod_time }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Team, TeamResult};
    use crate::services::compute_leaderboard;

    #[test]
    fn test_response_lists_every_category_with_display_time() {
        let teams = vec![Team {
            id: "t1".to_string(),
            category: Some(Category::Men),
            athlete1: "Ivo".to_string(),
            athlete2: "Jan".to_string(),
        }];
        let mut result = TeamResult::empty("t1");
        result.wod_time = "3:45".to_string();

        let standings = compute_leaderboard(&teams, &[result]);
        let response = LeaderboardResponse::from_standings(7, &standings);

        assert_eq!(response.version, 7);
        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.categories[0].category, Category::Men);
        assert_eq!(response.categories[0].entries[0].wod_time.as_deref(), Some("3:45"));
        assert!(response.categories[1].entries.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        let row = &json["categories"][0]["entries"][0];
        assert_eq!(row["teamName"], "Ivo & Jan");
        assert_eq!(row["wodSeconds"], 225.0);
        assert_eq!(row["wodTime"], "3:45");
        assert_eq!(row["rank"], 1);
    }
}
