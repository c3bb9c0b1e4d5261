use scoring::{
    LiveStandings,
    dto::leaderboard::{CategoryStandings, LeaderboardResponse},
    models::{Category, Snapshot},
    services::compute_leaderboard,
};

/// Standings kept current by the live recompute task
pub fn current_standings(live: &LiveStandings) -> LeaderboardResponse {
    let computed = live.current();
    LeaderboardResponse::from_standings(computed.version, &computed.standings)
}

/// Standings of a single category
pub fn category_standings(live: &LiveStandings, category: Category) -> CategoryStandings {
    let computed = live.current();
    let entries = computed
        .standings
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default();

    CategoryStandings::new(category, entries)
}

/// Rank a caller supplied snapshot without touching the store
pub fn compute_snapshot(snapshot: &Snapshot) -> LeaderboardResponse {
    let standings = compute_leaderboard(&snapshot.teams, &snapshot.results);
    LeaderboardResponse::from_standings(snapshot.version, &standings)
}
