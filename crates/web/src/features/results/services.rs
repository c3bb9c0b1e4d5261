use scoring::{
    CompetitionStore,
    dto::result::{PartialResultRequest, ResultPayload},
    error::Result,
    models::TeamResult,
};

/// List all results ordered by team id
pub async fn list_results(store: &CompetitionStore) -> Vec<TeamResult> {
    store.list_results().await
}

/// Get the result of a team
pub async fn get_result(store: &CompetitionStore, team_id: &str) -> Result<TeamResult> {
    store.get_result(team_id).await
}

/// Save the full result of a team
pub async fn save_result(
    store: &CompetitionStore,
    team_id: &str,
    payload: ResultPayload,
) -> Result<TeamResult> {
    store.save_result(team_id, payload).await
}

/// Merge some fields into the result of a team
pub async fn save_partial_result(
    store: &CompetitionStore,
    team_id: &str,
    request: PartialResultRequest,
) -> Result<TeamResult> {
    store.save_partial_result(team_id, request).await
}
