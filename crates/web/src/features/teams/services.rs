use scoring::{
    CompetitionStore,
    dto::team::{TeamPayload, UpdateTeamRequest},
    error::Result,
    models::Team,
};

/// List all teams ordered by first athlete
pub async fn list_teams(store: &CompetitionStore) -> Vec<Team> {
    store.list_teams().await
}

/// Get a team by id
pub async fn get_team(store: &CompetitionStore, id: &str) -> Result<Team> {
    store.get_team(id).await
}

/// Register a new team
pub async fn create_team(store: &CompetitionStore, payload: TeamPayload) -> Result<Team> {
    store.create_team(payload).await
}

/// Update some fields of a team
pub async fn update_team(
    store: &CompetitionStore,
    id: &str,
    request: UpdateTeamRequest,
) -> Result<Team> {
    store.update_team(id, request).await
}

/// Replace every field of a team
pub async fn replace_team(store: &CompetitionStore, id: &str, payload: TeamPayload) -> Result<Team> {
    store.replace_team(id, payload).await
}

/// Delete a team
pub async fn delete_team(store: &CompetitionStore, id: &str) -> Result<()> {
    store.delete_team(id).await
}
