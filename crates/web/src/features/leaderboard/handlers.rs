use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::{
    dto::leaderboard::{CategoryStandings, LeaderboardResponse},
    models::{Category, Snapshot},
};

use crate::{error::WebResult, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Standings for every category", body = LeaderboardResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> WebResult<Response> {
    let response = services::current_standings(&state.standings);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard/{category}",
    params(
        ("category" = String, Path, description = "Category tag (men, women)")
    ),
    responses(
        (status = 200, description = "Standings for one category", body = CategoryStandings),
        (status = 400, description = "Unknown category")
    ),
    tag = "leaderboard"
)]
pub async fn get_category_leaderboard(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> WebResult<Response> {
    let category: Category = category.parse()?;
    let response = services::category_standings(&state.standings, category);

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboard/compute",
    request_body = Snapshot,
    responses(
        (status = 200, description = "Standings computed from the posted teams and results", body = LeaderboardResponse),
        (status = 400, description = "Malformed snapshot")
    ),
    tag = "leaderboard"
)]
pub async fn compute_leaderboard(Json(snapshot): Json<Snapshot>) -> WebResult<Response> {
    tracing::debug!(
        teams = snapshot.teams.len(),
        results = snapshot.results.len(),
        "computing posted snapshot"
    );
    let response = services::compute_snapshot(&snapshot);

    Ok(Json(response).into_response())
}
