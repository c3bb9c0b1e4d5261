use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::{
    dto::team::{TeamPayload, UpdateTeamRequest},
    models::Team,
};
use validator::Validate;

use crate::{error::WebResult, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "List all teams successfully", body = Vec<Team>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(state): State<AppState>) -> WebResult<Response> {
    let teams = services::list_teams(&state.store).await;

    Ok(Json(teams).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    let team = services::get_team(&state.store, &id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams",
    request_body = TeamPayload,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamPayload>,
) -> WebResult<Response> {
    payload.validate()?;

    let team = services::create_team(&state.store, payload).await?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/teams/{id}",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    request_body = UpdateTeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team updated successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update_req): Json<UpdateTeamRequest>,
) -> WebResult<Response> {
    update_req.validate()?;

    let updated = services::update_team(&state.store, &id, update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    request_body = TeamPayload,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team replaced successfully", body = Team),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn replace_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TeamPayload>,
) -> WebResult<Response> {
    payload.validate()?;

    let replaced = services::replace_team(&state.store, &id, payload).await?;

    Ok(Json(replaced).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    params(
        ("id" = String, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Team deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Response> {
    services::delete_team(&state.store, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
