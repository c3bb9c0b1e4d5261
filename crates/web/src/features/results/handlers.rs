use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use scoring::{
    dto::result::{PartialResultRequest, ResultPayload},
    models::TeamResult,
};
use validator::Validate;

use crate::{error::WebResult, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    responses(
        (status = 200, description = "List all results successfully", body = Vec<TeamResult>)
    ),
    tag = "results"
)]
pub async fn list_results(State(state): State<AppState>) -> WebResult<Response> {
    let results = services::list_results(&state.store).await;

    Ok(Json(results).into_response())
}

#[utoipa::path(
    get,
    path = "/api/results/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Result found", body = TeamResult),
        (status = 404, description = "No result recorded for this team")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> WebResult<Response> {
    let result = services::get_result(&state.store, &team_id).await?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    request_body = ResultPayload,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result saved successfully", body = TeamResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "results"
)]
pub async fn save_result(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(payload): Json<ResultPayload>,
) -> WebResult<Response> {
    payload.validate()?;

    let result = services::save_result(&state.store, &team_id, payload).await?;

    Ok(Json(result).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/results/{team_id}",
    params(
        ("team_id" = String, Path, description = "Team id")
    ),
    request_body = PartialResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Result merged successfully", body = TeamResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "results"
)]
pub async fn save_partial_result(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(request): Json<PartialResultRequest>,
) -> WebResult<Response> {
    request.validate()?;

    let result = services::save_partial_result(&state.store, &team_id, request).await?;

    Ok(Json(result).into_response())
}
