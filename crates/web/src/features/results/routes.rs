use axum::{
    Router, middleware,
    routing::{get, put},
};

use super::handlers::{get_result, list_results, save_partial_result, save_result};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/:team_id", put(save_result).patch(save_partial_result))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/:team_id", get(get_result))
        .merge(protected)
}
