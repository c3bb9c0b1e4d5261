use axum::{
    Router,
    routing::{get, post},
};

use super::handlers::{compute_leaderboard, get_category_leaderboard, get_leaderboard};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/compute", post(compute_leaderboard))
        .route("/:category", get(get_category_leaderboard))
}
