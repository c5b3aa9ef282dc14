use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    leaderboards::{get_default_leaderboard, get_leaderboard},
    meta::{index, liveness},
    profiles::{get_profile, get_profiles},
    tournaments::get_tournaments,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/test", get(liveness))
        .route("/api/profiles", get(get_profiles))
        .route("/api/profile/:username", get(get_profile))
        .route("/api/leaderboards", get(get_default_leaderboard))
        .route("/api/leaderboards/:gameType", get(get_leaderboard))
        .route("/api/tournaments", get(get_tournaments))
        .with_state(state)
}
