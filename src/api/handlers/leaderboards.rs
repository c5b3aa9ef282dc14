use axum::extract::{Path, State};
use axum::response::Json;
use log::{error, info};
use std::sync::Arc;

use super::{ApiQuery, AppState, CountParams};
use crate::api::parsers::parse_count;
use crate::domain::LeaderboardEntry;
use crate::errors::ApiError;

const LEADERBOARD_ERROR: &str = "Failed to fetch leaderboards";

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(game_type): Path<String>,
    ApiQuery(params): ApiQuery<CountParams>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    fetch_leaderboard(&state, &game_type, params.nb.as_deref()).await
}

/// Bullet leaderboard
pub async fn get_default_leaderboard(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<CountParams>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let game_type = state.config.gateway.default_variant;
    fetch_leaderboard(&state, game_type, params.nb.as_deref()).await
}

async fn fetch_leaderboard(
    state: &AppState,
    game_type: &str,
    nb: Option<&str>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    let settings = &state.config.gateway;
    let nb = parse_count(nb, settings.default_leaderboard_count, settings.max_count)
        .map_err(|e| e.into_api_error(LEADERBOARD_ERROR))?;

    info!("Fetching {} leaderboard ({} players)...", game_type, nb);

    state
        .gateway
        .get_leaderboard(game_type, nb)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Error fetching leaderboards: {}", e);
            e.into_api_error(LEADERBOARD_ERROR)
        })
}
