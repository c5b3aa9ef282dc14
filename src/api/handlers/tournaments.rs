use axum::extract::State;
use axum::response::Json;
use log::{error, info};
use std::sync::Arc;

use super::AppState;
use crate::domain::TournamentSummary;
use crate::errors::ApiError;

pub async fn get_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TournamentSummary>>, ApiError> {
    info!("Fetching tournaments...");

    state.gateway.get_tournaments().await.map(Json).map_err(|e| {
        error!("Error fetching tournaments: {}", e);
        e.into_api_error("Failed to fetch tournaments")
    })
}
