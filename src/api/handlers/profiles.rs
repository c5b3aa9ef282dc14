use axum::extract::{Path, State};
use axum::response::Json;
use log::{error, info};
use std::sync::Arc;

use super::{ApiQuery, AppState, ProfilesParams};
use crate::api::parsers::parse_count;
use crate::domain::PlayerProfile;
use crate::errors::ApiError;

const PROFILES_ERROR: &str = "Failed to fetch profiles";
const PROFILE_ERROR: &str = "Failed to fetch user profile";

pub async fn get_profiles(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ProfilesParams>,
) -> Result<Json<Vec<PlayerProfile>>, ApiError> {
    let settings = &state.config.gateway;
    let nb = parse_count(params.nb.as_deref(), settings.default_profiles_count, settings.max_count)
        .map_err(|e| e.into_api_error(PROFILES_ERROR))?;
    let game_type = params
        .game_type
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| settings.default_variant.to_string());

    info!("Fetching top {} {} players...", nb, game_type);

    match state.gateway.get_top_profiles(nb, &game_type).await {
        Ok(profiles) => {
            info!("Successfully fetched {} profiles", profiles.len());
            Ok(Json(profiles))
        }
        Err(e) => {
            error!("Error fetching profiles: {}", e);
            Err(e.into_api_error(PROFILES_ERROR))
        }
    }
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<PlayerProfile>, ApiError> {
    info!("Fetching profile for: {}", username);

    state.gateway.get_profile(&username).await.map(Json).map_err(|e| {
        error!("Error fetching user profile: {}", e);
        e.into_api_error(PROFILE_ERROR)
    })
}
