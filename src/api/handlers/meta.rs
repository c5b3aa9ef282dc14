use axum::response::Json;
use chrono::{SecondsFormat, Utc};

use crate::api::models::{IndexResponse, LivenessResponse};

pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Server is working".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        status: "healthy".to_string(),
    })
}

pub async fn index() -> Json<IndexResponse> {
    let endpoints = [
        "GET /api/test - Test server connectivity",
        "GET /api/profiles - Get multiple user profiles (top players)",
        "GET /api/profile/:username - Get specific user profile",
        "GET /api/leaderboards - Get the bullet leaderboard",
        "GET /api/leaderboards/:gameType - Get leaderboards (bullet, blitz, rapid, etc.)",
        "GET /api/tournaments - Get ongoing/upcoming tournaments",
    ];

    Json(IndexResponse {
        message: "Lichess API Backend Server".to_string(),
        endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
    })
}
