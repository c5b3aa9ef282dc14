use crate::config::UpstreamSettings;
use crate::domain::models::{LeaderboardResponse, TournamentListResponse, UserResponse};
use crate::errors::FetchError;
use crate::http::RetryingClient;
use anyhow::Result;
use log::info;
use urlencoding::encode;

/// Lichess API client
#[derive(Debug, Clone)]
pub struct LichessClient {
    client: RetryingClient,
    base_url: String,
}

impl LichessClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = RetryingClient::new(settings.user_agent, settings.timeout(), settings.retry_policy())?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the top `nb` players for a perf type
    pub async fn fetch_leaderboard(&self, nb: u32, variant: &str) -> Result<LeaderboardResponse, FetchError> {
        let url = self.build_leaderboard_url(nb, variant);
        info!("Fetching top {} {} players from {}", nb, variant, url);
        self.client.get_json(&url).await
    }

    /// Fetch a single user's public data
    pub async fn fetch_user(&self, username: &str) -> Result<UserResponse, FetchError> {
        let url = self.build_user_url(username);
        self.client.get_json(&url).await
    }

    /// Fetch the current tournament listing
    pub async fn fetch_tournaments(&self) -> Result<TournamentListResponse, FetchError> {
        let url = self.build_tournaments_url();
        info!("Fetching tournaments from {}", url);
        self.client.get_json(&url).await
    }

    // --- Helper Methods ---

    fn build_leaderboard_url(&self, nb: u32, variant: &str) -> String {
        format!("{}/player/top/{}/{}", self.base_url, nb, encode(variant))
    }

    fn build_user_url(&self, username: &str) -> String {
        format!("{}/user/{}", self.base_url, encode(username))
    }

    fn build_tournaments_url(&self) -> String {
        format!("{}/tournament", self.base_url)
    }
}
