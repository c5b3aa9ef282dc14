use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::api::models::ErrorBody;
use crate::config::DashboardSettings;
use crate::domain::{LeaderboardEntry, PlayerProfile, TournamentSummary};

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("{0}")]
    Validation(String),
    #[error("gateway returned {status}")]
    Gateway {
        status: StatusCode,
        body: Option<ErrorBody>,
    },
    #[error("could not reach gateway: {0}")]
    Request(#[from] reqwest::Error),
}

/// Client for the gateway's `/api` routes. Never talks to Lichess directly.
pub struct DashboardClient {
    client: Client,
    base_url: String,
}

impl DashboardClient {
    pub fn new(settings: &DashboardSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.gateway_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn top_profiles(&self, nb: u32, game_type: &str) -> Result<Vec<PlayerProfile>, DashboardError> {
        let url = format!("{}/profiles?nb={}&gameType={}", self.base_url, nb, encode(game_type));
        self.get(&url).await
    }

    pub async fn profile(&self, username: &str) -> Result<PlayerProfile, DashboardError> {
        let url = format!("{}/profile/{}", self.base_url, encode(username));
        self.get(&url).await
    }

    pub async fn leaderboard(&self, game_type: &str, nb: u32) -> Result<Vec<LeaderboardEntry>, DashboardError> {
        let url = format!("{}/leaderboards/{}?nb={}", self.base_url, encode(game_type), nb);
        self.get(&url).await
    }

    pub async fn tournaments(&self) -> Result<Vec<TournamentSummary>, DashboardError> {
        let url = format!("{}/tournaments", self.base_url);
        self.get(&url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, DashboardError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.ok();
            return Err(DashboardError::Gateway { status, body });
        }

        Ok(response.json().await?)
    }
}
