use anyhow::Result;
use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::services::gateway::GatewayService;

pub mod leaderboards;
pub mod meta;
pub mod profiles;
pub mod tournaments;

pub struct AppState {
    pub gateway: GatewayService,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let gateway = GatewayService::new(&config.upstream, config.gateway.clone())?;
        Ok(Self { gateway, config })
    }
}

/// `Query` that rejects with the JSON error body instead of plain text
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(params))
    }
}

/// `nb` stays a raw string so that bad values get the JSON error body
#[derive(Deserialize)]
pub struct CountParams {
    pub nb: Option<String>,
}

#[derive(Deserialize)]
pub struct ProfilesParams {
    pub nb: Option<String>,
    #[serde(rename = "gameType")]
    pub game_type: Option<String>,
}
