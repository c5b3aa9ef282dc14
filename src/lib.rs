pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod http;
pub mod retry;
pub mod services;

#[cfg(test)]
mod testing;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::AppConfig;
use crate::services::dashboard::DashboardService;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_serve(port: u16, config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_profile(config: AppConfig, username: Option<&str>, game_type: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = DashboardService::new(config.dashboard)?;
        service.show_profiles(username, game_type).await
    })
}

pub fn handle_leaderboard(config: AppConfig, game_type: &str) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = DashboardService::new(config.dashboard)?;
        service.show_leaderboard(game_type).await
    })
}

pub fn handle_tournaments(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = DashboardService::new(config.dashboard)?;
        service.show_tournaments().await
    })
}
