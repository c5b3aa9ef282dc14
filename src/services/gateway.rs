use anyhow::Result;
use futures::future::join_all;
use log::{info, warn};

use crate::api::LichessClient;
use crate::config::{GatewaySettings, UpstreamSettings};
use crate::domain::{
    LeaderboardEntry, LeaderboardUser, OutcomeSummary, PlayerProfile, ProfileOutcome,
    TournamentSummary,
};
use crate::errors::GatewayError;

/// Translates dashboard queries into Lichess calls and reshapes the results
#[derive(Debug, Clone)]
pub struct GatewayService {
    lichess: LichessClient,
    settings: GatewaySettings,
}

impl GatewayService {
    pub fn new(upstream: &UpstreamSettings, settings: GatewaySettings) -> Result<Self> {
        Ok(Self {
            lichess: LichessClient::new(upstream)?,
            settings,
        })
    }

    /// Top `count` players of `variant` with their full profiles.
    ///
    /// Only the leaderboard fetch can fail the call. Each per-player
    /// lookup that fails degrades to the leaderboard row.
    pub async fn get_top_profiles(&self, count: u32, variant: &str) -> Result<Vec<PlayerProfile>, GatewayError> {
        let outcomes = self.fetch_top_profile_outcomes(count, variant).await?;
        Ok(outcomes.into_iter().map(ProfileOutcome::into_profile).collect())
    }

    pub async fn fetch_top_profile_outcomes(
        &self,
        count: u32,
        variant: &str,
    ) -> Result<Vec<ProfileOutcome>, GatewayError> {
        let leaderboard = self.lichess.fetch_leaderboard(count, variant).await?;
        info!("Got {} players from leaderboard", leaderboard.users.len());

        let candidates: Vec<LeaderboardUser> = leaderboard
            .users
            .into_iter()
            .take(self.settings.profile_fanout_limit)
            .collect();

        let total = candidates.len();
        let lookups = candidates
            .into_iter()
            .enumerate()
            .map(|(index, user)| self.resolve_profile(index, total, user, variant));
        let outcomes = join_all(lookups).await;

        let summary = OutcomeSummary::tally(&outcomes);
        info!(
            "Fetched {} profiles ({} resolved, {} degraded)",
            outcomes.len(),
            summary.resolved,
            summary.degraded
        );
        Ok(outcomes)
    }

    pub async fn get_profile(&self, username: &str) -> Result<PlayerProfile, GatewayError> {
        match self.lichess.fetch_user(username).await {
            Ok(user) => Ok(PlayerProfile::from(user)),
            Err(e) if e.is_not_found() => Err(GatewayError::NotFound(format!("user {}", username))),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_leaderboard(&self, variant: &str, count: u32) -> Result<Vec<LeaderboardEntry>, GatewayError> {
        let leaderboard = self.lichess.fetch_leaderboard(count, variant).await?;

        Ok(leaderboard
            .users
            .into_iter()
            .take(count as usize)
            .map(|user| LeaderboardEntry::from_user(user, variant))
            .collect())
    }

    /// Created tournaments first, then started ones, capped after concatenation
    pub async fn get_tournaments(&self) -> Result<Vec<TournamentSummary>, GatewayError> {
        let listing = self.lichess.fetch_tournaments().await?;

        let tournaments: Vec<TournamentSummary> = listing
            .created
            .into_iter()
            .chain(listing.started)
            .take(self.settings.tournament_limit)
            .map(TournamentSummary::from)
            .collect();

        info!("Found {} tournaments", tournaments.len());
        Ok(tournaments)
    }

    async fn resolve_profile(
        &self,
        index: usize,
        total: usize,
        user: LeaderboardUser,
        variant: &str,
    ) -> ProfileOutcome {
        info!("Fetching profile {}/{}: {}", index + 1, total, user.username);

        match self.lichess.fetch_user(&user.username).await {
            Ok(detail) => ProfileOutcome::Resolved(PlayerProfile::from(detail)),
            Err(e) => {
                warn!("Failed to fetch profile for {}: {}", user.username, e);
                ProfileOutcome::Degraded {
                    profile: PlayerProfile::degraded(user, variant),
                    reason: e.to_string(),
                }
            }
        }
    }
}
