use anyhow::{anyhow, Result};
use log::info;

use crate::config::{find_variant, get_variants, DashboardSettings};
use crate::dashboard::render::{
    render_leaderboard, render_profile_card, render_profile_grid, render_state, render_tournaments,
};
use crate::dashboard::{error_message, DashboardClient, ProfileMode, View, ViewState};

pub struct DashboardService {
    client: DashboardClient,
    settings: DashboardSettings,
}

impl DashboardService {
    pub fn new(settings: DashboardSettings) -> Result<Self> {
        let client = DashboardClient::new(&settings)?;
        Ok(Self { client, settings })
    }

    /// Top players when `username` is `None`, otherwise a single lookup
    pub async fn show_profiles(&self, username: Option<&str>, game_type: &str) -> Result<()> {
        print!("{}", self.profiles_view(username, game_type).await);
        Ok(())
    }

    pub async fn show_leaderboard(&self, game_type: &str) -> Result<()> {
        print!("{}", self.leaderboard_view(game_type).await?);
        Ok(())
    }

    pub async fn show_tournaments(&self) -> Result<()> {
        print!("{}", self.tournaments_view().await);
        Ok(())
    }

    async fn profiles_view(&self, username: Option<&str>, game_type: &str) -> String {
        let mode = match ProfileMode::from_input(username) {
            Ok(mode) => mode,
            Err(e) => {
                let state: ViewState<()> = ViewState::Failed(error_message(&e, View::Profile));
                return render_state(&state, View::Profile.loading_message(), |_| String::new());
            }
        };

        match mode {
            ProfileMode::AllTop => {
                show_loading(View::Profiles);
                let result = self
                    .client
                    .top_profiles(self.settings.profiles_count, game_type)
                    .await;
                let state = ViewState::from_result(result, View::Profiles);
                render_state(&state, View::Profiles.loading_message(), |p| render_profile_grid(p))
            }
            ProfileMode::Single(username) => {
                show_loading(View::Profile);
                let state = ViewState::from_result(self.client.profile(&username).await, View::Profile);
                render_state(&state, View::Profile.loading_message(), render_profile_card)
            }
        }
    }

    /// Unknown game types are rejected before any request is made
    async fn leaderboard_view(&self, game_type: &str) -> Result<String> {
        let variant = find_variant(game_type).ok_or_else(|| {
            let known: Vec<&str> = get_variants().iter().map(|v| v.key).collect();
            anyhow!("Unknown game type '{}', expected one of: {}", game_type, known.join(", "))
        })?;

        show_loading(View::Leaderboards);
        let result = self
            .client
            .leaderboard(variant.key, self.settings.leaderboard_count)
            .await;
        let state = ViewState::from_result(result, View::Leaderboards);
        Ok(render_state(&state, View::Leaderboards.loading_message(), |entries| {
            render_leaderboard(variant.name, entries)
        }))
    }

    async fn tournaments_view(&self) -> String {
        show_loading(View::Tournaments);
        let state = ViewState::from_result(self.client.tournaments().await, View::Tournaments);
        render_state(&state, View::Tournaments.loading_message(), |t| render_tournaments(t))
    }
}

fn show_loading(view: View) {
    info!("Requesting {:?} view", view);
    let loading: ViewState<()> = ViewState::Loading;
    print!("{}", render_state(&loading, view.loading_message(), |_| String::new()));
}
