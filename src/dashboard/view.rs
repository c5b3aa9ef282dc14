use reqwest::StatusCode;

use super::client::DashboardError;

/// The dashboard tab a request was made for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Profiles,
    Profile,
    Leaderboards,
    Tournaments,
}

impl View {
    pub fn loading_message(&self) -> &'static str {
        match self {
            View::Profiles => "Loading top players...",
            View::Profile => "Searching...",
            View::Leaderboards => "Loading leaderboard...",
            View::Tournaments => "Loading tournaments...",
        }
    }

    fn fallback_error(&self) -> &'static str {
        match self {
            View::Profiles => "Failed to fetch profiles. Please try again later.",
            View::Profile => "Failed to fetch profile. Please try again later.",
            View::Leaderboards => "Failed to fetch leaderboard data. Please try again.",
            View::Tournaments => "Failed to fetch tournaments data. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> ViewState<T> {
    pub fn from_result(result: Result<T, DashboardError>, view: View) -> Self {
        match result {
            Ok(data) => ViewState::Loaded(data),
            Err(e) => ViewState::Failed(error_message(&e, view)),
        }
    }
}

/// Which profile view is shown
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileMode {
    #[default]
    AllTop,
    Single(String),
}

impl ProfileMode {
    /// No username means the top-players list; a blank one is rejected
    pub fn from_input(username: Option<&str>) -> Result<Self, DashboardError> {
        match username.map(str::trim) {
            None => Ok(ProfileMode::AllTop),
            Some("") => Err(DashboardError::Validation("Please enter a username".to_string())),
            Some(name) => Ok(ProfileMode::Single(name.to_string())),
        }
    }
}

pub fn error_message(error: &DashboardError, view: View) -> String {
    match error {
        DashboardError::Validation(message) => message.clone(),
        DashboardError::Gateway { status, .. }
            if *status == StatusCode::NOT_FOUND && view == View::Profile =>
        {
            "User not found. Please check the username.".to_string()
        }
        DashboardError::Gateway { status, body } if *status == StatusCode::SERVICE_UNAVAILABLE => {
            match body.as_ref().and_then(|b| b.code.as_deref()) {
                Some("TIMEOUT") => {
                    "Lichess servers are currently slow. Please try again in a moment.".to_string()
                }
                Some("CONNECTION_ERROR") => {
                    "Unable to connect to Lichess. Please check your internet connection.".to_string()
                }
                _ => body
                    .as_ref()
                    .map(|b| b.error.clone())
                    .unwrap_or_else(|| "Lichess API is currently unavailable.".to_string()),
            }
        }
        _ => view.fallback_error().to_string(),
    }
}
