//! Terminal front end for the gateway: Profile, Leaderboards and
//! Tournaments views.

mod client;
pub mod format;
pub mod render;
mod view;

pub use client::{DashboardClient, DashboardError};
pub use view::{error_message, ProfileMode, View, ViewState};
