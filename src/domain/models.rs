use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NO_BIO: &str = "No bio available";
const DEFAULT_VARIANT_NAME: &str = "Standard";
const DEFAULT_SYSTEM: &str = "arena";

/// Player profile as served to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub username: String,
    pub bio: String,
    pub games_played: u32,
    pub ratings: BTreeMap<String, Rating>,
    pub profile_image: Option<String>,
    pub title: Option<String>,
    pub online: bool,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rating: u32,
    #[serde(default)]
    pub games: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rd: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prog: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub username: String,
    pub title: Option<String>,
    pub rating: u32,
    pub progress: i32,
    pub online: bool,
    pub patron: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentSummary {
    pub id: String,
    pub name: String,
    pub variant: String,
    pub rated: bool,
    pub time_control: Option<Clock>,
    pub starts_at: Option<i64>,
    pub status: TournamentStatus,
    pub nb_players: u32,
    pub winner: Option<String>,
    pub perf: Option<String>,
    pub minutes: Option<u32>,
    pub system: String,
}

/// Clock in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub limit: u32,
    pub increment: u32,
}

/// Lichess tournament status code. Serialized as the bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum TournamentStatus {
    Created,
    Starting,
    Started,
    Unknown(u16),
}

impl From<u16> for TournamentStatus {
    fn from(code: u16) -> Self {
        match code {
            10 => TournamentStatus::Created,
            20 => TournamentStatus::Starting,
            30 => TournamentStatus::Started,
            other => TournamentStatus::Unknown(other),
        }
    }
}

impl From<TournamentStatus> for u16 {
    fn from(status: TournamentStatus) -> Self {
        match status {
            TournamentStatus::Created => 10,
            TournamentStatus::Starting => 20,
            TournamentStatus::Started => 30,
            TournamentStatus::Unknown(code) => code,
        }
    }
}

impl Default for TournamentStatus {
    fn default() -> Self {
        TournamentStatus::Unknown(0)
    }
}

// --- Upstream Response Structures ---

/// `GET /player/top/{nb}/{perfType}`
#[derive(Debug, Deserialize)]
pub struct LeaderboardResponse {
    pub users: Vec<LeaderboardUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardUser {
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub patron: Option<bool>,
    #[serde(default)]
    pub perfs: Option<BTreeMap<String, PerfResponse>>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub progress: Option<i32>,
}

/// One entry of a `perfs` block. Everything is optional: some perfs
/// (storm, racer, streak) carry runs and scores instead of a rating.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerfResponse {
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default)]
    pub games: Option<u32>,
    #[serde(default)]
    pub rd: Option<f64>,
    #[serde(default)]
    pub prog: Option<i32>,
    #[serde(default)]
    pub progress: Option<i32>,
}

/// `GET /user/{username}`
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub profile: Option<UserProfileResponse>,
    #[serde(default)]
    pub count: Option<CountResponse>,
    #[serde(default)]
    pub perfs: Option<BTreeMap<String, PerfResponse>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserProfileResponse {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub all: Option<u32>,
}

/// `GET /tournament`
#[derive(Debug, Default, Deserialize)]
pub struct TournamentListResponse {
    #[serde(default)]
    pub created: Vec<TournamentResponse>,
    #[serde(default)]
    pub started: Vec<TournamentResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub variant: Option<NamedResponse>,
    #[serde(default)]
    pub rated: Option<bool>,
    #[serde(default)]
    pub clock: Option<Clock>,
    #[serde(default)]
    pub starts_at: Option<i64>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub nb_players: Option<u32>,
    #[serde(default)]
    pub winner: Option<NamedResponse>,
    #[serde(default)]
    pub perf: Option<NamedResponse>,
    #[serde(default)]
    pub minutes: Option<u32>,
    #[serde(default)]
    pub system: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NamedResponse {
    #[serde(default)]
    pub name: Option<String>,
}

// --- Reshaping ---

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn ratings_from_perfs(perfs: BTreeMap<String, PerfResponse>) -> BTreeMap<String, Rating> {
    perfs
        .into_iter()
        .filter_map(|(variant, perf)| {
            let rating = perf.rating?;
            Some((
                variant,
                Rating {
                    rating,
                    games: perf.games.unwrap_or(0),
                    rd: perf.rd,
                    prog: perf.prog,
                },
            ))
        })
        .collect()
}

impl From<UserResponse> for PlayerProfile {
    fn from(user: UserResponse) -> Self {
        let profile = user.profile.unwrap_or_default();

        PlayerProfile {
            username: user.username,
            bio: non_empty(profile.bio).unwrap_or_else(|| NO_BIO.to_string()),
            games_played: user.count.and_then(|c| c.all).unwrap_or(0),
            ratings: user.perfs.map(ratings_from_perfs).unwrap_or_default(),
            profile_image: non_empty(profile.avatar),
            title: non_empty(user.title),
            online: user.online.unwrap_or(false),
            country: non_empty(profile.country).or_else(|| non_empty(profile.flag)),
        }
    }
}

impl PlayerProfile {
    /// Profile built from a leaderboard row alone, used when the
    /// detailed lookup for that player failed.
    pub fn degraded(user: LeaderboardUser, variant: &str) -> Self {
        let ratings = match user.perfs {
            Some(perfs) => perfs
                .into_iter()
                .filter_map(|(key, perf)| {
                    let rating = perf.rating?;
                    Some((key, Rating { rating, games: 0, rd: None, prog: None }))
                })
                .collect(),
            None => BTreeMap::from([(
                variant.to_string(),
                Rating {
                    rating: user.rating.unwrap_or(0),
                    games: 0,
                    rd: None,
                    prog: None,
                },
            )]),
        };

        PlayerProfile {
            username: user.username,
            bio: NO_BIO.to_string(),
            games_played: 0,
            ratings,
            profile_image: None,
            title: non_empty(user.title),
            online: user.online.unwrap_or(false),
            country: None,
        }
    }
}

impl LeaderboardEntry {
    pub fn from_user(user: LeaderboardUser, variant: &str) -> Self {
        let perf = user
            .perfs
            .as_ref()
            .and_then(|perfs| perfs.get(variant))
            .cloned()
            .unwrap_or_default();

        LeaderboardEntry {
            rating: perf.rating.or(user.rating).unwrap_or(0),
            progress: perf.progress.or(user.progress).unwrap_or(0),
            username: user.username,
            title: non_empty(user.title),
            online: user.online.unwrap_or(false),
            patron: user.patron.unwrap_or(false),
        }
    }
}

impl From<TournamentResponse> for TournamentSummary {
    fn from(tournament: TournamentResponse) -> Self {
        let name = non_empty(tournament.full_name)
            .or_else(|| non_empty(tournament.name))
            .unwrap_or_default();

        TournamentSummary {
            id: tournament.id,
            name,
            variant: tournament
                .variant
                .and_then(|v| non_empty(v.name))
                .unwrap_or_else(|| DEFAULT_VARIANT_NAME.to_string()),
            rated: tournament.rated.unwrap_or(false),
            time_control: tournament.clock,
            starts_at: tournament.starts_at,
            status: tournament.status.map(TournamentStatus::from).unwrap_or_default(),
            nb_players: tournament.nb_players.unwrap_or(0),
            winner: tournament.winner.and_then(|w| non_empty(w.name)),
            perf: tournament.perf.and_then(|p| non_empty(p.name)),
            minutes: tournament.minutes,
            system: non_empty(tournament.system).unwrap_or_else(|| DEFAULT_SYSTEM.to_string()),
        }
    }
}
