//! In-process stand-in for the Lichess API, bound to an ephemeral port.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::{AppConfig, DashboardSettings, UpstreamSettings};

struct FakeState {
    players: usize,
    slow_users: HashSet<usize>,
    ignore_nb: bool,
    failing_leaderboard: bool,
    malformed_tournaments: bool,
    created: usize,
    started: usize,
    leaderboard_hits: AtomicUsize,
    user_hits: AtomicUsize,
    tournament_hits: AtomicUsize,
}

pub struct FakeLichessBuilder {
    players: usize,
    slow_users: HashSet<usize>,
    ignore_nb: bool,
    failing_leaderboard: bool,
    malformed_tournaments: bool,
    created: usize,
    started: usize,
}

impl FakeLichessBuilder {
    pub fn players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Players whose profile lookup never answers within the client timeout
    pub fn slow_users(mut self, indexes: impl IntoIterator<Item = usize>) -> Self {
        self.slow_users.extend(indexes);
        self
    }

    /// Return every player regardless of the requested `nb`
    pub fn ignore_nb(mut self) -> Self {
        self.ignore_nb = true;
        self
    }

    pub fn failing_leaderboard(mut self) -> Self {
        self.failing_leaderboard = true;
        self
    }

    pub fn malformed_tournaments(mut self) -> Self {
        self.malformed_tournaments = true;
        self
    }

    pub fn tournaments(mut self, created: usize, started: usize) -> Self {
        self.created = created;
        self.started = started;
        self
    }

    pub async fn start(self) -> FakeLichess {
        let state = Arc::new(FakeState {
            players: self.players,
            slow_users: self.slow_users,
            ignore_nb: self.ignore_nb,
            failing_leaderboard: self.failing_leaderboard,
            malformed_tournaments: self.malformed_tournaments,
            created: self.created,
            started: self.started,
            leaderboard_hits: AtomicUsize::new(0),
            user_hits: AtomicUsize::new(0),
            tournament_hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/api/player/top/:nb/:perf", get(leaderboard))
            .route("/api/user/:username", get(user))
            .route("/api/tournament", get(tournaments))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeLichess {
            base_url: format!("http://{}/api", addr),
            state,
        }
    }
}

pub struct FakeLichess {
    base_url: String,
    state: Arc<FakeState>,
}

impl FakeLichess {
    pub const TIMEOUT: Duration = Duration::from_millis(200);
    pub const RETRY_DELAY: Duration = Duration::from_millis(20);
    const SLOW: Duration = Duration::from_secs(2);

    pub fn builder() -> FakeLichessBuilder {
        FakeLichessBuilder {
            players: 0,
            slow_users: HashSet::new(),
            ignore_nb: false,
            failing_leaderboard: false,
            malformed_tournaments: false,
            created: 3,
            started: 2,
        }
    }

    pub fn upstream_settings(&self) -> UpstreamSettings {
        UpstreamSettings {
            base_url: self.base_url.clone(),
            timeout_ms: Self::TIMEOUT.as_millis() as u64,
            max_retries: 2,
            retry_delay_ms: Self::RETRY_DELAY.as_millis() as u64,
            ..UpstreamSettings::default()
        }
    }

    pub fn app_config(&self) -> AppConfig {
        let upstream = self.upstream_settings();
        AppConfig {
            dashboard: DashboardSettings {
                timeout: DashboardSettings::timeout_for(&upstream),
                ..DashboardSettings::default()
            },
            upstream,
            ..AppConfig::default()
        }
    }

    /// Serve the gateway on top of this fake and return dashboard settings
    /// pointing at it
    pub async fn start_gateway(&self) -> DashboardSettings {
        let config = self.app_config();
        let app = create_router(Arc::new(AppState::new(config.clone()).unwrap()));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        DashboardSettings {
            gateway_url: format!("http://{}/api", addr),
            ..config.dashboard
        }
    }

    /// Base URL of a port nobody listens on
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/api", addr)
    }

    pub fn username(index: usize) -> String {
        format!("player{}", index)
    }

    pub fn rating(index: usize) -> u32 {
        3000 - 10 * index as u32
    }

    pub fn games(index: usize) -> u32 {
        1000 + index as u32
    }

    pub fn leaderboard_hits(&self) -> usize {
        self.state.leaderboard_hits.load(Ordering::SeqCst)
    }

    pub fn user_hits(&self) -> usize {
        self.state.user_hits.load(Ordering::SeqCst)
    }

    pub fn tournament_hits(&self) -> usize {
        self.state.tournament_hits.load(Ordering::SeqCst)
    }
}

fn player_index(state: &FakeState, username: &str) -> Option<usize> {
    username
        .strip_prefix("player")?
        .parse::<usize>()
        .ok()
        .filter(|i| *i < state.players)
}

async fn leaderboard(
    State(state): State<Arc<FakeState>>,
    Path((nb, perf)): Path<(String, String)>,
) -> Response {
    state.leaderboard_hits.fetch_add(1, Ordering::SeqCst);
    if state.failing_leaderboard {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    let limit = if state.ignore_nb {
        state.players
    } else {
        nb.parse::<usize>().unwrap_or(0).min(state.players)
    };

    let users: Vec<Value> = (0..limit)
        .map(|i| {
            let mut perfs = serde_json::Map::new();
            perfs.insert(
                perf.clone(),
                json!({ "rating": FakeLichess::rating(i), "progress": i as i32 - 5 }),
            );
            json!({
                "id": FakeLichess::username(i),
                "username": FakeLichess::username(i),
                "title": "GM",
                "online": i % 2 == 0,
                "patron": i % 3 == 0,
                "perfs": perfs
            })
        })
        .collect();

    Json(json!({ "users": users })).into_response()
}

async fn user(State(state): State<Arc<FakeState>>, Path(username): Path<String>) -> Response {
    state.user_hits.fetch_add(1, Ordering::SeqCst);

    let Some(index) = player_index(&state, &username) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response();
    };
    if state.slow_users.contains(&index) {
        tokio::time::sleep(FakeLichess::SLOW).await;
    }

    let rating = FakeLichess::rating(index);
    let games = FakeLichess::games(index);
    Json(json!({
        "id": username,
        "username": username,
        "title": "GM",
        "online": true,
        "count": { "all": games },
        "profile": { "bio": format!("Bio of {}", username), "flag": "PL" },
        "perfs": {
            "bullet": { "games": games, "rating": rating, "rd": 45, "prog": 3 },
            "blitz": { "games": games / 2, "rating": rating - 100, "rd": 50, "prog": -2 },
            "storm": { "runs": 12, "score": 40 }
        }
    }))
    .into_response()
}

async fn tournaments(State(state): State<Arc<FakeState>>) -> Response {
    state.tournament_hits.fetch_add(1, Ordering::SeqCst);
    if state.malformed_tournaments {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }

    let tournament = |prefix: &str, i: usize, status: u16| {
        json!({
            "id": format!("{}-{}", prefix, i),
            "fullName": format!("Hourly {} Arena {}", prefix, i),
            "clock": { "limit": 180, "increment": 2 },
            "minutes": 57,
            "rated": true,
            "status": status,
            "nbPlayers": 10 * i,
            "startsAt": 1_700_000_000_000i64 + i as i64 * 3_600_000,
            "system": "arena",
            "variant": { "key": "standard", "short": "Std", "name": "Standard" },
            "perf": { "key": "blitz", "name": "Blitz", "position": 1 }
        })
    };

    let created: Vec<Value> = (0..state.created).map(|i| tournament("created", i, 10)).collect();
    let started: Vec<Value> = (0..state.started).map(|i| tournament("started", i, 30)).collect();
    let finished = vec![tournament("finished", 0, 60)];

    Json(json!({ "created": created, "started": started, "finished": finished })).into_response()
}
