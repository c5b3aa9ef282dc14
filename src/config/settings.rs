use std::time::Duration;

use crate::retry::RetryPolicy;

/// Headroom on top of the gateway's worst case before the dashboard gives up
const GATEWAY_RESPONSE_MARGIN: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct UpstreamSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "https://lichess.org/api".to_string(),
            user_agent: "LichessProfileViewer/1.0",
            timeout_ms: 10_000,
            max_retries: 2,
            retry_delay_ms: 1_000,
        }
    }
}

impl UpstreamSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, self.retry_delay())
    }

    /// Longest a single retried upstream call can take before it fails
    pub fn retry_window(&self) -> Duration {
        self.timeout() * self.retry_policy().max_attempts() + self.retry_delay() * self.max_retries
    }
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    /// Upper bound on per-player lookups issued by `/api/profiles`
    pub profile_fanout_limit: usize,
    pub tournament_limit: usize,
    pub default_profiles_count: u32,
    pub default_leaderboard_count: u32,
    /// Largest `nb` forwarded upstream; bigger values are clamped
    pub max_count: u32,
    pub default_variant: &'static str,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            profile_fanout_limit: 15,
            tournament_limit: 20,
            default_profiles_count: 20,
            default_leaderboard_count: 50,
            max_count: 200,
            default_variant: "bullet",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    pub gateway_url: String,
    pub timeout: Duration,
    pub profiles_count: u32,
    pub leaderboard_count: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            gateway_url: "http://localhost:5000/api".to_string(),
            timeout: Self::timeout_for(&UpstreamSettings::default()),
            profiles_count: 20,
            leaderboard_count: 50,
        }
    }
}

impl DashboardSettings {
    /// `/api/profiles` chains two retried upstream calls (leaderboard, then
    /// the concurrent profile lookups), so wait for both to run out.
    pub fn timeout_for(upstream: &UpstreamSettings) -> Duration {
        upstream.retry_window() * 2 + GATEWAY_RESPONSE_MARGIN
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub gateway: GatewaySettings,
    pub dashboard: DashboardSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upstream_url(mut self, base_url: impl Into<String>) -> Self {
        self.upstream.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry_policy(mut self, max_retries: u32, retry_delay_ms: u64) -> Self {
        self.upstream.max_retries = max_retries;
        self.upstream.retry_delay_ms = retry_delay_ms;
        self.dashboard.timeout = DashboardSettings::timeout_for(&self.upstream);
        self
    }

    pub fn with_fanout_limit(mut self, limit: usize) -> Self {
        self.gateway.profile_fanout_limit = limit;
        self
    }

    pub fn with_gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.dashboard.gateway_url = gateway_url.into().trim_end_matches('/').to_string();
        self
    }
}
