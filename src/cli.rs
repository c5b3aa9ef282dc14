use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lichess dashboard: API gateway and terminal views")]
pub struct Cli {
    /// Gateway base URL used by the dashboard commands
    #[arg(
        long,
        global = true,
        env = "DASHBOARD_GATEWAY_URL",
        default_value = "http://localhost:5000/api"
    )]
    pub gateway_url: String,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the API gateway
    Serve {
        /// Port number
        #[arg(short, long, env = "PORT", default_value_t = 5000)]
        port: u16,
        /// Lichess API base URL
        #[arg(long, env = "LICHESS_API_URL", default_value = "https://lichess.org/api")]
        upstream_url: String,
        /// Extra attempts after a failed upstream call
        #[arg(long, default_value_t = 2)]
        max_retries: u32,
        /// Pause between attempts, in milliseconds
        #[arg(long, default_value_t = 1000)]
        retry_delay_ms: u64,
        /// Maximum profile lookups per /api/profiles request
        #[arg(long, default_value_t = 15)]
        fanout_limit: usize,
    },
    /// Show top player profiles, or a single player when USERNAME is given
    Profile {
        username: Option<String>,
        /// Leaderboard used to pick the top players
        #[arg(short, long, default_value = "bullet")]
        game_type: String,
    },
    /// Show the top players of a game type
    Leaderboard {
        #[arg(default_value = "bullet")]
        game_type: String,
    },
    /// Show created and started tournaments
    Tournaments,
}
