use anyhow::Result;

use lichess_dashboard::cli::{Cli, Command};
use lichess_dashboard::config::AppConfig;
use lichess_dashboard::{
    handle_leaderboard, handle_profile, handle_serve, handle_tournaments, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(&cli)
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config = AppConfig::new().with_gateway_url(&cli.gateway_url);

    match &cli.command {
        Command::Serve {
            port,
            upstream_url,
            max_retries,
            retry_delay_ms,
            fanout_limit,
        } => {
            let config = config
                .with_upstream_url(upstream_url)
                .with_retry_policy(*max_retries, *retry_delay_ms)
                .with_fanout_limit(*fanout_limit);
            handle_serve(*port, config)
        }
        Command::Profile { username, game_type } => {
            handle_profile(config, username.as_deref(), game_type)
        }
        Command::Leaderboard { game_type } => handle_leaderboard(config, game_type),
        Command::Tournaments => handle_tournaments(config),
    }
}
