use colored::Colorize;
use std::fmt::Write;

use super::format::{
    capitalize, format_count, format_progress, format_start, format_time_control, rank_medal,
    status_color, status_label, top_ratings, truncate_bio, variant_icon, RatingBand,
    BIO_PREVIEW_CHARS,
};
use super::view::ViewState;
use crate::domain::{LeaderboardEntry, PlayerProfile, TournamentSummary};

const REFRESH_HINT: &str = "Run the command again to refresh.";

/// Render a view in its current state with `render` for loaded data
pub fn render_state<T>(
    state: &ViewState<T>,
    loading: &str,
    render: impl Fn(&T) -> String,
) -> String {
    match state {
        ViewState::Loading => format!("{}\n", loading.dimmed()),
        ViewState::Failed(message) => format!("{}\n{}\n", message.red(), REFRESH_HINT.dimmed()),
        ViewState::Loaded(data) => render(data),
    }
}

fn colored_rating(rating: u32) -> String {
    let band = RatingBand::of(Some(rating));
    rating.to_string().color(band.color()).to_string()
}

fn player_name(title: Option<&str>, username: &str, online: bool) -> String {
    let mut name = String::new();
    if let Some(title) = title {
        name.push_str(&format!("{} ", title.yellow().bold()));
    }
    name.push_str(&username.bold().to_string());
    if online {
        name.push_str(&format!(" {}", "●".green()));
    }
    name
}

pub fn render_profile_grid(profiles: &[PlayerProfile]) -> String {
    let mut out = format!("{}\n\n", "♔ Top Lichess players profiles".bold());
    if profiles.is_empty() {
        out.push_str("No profiles available.\n");
        return out;
    }

    for (i, profile) in profiles.iter().enumerate() {
        let _ = writeln!(
            out,
            "#{} {}",
            i + 1,
            player_name(profile.title.as_deref(), &profile.username, profile.online)
        );
        if let Some(country) = &profile.country {
            let _ = writeln!(out, "   📍 {}", country);
        }
        let _ = writeln!(out, "   {}", truncate_bio(&profile.bio, BIO_PREVIEW_CHARS).italic());
        let ratings: Vec<String> = top_ratings(&profile.ratings, 3)
            .into_iter()
            .map(|(variant, r)| format!("{} {}", variant, colored_rating(r.rating)))
            .collect();
        let _ = writeln!(
            out,
            "   Games: {}   {}",
            format_count(profile.games_played),
            ratings.join("  ")
        );
        out.push('\n');
    }
    out
}

pub fn render_profile_card(profile: &PlayerProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        player_name(profile.title.as_deref(), &profile.username, profile.online)
    );
    if let Some(country) = &profile.country {
        let _ = writeln!(out, "📍 {}", country);
    }
    if let Some(avatar) = &profile.profile_image {
        let _ = writeln!(out, "Avatar: {}", avatar);
    }
    let _ = writeln!(out, "{}", profile.bio.italic());
    let _ = writeln!(out, "\nTotal Games: {}", format_count(profile.games_played));

    let _ = writeln!(out, "\n{}", "Ratings".bold());
    for (variant, rating) in &profile.ratings {
        let deviation = rating
            .rd
            .map(|rd| format!("  ±{}", rd.round()))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {:<16} {:>6}  {} games{}",
            capitalize(variant),
            colored_rating(rating.rating),
            rating.games,
            deviation
        );
    }
    out
}

/// Pad `styled` to `width` columns using the length of its unstyled text
fn pad_styled(styled: String, plain: &str, width: usize) -> String {
    let fill = width.saturating_sub(plain.chars().count());
    format!("{}{}", styled, " ".repeat(fill))
}

fn plain_player_name(title: Option<&str>, username: &str, online: bool) -> String {
    let mut name = String::new();
    if let Some(title) = title {
        name.push_str(title);
        name.push(' ');
    }
    name.push_str(username);
    if online {
        name.push_str(" ●");
    }
    name
}

pub fn render_leaderboard(title: &str, entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No leaderboard data available for this game type.\n".to_string();
    }

    let mut out = format!("{}\n\n", format!("🏆 {} Top Players", title).bold());
    let _ = writeln!(out, "{:<6} {:<32} {:>6} {:>8}", "Rank", "Player", "Rating", "Progress");

    for (i, entry) in entries.iter().enumerate() {
        let mut name = player_name(entry.title.as_deref(), &entry.username, entry.online);
        let mut plain = plain_player_name(entry.title.as_deref(), &entry.username, entry.online);
        if entry.patron {
            name.push_str(" 👑");
            plain.push_str(" 👑");
        }

        let rating = format!("{:>6}", entry.rating);
        let rating = rating.color(RatingBand::of(Some(entry.rating)).color());
        let progress = format!("{:>8}", format_progress(entry.progress));
        let progress = if entry.progress >= 0 {
            progress.green()
        } else {
            progress.red()
        };
        let _ = writeln!(
            out,
            "{:<6} {} {} {}",
            rank_medal(i + 1),
            pad_styled(name, &plain, 32),
            rating,
            progress
        );
    }
    out
}

pub fn render_tournaments(tournaments: &[TournamentSummary]) -> String {
    if tournaments.is_empty() {
        return "No tournaments available right now.\n".to_string();
    }

    let mut out = format!("{}\n\n", "🏁 Tournaments".bold());
    for tournament in tournaments {
        let _ = writeln!(
            out,
            "{} {}  [{}]",
            variant_icon(&tournament.variant),
            tournament.variant,
            status_label(tournament.status).color(status_color(tournament.status))
        );
        let _ = writeln!(out, "  {}", tournament.name.bold());
        let _ = writeln!(out, "  ⏱️ Time Control: {}", format_time_control(tournament.time_control));
        let _ = writeln!(out, "  📅 Starts: {}", format_start(tournament.starts_at));
        let _ = writeln!(out, "  👥 Players: {}", tournament.nb_players);
        let _ = writeln!(out, "  🏆 Rated: {}", if tournament.rated { "Yes" } else { "No" });
        if let Some(perf) = &tournament.perf {
            let _ = writeln!(out, "  🎯 Category: {}", perf);
        }
        if let Some(winner) = &tournament.winner {
            let _ = writeln!(out, "  🥇 Winner: {}", winner);
        }
        let _ = writeln!(out, "  https://lichess.org/tournament/{}\n", tournament.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Clock, Rating, TournamentStatus, NO_BIO};
    use std::collections::BTreeMap;

    fn profile() -> PlayerProfile {
        PlayerProfile {
            username: "Hikaru".to_string(),
            bio: "x".repeat(80),
            games_played: 45210,
            ratings: BTreeMap::from([
                ("bullet".to_string(), Rating { rating: 3200, games: 9000, rd: Some(44.6), prog: None }),
                ("blitz".to_string(), Rating { rating: 3300, games: 30000, rd: None, prog: None }),
            ]),
            profile_image: None,
            title: Some("GM".to_string()),
            online: true,
            country: Some("US".to_string()),
        }
    }

    #[test]
    fn test_grid_truncates_bio_and_ranks() {
        let out = render_profile_grid(&[profile()]);

        assert!(out.contains("#1"));
        assert!(out.contains("Hikaru"));
        assert!(out.contains(&format!("{}...", "x".repeat(50))));
        assert!(!out.contains(&"x".repeat(51)));
        assert!(out.contains("45,210"));
    }

    #[test]
    fn test_card_lists_every_rating() {
        let mut p = profile();
        p.bio = NO_BIO.to_string();

        let out = render_profile_card(&p);

        assert!(out.contains("Bullet"));
        assert!(out.contains("Blitz"));
        assert!(out.contains("±45"));
        assert!(out.contains(NO_BIO));
    }

    #[test]
    fn test_leaderboard_rows() {
        let entries = vec![
            LeaderboardEntry {
                username: "a".to_string(),
                title: None,
                rating: 3000,
                progress: 5,
                online: false,
                patron: true,
            },
            LeaderboardEntry {
                username: "b".to_string(),
                title: Some("IM".to_string()),
                rating: 2900,
                progress: -3,
                online: true,
                patron: false,
            },
        ];

        let out = render_leaderboard("Blitz", &entries);

        assert!(out.contains("Blitz Top Players"));
        assert!(out.contains("🥇"));
        assert!(out.contains("🥈"));
        assert!(out.contains("👑"));
        assert!(out.contains("+5"));
        assert!(out.contains("-3"));
        assert!(render_leaderboard("Blitz", &[]).contains("No leaderboard data"));
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn column_of(line: &str, needle: &str) -> usize {
        let plain = strip_ansi(line);
        let byte = plain.find(needle).unwrap();
        plain[..byte].chars().count()
    }

    #[test]
    fn test_leaderboard_columns_line_up_with_styling() {
        let entries = vec![
            LeaderboardEntry {
                username: "DrNykterstein".to_string(),
                title: Some("GM".to_string()),
                rating: 3150,
                progress: 12,
                online: true,
                patron: true,
            },
            LeaderboardEntry {
                username: "z".to_string(),
                title: None,
                rating: 1100,
                progress: -4,
                online: false,
                patron: false,
            },
        ];

        let out = render_leaderboard("Bullet", &entries);
        let rows: Vec<&str> = out.lines().skip(3).collect();

        assert_eq!(column_of(rows[0], "3150"), column_of(rows[1], "1100"));
        assert_eq!(column_of(rows[0], "+12") + 3, column_of(rows[1], "-4") + 2);
        assert_eq!(strip_ansi(rows[0]).chars().count(), strip_ansi(rows[1]).chars().count());
    }

    #[test]
    fn test_tournament_card() {
        let tournament = TournamentSummary {
            id: "xyz".to_string(),
            name: "Hourly Blitz Arena".to_string(),
            variant: "Standard".to_string(),
            rated: true,
            time_control: Some(Clock { limit: 180, increment: 2 }),
            starts_at: None,
            status: TournamentStatus::Starting,
            nb_players: 42,
            winner: None,
            perf: Some("Blitz".to_string()),
            minutes: Some(57),
            system: "arena".to_string(),
        };

        let out = render_tournaments(&[tournament]);

        assert!(out.contains("Starting Soon"));
        assert!(out.contains("3+2"));
        assert!(out.contains("TBD"));
        assert!(out.contains("Category: Blitz"));
        assert!(!out.contains("Winner"));
        assert!(out.contains("https://lichess.org/tournament/xyz"));
    }

    #[test]
    fn test_failed_state_has_refresh_hint() {
        let state: ViewState<Vec<TournamentSummary>> = ViewState::Failed("boom".to_string());

        let out = render_state(&state, "Loading tournaments...", |t| render_tournaments(t));

        assert!(out.contains("boom"));
        assert!(out.contains(REFRESH_HINT));
    }
}
