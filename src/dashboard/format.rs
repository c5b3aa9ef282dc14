use chrono::{DateTime, Utc};
use colored::Color;
use std::collections::BTreeMap;

use crate::domain::{Clock, Rating, TournamentStatus};

pub const BIO_PREVIEW_CHARS: usize = 50;

/// Color band for a rating value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Unrated,
    Beginner,
    Casual,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl RatingBand {
    /// A missing or zero rating is unrated
    pub fn of(rating: Option<u32>) -> Self {
        match rating.unwrap_or(0) {
            r if r < 1200 => RatingBand::Unrated,
            r if r < 1400 => RatingBand::Beginner,
            r if r < 1600 => RatingBand::Casual,
            r if r < 1800 => RatingBand::Intermediate,
            r if r < 2000 => RatingBand::Advanced,
            r if r < 2200 => RatingBand::Expert,
            _ => RatingBand::Master,
        }
    }

    pub fn color(&self) -> Color {
        let (r, g, b) = match self {
            RatingBand::Unrated => (0x66, 0x66, 0x66),
            RatingBand::Beginner => (0x99, 0x66, 0x33),
            RatingBand::Casual => (0x66, 0x99, 0x00),
            RatingBand::Intermediate => (0x00, 0x99, 0xcc),
            RatingBand::Advanced => (0x99, 0x66, 0xcc),
            RatingBand::Expert => (0xff, 0x99, 0x00),
            RatingBand::Master => (0xff, 0x66, 0x00),
        };
        Color::TrueColor { r, g, b }
    }
}

pub fn rank_medal(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

pub fn status_label(status: TournamentStatus) -> &'static str {
    match status {
        TournamentStatus::Started => "Started",
        TournamentStatus::Starting => "Starting Soon",
        TournamentStatus::Created => "Created",
        TournamentStatus::Unknown(_) => "Unknown",
    }
}

pub fn status_color(status: TournamentStatus) -> Color {
    match status {
        TournamentStatus::Started => Color::TrueColor { r: 0x4c, g: 0xaf, b: 0x50 },
        TournamentStatus::Starting => Color::TrueColor { r: 0xff, g: 0x98, b: 0x00 },
        TournamentStatus::Created => Color::TrueColor { r: 0x21, g: 0x96, b: 0xf3 },
        TournamentStatus::Unknown(_) => Color::TrueColor { r: 0x66, g: 0x66, b: 0x66 },
    }
}

pub fn variant_icon(variant: &str) -> &'static str {
    match variant.to_lowercase().as_str() {
        "chess960" => "🎲",
        "king of the hill" => "⛰️",
        "three-check" => "✓",
        "antichess" => "💀",
        "atomic" => "💥",
        "horde" => "🏰",
        "racing kings" => "🏃",
        "crazyhouse" => "🏠",
        _ => "♔",
    }
}

/// `minutes+increment`, e.g. `3+2`
pub fn format_time_control(clock: Option<Clock>) -> String {
    match clock {
        Some(Clock { limit, increment }) => format!("{}+{}", limit / 60, increment),
        None => "N/A".to_string(),
    }
}

pub fn format_start(starts_at: Option<i64>) -> String {
    starts_at
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.format("%b %-d, %I:%M %p UTC").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

pub fn format_progress(progress: i32) -> String {
    if progress > 0 {
        format!("+{}", progress)
    } else {
        progress.to_string()
    }
}

/// Thousands separated with commas
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_bio(bio: &str, max_chars: usize) -> String {
    if bio.chars().count() > max_chars {
        let head: String = bio.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        bio.to_string()
    }
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Best `limit` ratings that have both a rating and games, highest first
pub fn top_ratings(ratings: &BTreeMap<String, Rating>, limit: usize) -> Vec<(&str, &Rating)> {
    let mut played: Vec<(&str, &Rating)> = ratings
        .iter()
        .filter(|(_, r)| r.rating > 0 && r.games > 0)
        .map(|(variant, r)| (variant.as_str(), r))
        .collect();
    played.sort_by(|a, b| b.1.rating.cmp(&a.1.rating));
    played.truncate(limit);
    played
}
