//! Display formatting for playtime values and the dashboard

use serde::Serialize;

use crate::models::{Game, LibrarySummary, Playtime};
use crate::stats::round1;

/// Text shown for a playtime value that could not be read
pub const INVALID_PLAYTIME_TEXT: &str = "invalid";
/// Text shown for zero minutes of playtime
pub const NEVER_PLAYED_TEXT: &str = "never played";

/// Human-readable playtime: plain minutes under an hour, one-decimal hours
/// from an hour up. Zero and unreadable values get their own sentinels.
pub fn format_playtime(playtime: Playtime) -> String {
    if playtime.is_invalid() {
        return INVALID_PLAYTIME_TEXT.to_string();
    }
    let minutes = playtime.minutes();
    if minutes == 0 {
        return NEVER_PLAYED_TEXT.to_string();
    }
    if minutes < 60 {
        return format!("{}min", minutes);
    }
    format!("{}h", round1(f64::from(minutes) / 60.0))
}

/// A game paired with its display-ready playtime text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayGame {
    #[serde(flatten)]
    pub game: Game,
    #[serde(rename = "playtimeText")]
    pub playtime_text: String,
}

impl DisplayGame {
    pub fn new(game: &Game) -> DisplayGame {
        DisplayGame {
            game: game.clone(),
            playtime_text: format_playtime(game.playtime),
        }
    }
}

/// Dashboard summary ready for display binding
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayDashboard {
    pub total_games: u32,
    pub total_minutes: u64,
    pub total_hours: f64,
    pub total_hours_text: String,
    /// Total minutes spread over every owned game, played or not. Coarser
    /// than [`crate::stats::LibraryStats::average_hours`], which divides by
    /// played games only.
    pub average_hours: f64,
    pub average_hours_text: String,
    pub has_games: bool,
    pub has_playtime: bool,
    pub top5_most_played: Vec<DisplayGame>,
    pub most_recent_game: Option<DisplayGame>,
    pub generated_at: String,
}

/// Prepare a dashboard summary for display binding.
pub fn format_dashboard(summary: &LibrarySummary) -> DisplayDashboard {
    let has_games = summary.total_games > 0;
    let has_playtime = summary.total_minutes > 0;

    let total_hours_text = if summary.total_hours < 1.0 {
        format!("{}min", summary.total_minutes)
    } else {
        format!("{}h", summary.total_hours)
    };

    let average_hours = if has_games && has_playtime {
        round1(summary.total_minutes as f64 / f64::from(summary.total_games) / 60.0)
    } else {
        0.0
    };

    DisplayDashboard {
        total_games: summary.total_games,
        total_minutes: summary.total_minutes,
        total_hours: summary.total_hours,
        total_hours_text,
        average_hours,
        average_hours_text: format!("{}h", average_hours),
        has_games,
        has_playtime,
        top5_most_played: summary.top5_most_played.iter().map(DisplayGame::new).collect(),
        most_recent_game: summary.most_recent_game.as_ref().map(DisplayGame::new),
        generated_at: summary.generated_at.clone(),
    }
}
