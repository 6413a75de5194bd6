//! Locally computed library statistics and badge progress

use serde::Serialize;

use crate::models::{Game, LibrarySummary, PlaytimeCategory, SortBy};

/// Owned games needed before the collector badge unlocks
pub const COLLECTOR_THRESHOLD: u64 = 50;
/// Total minutes needed before the marathon badge unlocks (100 hours)
pub const MARATHON_THRESHOLD_MINUTES: u64 = 6000;

/// Round to one decimal, half away from zero
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate statistics computed over a normalized game list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total_games: usize,
    pub total_minutes: u64,
    pub total_hours: f64,
    /// Total hours divided by the games actually played, one decimal
    pub average_hours: f64,
    /// First game holding the maximum playtime; absent when nothing was played
    pub most_played_game: Option<Game>,
    pub games_with_playtime: usize,
}

impl LibraryStats {
    /// Compute the stats for a game list. Empty input gives the zero stats.
    /// Unreadable playtimes count as zero minutes here; only formatting
    /// tells them apart from never-played titles.
    pub fn from_games(games: &[Game]) -> LibraryStats {
        if games.is_empty() {
            return LibraryStats::default();
        }

        let total_minutes: u64 = games.iter().map(|g| u64::from(g.playtime.minutes())).sum();
        let total_hours = round1(total_minutes as f64 / 60.0);

        let games_with_playtime = games.iter().filter(|g| !g.never_played()).count();
        let average_hours = if games_with_playtime > 0 {
            round1(total_hours / games_with_playtime as f64)
        } else {
            0.0
        };

        // strict > keeps the first of tied maxima
        let mut most_played = &games[0];
        for game in &games[1..] {
            if game.playtime.minutes() > most_played.playtime.minutes() {
                most_played = game;
            }
        }
        let most_played_game = if most_played.never_played() {
            None
        } else {
            Some(most_played.clone())
        };

        LibraryStats {
            total_games: games.len(),
            total_minutes,
            total_hours,
            average_hours,
            most_played_game,
            games_with_playtime,
        }
    }

    pub fn games_never_played(&self) -> usize {
        self.total_games - self.games_with_playtime
    }

    /// Badge progress for the locally computed totals
    pub fn badges(&self) -> Vec<BadgeStatus> {
        library_badges(self.total_games as u64, self.total_minutes)
    }
}

impl LibrarySummary {
    /// Badge progress for the service-side totals
    pub fn badges(&self) -> Vec<BadgeStatus> {
        library_badges(u64::from(self.total_games), self.total_minutes)
    }
}

/// Badge kinds the dashboard surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeKind {
    Collector,
    Marathon,
}

/// Progress toward one badge threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStatus {
    pub kind: BadgeKind,
    pub unlocked: bool,
    /// Games short for collector, whole hours short for marathon; zero once
    /// unlocked
    pub remaining: u64,
}

impl BadgeStatus {
    /// Collector unlocks at 50 owned games
    pub fn collector(total_games: u64) -> BadgeStatus {
        BadgeStatus {
            kind: BadgeKind::Collector,
            unlocked: total_games >= COLLECTOR_THRESHOLD,
            remaining: COLLECTOR_THRESHOLD.saturating_sub(total_games),
        }
    }

    /// Marathon unlocks at 6000 total minutes
    pub fn marathon(total_minutes: u64) -> BadgeStatus {
        let short = MARATHON_THRESHOLD_MINUTES.saturating_sub(total_minutes);
        BadgeStatus {
            kind: BadgeKind::Marathon,
            unlocked: total_minutes >= MARATHON_THRESHOLD_MINUTES,
            remaining: (short as f64 / 60.0).round() as u64,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind {
            BadgeKind::Collector => "Collector",
            BadgeKind::Marathon => "Marathon",
        }
    }
}

/// Both badge progress entries for the given totals
pub fn library_badges(total_games: u64, total_minutes: u64) -> Vec<BadgeStatus> {
    vec![
        BadgeStatus::collector(total_games),
        BadgeStatus::marathon(total_minutes),
    ]
}

/// Order games the way the service does: most played first, or by title.
/// Ties keep their incoming order.
pub fn sort_games(games: &mut [Game], sort: SortBy) {
    match sort {
        SortBy::Playtime => {
            games.sort_by(|a, b| b.playtime.minutes().cmp(&a.playtime.minutes()))
        }
        SortBy::Name => {
            games.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
    }
}

/// Games grouped by engagement bucket
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaytimeBuckets {
    pub never_played: Vec<Game>,
    pub casual: Vec<Game>,
    pub regular: Vec<Game>,
    pub hardcore: Vec<Game>,
}

/// Split a library into the four engagement buckets
pub fn categorize_games(games: &[Game]) -> PlaytimeBuckets {
    let mut buckets = PlaytimeBuckets::default();
    for game in games {
        let bucket = match game.playtime_category() {
            PlaytimeCategory::NeverPlayed => &mut buckets.never_played,
            PlaytimeCategory::Casual => &mut buckets.casual,
            PlaytimeCategory::Regular => &mut buckets.regular,
            PlaytimeCategory::Hardcore => &mut buckets.hardcore,
        };
        bucket.push(game.clone());
    }
    buckets
}
