//! Canonical library models and the wire shapes they decode from

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Steam media CDN base for game icons
pub const STEAM_MEDIA_URL: &str =
    "https://media.steampowered.com/steamcommunity/public/images/apps";

/// Placeholder some payloads carry in place of a real icon hash
const UNDEFINED_TOKEN: &str = "undefined";

/// Minutes of recorded playtime, or a value that could not be read as one.
///
/// Arithmetic always goes through [`Playtime::minutes`], which treats
/// `Invalid` as zero; formatting keeps the distinction so a corrupt value
/// never renders as "never played".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playtime {
    Minutes(u32),
    Invalid,
}

impl Default for Playtime {
    fn default() -> Self {
        Playtime::Minutes(0)
    }
}

impl Playtime {
    /// Minute count usable in sums and comparisons. `Invalid` counts as zero.
    pub fn minutes(&self) -> u32 {
        match self {
            Playtime::Minutes(m) => *m,
            Playtime::Invalid => 0,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Playtime::Invalid)
    }

    /// Read a raw JSON value the way a lenient numeric field is read:
    /// null and empty strings are zero, numeric strings parse, fractional
    /// minutes floor, everything else is `Invalid`.
    fn from_json(value: &serde_json::Value) -> Playtime {
        match value {
            serde_json::Value::Null => Playtime::Minutes(0),
            serde_json::Value::Number(n) => {
                if let Some(m) = n.as_u64() {
                    Playtime::Minutes(m.min(u64::from(u32::MAX)) as u32)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f >= 0.0 => Playtime::from_float(f),
                        _ => Playtime::Invalid,
                    }
                }
            }
            serde_json::Value::String(s) => Playtime::from_text(s),
            _ => Playtime::Invalid,
        }
    }

    fn from_text(text: &str) -> Playtime {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Playtime::Minutes(0);
        }
        if let Ok(m) = trimmed.parse::<u32>() {
            return Playtime::Minutes(m);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 => Playtime::from_float(f),
            _ => Playtime::Invalid,
        }
    }

    fn from_float(f: f64) -> Playtime {
        Playtime::Minutes(f.floor().min(f64::from(u32::MAX)) as u32)
    }
}

impl Serialize for Playtime {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.minutes())
    }
}

impl<'de> Deserialize<'de> for Playtime {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Playtime::from_json(&value))
    }
}

fn de_app_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(app_id_from_json(&value))
}

fn app_id_from_json(value: &serde_json::Value) -> u64 {
    match value {
        serde_json::Value::Number(n) => n.as_u64().unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// A game record as it arrives off the wire, in either naming convention.
///
/// The shape is picked once at decode time: a record carrying `appId` is
/// taken as already canonical, even when snake-cased fields are present too.
/// Everything past [`crate::normalize::normalize`] only sees [`Game`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawGame {
    /// Already-canonical payload keyed by `appId`
    Canonical {
        #[serde(rename = "appId", deserialize_with = "de_app_id")]
        app_id: u64,
        #[serde(default)]
        name: String,
        #[serde(rename = "playtimeMinutes", alias = "playtimeForever", default)]
        playtime: Playtime,
        #[serde(rename = "iconUrl", alias = "imgIconUrl", default)]
        icon_url: String,
    },
    /// Snake-cased service payload
    Snake {
        #[serde(default, deserialize_with = "de_app_id")]
        app_id: u64,
        #[serde(default)]
        name: String,
        #[serde(rename = "playtime_forever", default)]
        playtime: Playtime,
        #[serde(rename = "img_icon_url", default)]
        icon_url: String,
    },
}

/// Canonical game record every layer past the decode boundary works with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    #[serde(rename = "appId")]
    pub app_id: u64,
    pub name: String,
    #[serde(rename = "playtimeMinutes")]
    pub playtime: Playtime,
    #[serde(rename = "iconUrl")]
    pub icon_url: String,
}

impl Game {
    /// Icon URL if the record actually has one. Blank values and the
    /// literal `undefined` placeholder both mean no icon.
    pub fn icon(&self) -> Option<&str> {
        let url = self.icon_url.trim();
        if url.is_empty() || url.contains(UNDEFINED_TOKEN) {
            None
        } else {
            Some(url)
        }
    }

    pub fn never_played(&self) -> bool {
        self.playtime.minutes() == 0
    }

    pub fn playtime_category(&self) -> PlaytimeCategory {
        PlaytimeCategory::for_minutes(self.playtime.minutes())
    }
}

/// Build the media CDN URL for a bare icon hash. Empty for blank or
/// placeholder hashes.
pub fn media_icon_url(app_id: u64, icon_hash: &str) -> String {
    let hash = icon_hash.trim();
    if hash.is_empty() || hash.contains(UNDEFINED_TOKEN) {
        return String::new();
    }
    format!("{}/{}/{}.jpg", STEAM_MEDIA_URL, app_id, hash)
}

/// Sort criterion accepted by the library service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most played first (the service default)
    #[default]
    Playtime,
    /// Alphabetical by title
    Name,
}

impl SortBy {
    /// Parse a query-parameter value; anything unrecognized falls back to
    /// the playtime ordering.
    pub fn parse(value: &str) -> SortBy {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => SortBy::Name,
            _ => SortBy::Playtime,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Playtime => "playtime",
            SortBy::Name => "name",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engagement buckets derived from total minutes played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaytimeCategory {
    NeverPlayed,
    Casual,
    Regular,
    Hardcore,
}

impl PlaytimeCategory {
    /// Bucket for a minute count: 0 / up to 3 h / up to 20 h / beyond
    pub fn for_minutes(minutes: u32) -> PlaytimeCategory {
        match minutes {
            0 => PlaytimeCategory::NeverPlayed,
            1..=180 => PlaytimeCategory::Casual,
            181..=1200 => PlaytimeCategory::Regular,
            _ => PlaytimeCategory::Hardcore,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaytimeCategory::NeverPlayed => "Never played",
            PlaytimeCategory::Casual => "Casual",
            PlaytimeCategory::Regular => "Regular",
            PlaytimeCategory::Hardcore => "Hardcore",
        }
    }
}

/// Aggregate payload as served by the dashboard endpoint. Accepts both
/// naming conventions like the game records do.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDashboard {
    #[serde(default, alias = "totalGames")]
    pub total_games: u32,
    #[serde(default, alias = "totalMinutes")]
    pub total_minutes: u64,
    #[serde(default, alias = "totalHours")]
    pub total_hours: f64,
    #[serde(default, alias = "top5MostPlayed")]
    pub top5_most_played: Vec<RawGame>,
    #[serde(default, alias = "mostRecentGame")]
    pub most_recent_game: Option<RawGame>,
    #[serde(default, alias = "generatedAt")]
    pub generated_at: String,
}

/// Canonical dashboard aggregate after normalization.
///
/// `total_hours` is whatever the service computed; it is never rederived
/// locally. `top5_most_played` keeps the service ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub total_games: u32,
    pub total_minutes: u64,
    pub total_hours: f64,
    pub top5_most_played: Vec<Game>,
    pub most_recent_game: Option<Game>,
    pub generated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn playtime(value: serde_json::Value) -> Playtime {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn playtime_reads_numbers() {
        assert_eq!(playtime(json!(90)), Playtime::Minutes(90));
        assert_eq!(playtime(json!(0)), Playtime::Minutes(0));
        assert_eq!(playtime(json!(90.9)), Playtime::Minutes(90));
        assert_eq!(playtime(json!(-5)), Playtime::Invalid);
        assert_eq!(playtime(json!(-0.5)), Playtime::Invalid);
    }

    #[test]
    fn playtime_reads_strings() {
        assert_eq!(playtime(json!("42")), Playtime::Minutes(42));
        assert_eq!(playtime(json!(" 42 ")), Playtime::Minutes(42));
        assert_eq!(playtime(json!("")), Playtime::Minutes(0));
        assert_eq!(playtime(json!("   ")), Playtime::Minutes(0));
        assert_eq!(playtime(json!("abc")), Playtime::Invalid);
        assert_eq!(playtime(json!("-5")), Playtime::Invalid);
    }

    #[test]
    fn playtime_null_and_junk() {
        assert_eq!(playtime(json!(null)), Playtime::Minutes(0));
        assert_eq!(playtime(json!(true)), Playtime::Invalid);
        assert_eq!(playtime(json!([1, 2])), Playtime::Invalid);
        assert_eq!(playtime(json!({"m": 3})), Playtime::Invalid);
    }

    #[test]
    fn playtime_serializes_as_minutes() {
        assert_eq!(serde_json::to_value(Playtime::Minutes(75)).unwrap(), json!(75));
        assert_eq!(serde_json::to_value(Playtime::Invalid).unwrap(), json!(0));
    }

    #[test]
    fn icon_rejects_blank_and_placeholder() {
        let mut game = Game {
            app_id: 10,
            name: "Counter-Strike".to_string(),
            playtime: Playtime::Minutes(600),
            icon_url: "https://example.com/icon.jpg".to_string(),
        };
        assert_eq!(game.icon(), Some("https://example.com/icon.jpg"));

        game.icon_url = String::new();
        assert_eq!(game.icon(), None);
        game.icon_url = "   ".to_string();
        assert_eq!(game.icon(), None);
        game.icon_url = "https://example.com/undefined.jpg".to_string();
        assert_eq!(game.icon(), None);
    }

    #[test]
    fn media_url_for_hash() {
        assert_eq!(
            media_icon_url(10, " abc123 "),
            "https://media.steampowered.com/steamcommunity/public/images/apps/10/abc123.jpg"
        );
        assert_eq!(media_icon_url(10, ""), "");
        assert_eq!(media_icon_url(10, "undefined"), "");
    }

    #[test]
    fn sort_by_parses_loosely() {
        assert_eq!(SortBy::parse("name"), SortBy::Name);
        assert_eq!(SortBy::parse(" NAME "), SortBy::Name);
        assert_eq!(SortBy::parse("playtime"), SortBy::Playtime);
        assert_eq!(SortBy::parse("whatever"), SortBy::Playtime);
        assert_eq!(SortBy::default().to_string(), "playtime");
    }

    #[test]
    fn category_boundaries() {
        assert_eq!(PlaytimeCategory::for_minutes(0), PlaytimeCategory::NeverPlayed);
        assert_eq!(PlaytimeCategory::for_minutes(1), PlaytimeCategory::Casual);
        assert_eq!(PlaytimeCategory::for_minutes(180), PlaytimeCategory::Casual);
        assert_eq!(PlaytimeCategory::for_minutes(181), PlaytimeCategory::Regular);
        assert_eq!(PlaytimeCategory::for_minutes(1200), PlaytimeCategory::Regular);
        assert_eq!(PlaytimeCategory::for_minutes(1201), PlaytimeCategory::Hardcore);
    }

    #[test]
    fn category_labels() {
        assert_eq!(PlaytimeCategory::NeverPlayed.label(), "Never played");
        assert_eq!(PlaytimeCategory::Casual.label(), "Casual");
        assert_eq!(PlaytimeCategory::Regular.label(), "Regular");
        assert_eq!(PlaytimeCategory::Hardcore.label(), "Hardcore");
    }

    #[test]
    fn never_played_covers_zero_and_invalid() {
        let mut game = Game {
            app_id: 1,
            name: "Shelved".to_string(),
            playtime: Playtime::Minutes(0),
            icon_url: String::new(),
        };
        assert!(game.never_played());

        game.playtime = Playtime::Minutes(5);
        assert!(!game.never_played());

        // unreadable playtime counts as zero, so it reads as never played
        game.playtime = Playtime::Invalid;
        assert!(game.never_played());
    }

    #[test]
    fn game_serializes_with_canonical_names() {
        let game = Game {
            app_id: 440,
            name: "Team Fortress 2".to_string(),
            playtime: Playtime::Minutes(120),
            icon_url: String::new(),
        };
        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(
            value,
            json!({"appId": 440, "name": "Team Fortress 2", "playtimeMinutes": 120, "iconUrl": ""})
        );
    }
}
