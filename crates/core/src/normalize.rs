//! Conversion of wire records into canonical ones

use serde_json::Value;

use crate::error::{Result, ShelfwareError};
use crate::models::{Game, LibrarySummary, RawDashboard, RawGame};

/// Convert one wire record into the canonical form.
///
/// Total by construction: both wire shapes default every missing field at
/// decode time, so any record that decoded at all converts without error.
pub fn normalize(raw: RawGame) -> Game {
    match raw {
        RawGame::Canonical { app_id, name, playtime, icon_url }
        | RawGame::Snake { app_id, name, playtime, icon_url } => Game {
            app_id,
            name,
            playtime,
            icon_url,
        },
    }
}

/// Element-wise normalization. Order and length are preserved, nothing is
/// filtered out.
pub fn normalize_all(raws: Vec<RawGame>) -> Vec<Game> {
    raws.into_iter().map(normalize).collect()
}

/// Normalize the dashboard aggregate, including the games nested in it.
pub fn normalize_summary(raw: RawDashboard) -> LibrarySummary {
    LibrarySummary {
        total_games: raw.total_games,
        total_minutes: raw.total_minutes,
        total_hours: raw.total_hours,
        top5_most_played: normalize_all(raw.top5_most_played),
        most_recent_game: raw.most_recent_game.map(normalize),
        generated_at: raw.generated_at,
    }
}

/// Decode and normalize one record. A value that is not a record at all is
/// a contract violation and fails with [`ShelfwareError::InvalidInput`].
pub fn game_from_value(value: Value) -> Result<Game> {
    let raw: RawGame = serde_json::from_value(value)
        .map_err(|e| ShelfwareError::InvalidInput(format!("not a game record: {e}")))?;
    Ok(normalize(raw))
}

/// Decode and normalize a whole response array.
pub fn games_from_value(value: Value) -> Result<Vec<Game>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ShelfwareError::InvalidInput(format!(
                "expected an array of game records, got {}",
                value_kind(&other)
            )))
        }
    };
    items.into_iter().map(game_from_value).collect()
}

/// Decode and normalize a dashboard payload.
pub fn summary_from_value(value: Value) -> Result<LibrarySummary> {
    let raw: RawDashboard = serde_json::from_value(value)
        .map_err(|e| ShelfwareError::InvalidInput(format!("not a dashboard payload: {e}")))?;
    Ok(normalize_summary(raw))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
