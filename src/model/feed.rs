//! Wire types for the PointStreak scoreboard feed.
//!
//! The feed is loosely typed: numbers often arrive as strings and nested objects are sometimes
//! missing or replaced by empty strings. Every field here decodes to `None` rather than failing.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedGame {
    #[serde(default, deserialize_with = "lenient_text")]
    pub gameid: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gamedate: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub hometeam: Option<FeedTeam>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub awayteam: Option<FeedTeam>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub homescore: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub awayscore: Option<i32>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub gamestatus: Option<FeedGameStatus>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub gametime: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub field: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedTeam {
    #[serde(default, deserialize_with = "lenient_text")]
    pub teamname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedGameStatus {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub inningsplayed: Option<i32>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub regulationinnings: Option<i32>,
}

/// Game entries pulled out of a scoreboard document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scoreboard {
    pub games: Vec<FeedGame>,
    /// Entries that were present but are not game objects.
    pub dropped: usize,
}

impl Scoreboard {
    /// Entries the feed listed, decodable or not.
    pub fn entries(&self) -> usize {
        self.games.len() + self.dropped
    }
}

/// Pull the game entries out of a scoreboard document.
///
/// A non-null `games` field wins. Otherwise a non-null `schedule.game` is used, either a single
/// game or a list of them. Anything else yields no games; an unrecognized shape is not an error.
pub fn normalize_scoreboard(document: &Value) -> Scoreboard {
    let entries: Vec<&Value> = match non_null(document.get("games")) {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => {
            warn!(kind = value_kind(other), "Scoreboard 'games' is not an array; ignoring it");
            Vec::new()
        }
        None => match non_null(document.pointer("/schedule/game")) {
            Some(Value::Array(items)) => items.iter().collect(),
            Some(game) => vec![game],
            None => Vec::new(),
        },
    };

    let mut scoreboard = Scoreboard::default();
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!(index, kind = value_kind(entry), "Dropping scoreboard entry that is not a game object");
            scoreboard.dropped += 1;
            continue;
        }
        match FeedGame::deserialize(entry) {
            Ok(game) => scoreboard.games.push(game),
            Err(e) => {
                warn!(index, error = %e, "Dropping scoreboard entry that failed to decode");
                scoreboard.dropped += 1;
            }
        }
    }
    scoreboard
}

/// Decodable game entries only, in feed order.
pub fn normalize_games(document: &Value) -> Vec<FeedGame> {
    normalize_scoreboard(document).games
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Strings pass through, numbers and booleans are rendered as text, everything else is `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Integers or numeric strings that fit in an `i32`; blank and non-numeric values are `None`.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    })
}

/// Nested objects of the wrong shape (e.g. `""` instead of `{}`) decode to `None`.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}
