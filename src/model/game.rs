use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::model::feed::FeedGame;

/// One normalized row of the `scores` table, minus the write timestamp.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameScore {
    pub game_id: String,
    pub date: Option<NaiveDate>,
    pub home_team_name: Option<String>,
    pub visiting_team_name: Option<String>,
    pub home_team_score: Option<i32>,
    pub visiting_team_score: Option<i32>,
    pub game_status: Option<String>,
    pub innings_played: Option<i32>,
    pub regulation_innings: Option<i32>,
    pub gametime: Option<String>,
    pub field: Option<String>,
    pub timezone: Option<String>,
}

/// A `GameScore` as read back from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredScore {
    pub score: GameScore,
    pub last_updated: DateTime<Utc>,
}

impl GameScore {
    /// Normalize a feed entry. Returns `None` when `gameid` is missing, null or blank.
    ///
    /// A present id is the natural key and is kept byte for byte.
    pub fn from_feed(game: FeedGame) -> Option<Self> {
        let game_id = game.gameid.filter(|id| !id.trim().is_empty())?;

        let date = game.gamedate.as_deref().and_then(|raw| {
            let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
            if parsed.is_none() {
                warn!(game_id = %game_id, gamedate = %raw, "Unparsable gamedate; storing null");
            }
            parsed
        });

        let status = game.gamestatus.unwrap_or_default();

        Some(GameScore {
            game_id,
            date,
            home_team_name: game.hometeam.and_then(|t| t.teamname),
            visiting_team_name: game.awayteam.and_then(|t| t.teamname),
            home_team_score: game.homescore,
            visiting_team_score: game.awayscore,
            game_status: status.status,
            innings_played: status.inningsplayed,
            regulation_innings: status.regulationinnings,
            gametime: game.gametime,
            field: game.field,
            timezone: game.timezone,
        })
    }
}
