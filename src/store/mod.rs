//! Persistence for normalized game scores.
//!
//! A store hands out one writer at a time. The writer owns a single pooled connection, which
//! returns to the pool when the writer is dropped, on success and error paths alike.

mod postgres;
mod schema;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sea_query::{InsertStatement, OnConflict, Query};

use crate::config::DatabaseConfig;
use crate::model::GameScore;

pub use postgres::PostgresScoreStore;
pub use schema::{CREATE_SCORES_TABLE, Scores};
pub use sqlite::SqliteScoreStore;

pub type Result<T> = std::result::Result<T, sqlx::Error>;

#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Check out the single connection used for a write phase.
    async fn acquire(&self) -> Result<Box<dyn ScoreWriter>>;

    /// Close the underlying pool. Outstanding writers finish first.
    async fn close(&self);
}

#[async_trait]
pub trait ScoreWriter: Send {
    /// Insert the score, or overwrite every mutable column of the existing row with the same
    /// `game_id`. `last_updated` is set to the time of this call.
    async fn upsert(&mut self, score: &GameScore) -> Result<()>;
}

/// Open the configured backend. Postgres connects lazily; SQLite opens the file and creates the
/// table if needed.
pub async fn open(config: &DatabaseConfig) -> Result<Arc<dyn ScoreStore>> {
    match config {
        DatabaseConfig::Postgres(pg) => Ok(Arc::new(PostgresScoreStore::connect_lazy(pg))),
        DatabaseConfig::Sqlite { path } => Ok(Arc::new(SqliteScoreStore::open(path).await?)),
    }
}

/// Render a write timestamp the way both backends accept it.
pub(crate) fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Dialect-independent upsert keyed on `game_id`.
pub(crate) fn upsert_statement(score: &GameScore, written_at: DateTime<Utc>) -> InsertStatement {
    Query::insert()
        .into_table(Scores::Table)
        .columns([
            Scores::GameId,
            Scores::Date,
            Scores::HomeTeamName,
            Scores::VisitingTeamName,
            Scores::HomeTeamScore,
            Scores::VisitingTeamScore,
            Scores::GameStatus,
            Scores::InningsPlayed,
            Scores::RegulationInnings,
            Scores::Gametime,
            Scores::Field,
            Scores::Timezone,
            Scores::LastUpdated,
        ])
        .values_panic([
            score.game_id.as_str().into(),
            score.date.map(|d| d.format("%Y-%m-%d").to_string()).into(),
            score.home_team_name.clone().into(),
            score.visiting_team_name.clone().into(),
            score.home_team_score.into(),
            score.visiting_team_score.into(),
            score.game_status.clone().into(),
            score.innings_played.into(),
            score.regulation_innings.into(),
            score.gametime.clone().into(),
            score.field.clone().into(),
            score.timezone.clone().into(),
            format_timestamp(written_at).into(),
        ])
        .on_conflict(
            OnConflict::column(Scores::GameId)
                .update_columns([
                    Scores::Date,
                    Scores::HomeTeamName,
                    Scores::VisitingTeamName,
                    Scores::HomeTeamScore,
                    Scores::VisitingTeamScore,
                    Scores::GameStatus,
                    Scores::InningsPlayed,
                    Scores::RegulationInnings,
                    Scores::Gametime,
                    Scores::Field,
                    Scores::Timezone,
                    Scores::LastUpdated,
                ])
                .to_owned(),
        )
        .to_owned()
}
