//! SQLite score store for local dry runs and tests.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_query::{Alias, Asterisk, Expr, Func, Query, SqliteQueryBuilder};
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool};

use crate::model::{GameScore, StoredScore};
use crate::store::schema::{CREATE_SCORES_TABLE, Scores};
use crate::store::{Result, ScoreStore, ScoreWriter, upsert_statement};

pub struct SqliteScoreStore {
    pool: SqlitePool,
}

impl SqliteScoreStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) a database file with a single-connection pool and make sure
    /// the `scores` table exists. `":memory:"` gives a private in-memory database.
    pub async fn open(path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
        // The in-memory database lives exactly as long as its one connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    pub async fn in_memory() -> Result<Self> {
        Self::open(":memory:").await
    }

    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(CREATE_SCORES_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch one stored score by game id.
    pub async fn get(&self, game_id: &str) -> Result<Option<StoredScore>> {
        let query = Query::select()
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
            .from(Scores::Table)
            .and_where(Expr::col(Scores::GameId).eq(game_id))
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_optional(&self.pool).await?;
        row.map(|row| stored_score(&row)).transpose()
    }

    /// Number of rows in the `scores` table.
    pub async fn count(&self) -> Result<i64> {
        let query = Query::select()
            .expr_as(Func::count(Expr::col(Asterisk)), Alias::new("n"))
            .from(Scores::Table)
            .to_string(SqliteQueryBuilder);

        let row = sqlx::query(&query).fetch_one(&self.pool).await?;
        row.try_get("n")
    }
}

fn stored_score(row: &SqliteRow) -> Result<StoredScore> {
    let date: Option<String> = row.try_get("date")?;
    let date = date
        .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
        .transpose()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    let last_updated: String = row.try_get("last_updated")?;
    let last_updated = DateTime::parse_from_rfc3339(&last_updated)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(StoredScore {
        score: GameScore {
            game_id: row.try_get("game_id")?,
            date,
            home_team_name: row.try_get("home_team_name")?,
            visiting_team_name: row.try_get("visiting_team_name")?,
            home_team_score: row.try_get("home_team_score")?,
            visiting_team_score: row.try_get("visiting_team_score")?,
            game_status: row.try_get("game_status")?,
            innings_played: row.try_get("innings_played")?,
            regulation_innings: row.try_get("regulation_innings")?,
            gametime: row.try_get("gametime")?,
            field: row.try_get("field")?,
            timezone: row.try_get("timezone")?,
        },
        last_updated,
    })
}

#[async_trait]
impl ScoreStore for SqliteScoreStore {
    async fn acquire(&self) -> Result<Box<dyn ScoreWriter>> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(SqliteScoreWriter { conn }))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

struct SqliteScoreWriter {
    conn: PoolConnection<Sqlite>,
}

#[async_trait]
impl ScoreWriter for SqliteScoreWriter {
    async fn upsert(&mut self, score: &GameScore) -> Result<()> {
        let query = upsert_statement(score, Utc::now()).to_string(SqliteQueryBuilder);
        sqlx::query(&query).execute(&mut *self.conn).await?;
        Ok(())
    }
}
