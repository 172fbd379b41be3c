//! PostgreSQL score store, the production backend.

use async_trait::async_trait;
use chrono::Utc;
use sea_query::PostgresQueryBuilder;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres};
use tracing::info;

use crate::config::PostgresConfig;
use crate::model::GameScore;
use crate::store::{Result, ScoreStore, ScoreWriter, upsert_statement};

pub struct PostgresScoreStore {
    pool: PgPool,
}

impl PostgresScoreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool capped at one connection. Nothing connects until the first write phase.
    pub fn connect_lazy(config: &PostgresConfig) -> Self {
        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);
        info!(host = %config.host, port = config.port, database = %config.database, "Configured Postgres pool");
        Self::new(PgPoolOptions::new().max_connections(1).connect_lazy_with(options))
    }
}

#[async_trait]
impl ScoreStore for PostgresScoreStore {
    async fn acquire(&self) -> Result<Box<dyn ScoreWriter>> {
        let conn = self.pool.acquire().await?;
        Ok(Box::new(PostgresScoreWriter { conn }))
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

struct PostgresScoreWriter {
    conn: PoolConnection<Postgres>,
}

#[async_trait]
impl ScoreWriter for PostgresScoreWriter {
    async fn upsert(&mut self, score: &GameScore) -> Result<()> {
        let query = upsert_statement(score, Utc::now()).to_string(PostgresQueryBuilder);
        sqlx::query(&query).execute(&mut *self.conn).await?;
        Ok(())
    }
}
