#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use scoreboard_sync_lambda::model::GameScore;
use scoreboard_sync_lambda::store::{ScoreStore, ScoreWriter, SqliteScoreStore};

/// In-memory store that records every upsert, optionally failing the nth one (1-based).
#[derive(Default)]
pub struct RecordingStore {
    pub upserts: Arc<Mutex<Vec<GameScore>>>,
    pub acquired: Arc<Mutex<usize>>,
    pub fail_on: Option<usize>,
}

impl RecordingStore {
    pub fn failing_on(n: usize) -> Self {
        Self { fail_on: Some(n), ..Default::default() }
    }

    pub fn game_ids(&self) -> Vec<String> {
        self.upserts.lock().unwrap().iter().map(|s| s.game_id.clone()).collect()
    }

    pub fn acquire_count(&self) -> usize {
        *self.acquired.lock().unwrap()
    }
}

#[async_trait]
impl ScoreStore for RecordingStore {
    async fn acquire(&self) -> Result<Box<dyn ScoreWriter>, sqlx::Error> {
        *self.acquired.lock().unwrap() += 1;
        Ok(Box::new(RecordingWriter {
            upserts: Arc::clone(&self.upserts),
            calls: 0,
            fail_on: self.fail_on,
        }))
    }

    async fn close(&self) {}
}

struct RecordingWriter {
    upserts: Arc<Mutex<Vec<GameScore>>>,
    calls: usize,
    fail_on: Option<usize>,
}

#[async_trait]
impl ScoreWriter for RecordingWriter {
    async fn upsert(&mut self, score: &GameScore) -> Result<(), sqlx::Error> {
        self.calls += 1;
        if self.fail_on == Some(self.calls) {
            return Err(sqlx::Error::Protocol(format!("injected failure on {}", score.game_id)));
        }
        self.upserts.lock().unwrap().push(score.clone());
        Ok(())
    }
}

/// Real SQLite store whose writer fails the nth upsert (1-based) without touching the database.
pub struct FailingSqliteStore {
    pub inner: SqliteScoreStore,
    pub fail_on: usize,
}

#[async_trait]
impl ScoreStore for FailingSqliteStore {
    async fn acquire(&self) -> Result<Box<dyn ScoreWriter>, sqlx::Error> {
        let inner = self.inner.acquire().await?;
        Ok(Box::new(FailingWriter { inner, calls: 0, fail_on: self.fail_on }))
    }

    async fn close(&self) {
        self.inner.close().await;
    }
}

struct FailingWriter {
    inner: Box<dyn ScoreWriter>,
    calls: usize,
    fail_on: usize,
}

#[async_trait]
impl ScoreWriter for FailingWriter {
    async fn upsert(&mut self, score: &GameScore) -> Result<(), sqlx::Error> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(sqlx::Error::Protocol(format!("injected failure on {}", score.game_id)));
        }
        self.inner.upsert(score).await
    }
}

/// Scoreboard body with one game per id, in the given order.
pub fn games_body(ids: &[&str]) -> String {
    let games: Vec<_> = ids
        .iter()
        .map(|id| serde_json::json!({ "gameid": id, "gamedate": "2025-06-01", "homescore": "1" }))
        .collect();
    serde_json::json!({ "games": games }).to_string()
}
