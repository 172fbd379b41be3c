use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::config::FeedConfig;
use crate::error::SyncError;
use crate::model::GameScore;
use crate::pointstreak::{PointStreak, parse_scoreboard};
use crate::store::ScoreStore;

/// What one sync run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Entries the feed listed, including ones that could not be written.
    pub games_in_feed: usize,
    /// Rows inserted or updated.
    pub games_written: usize,
    /// Entries not written: not a game object, or no game id.
    pub games_skipped: usize,
}

/// Fetch the configured scoreboard and upsert every game it lists.
#[instrument(level = "info", skip_all, fields(season_id = %feed.season_id))]
pub async fn run(feed: &FeedConfig, store: &dyn ScoreStore) -> Result<SyncSummary, SyncError> {
    let client = PointStreak::new(feed.clone());
    // ureq is blocking; keep it off the async worker
    let body = tokio::task::spawn_blocking(move || client.fetch_scoreboard()).await??;
    sync_body(&body, store).await
}

/// Parse a raw scoreboard body and upsert its games, one at a time, in feed order.
///
/// The first failure aborts the loop. Rows written before it stay committed: there is no
/// enclosing transaction.
#[instrument(level = "info", skip_all, fields(bytes = body.len()))]
pub async fn sync_body(body: &str, store: &dyn ScoreStore) -> Result<SyncSummary, SyncError> {
    let scoreboard = parse_scoreboard(body)?;
    let mut summary = SyncSummary {
        games_in_feed: scoreboard.entries(),
        games_written: 0,
        games_skipped: scoreboard.dropped,
    };
    if scoreboard.games.is_empty() {
        info!(games_skipped = summary.games_skipped, "No games available");
        return Ok(summary);
    }

    // Dropped on every return path, which hands the connection back to the pool.
    let mut writer = store.acquire().await.map_err(SyncError::Connect)?;

    for (index, game) in scoreboard.games.into_iter().enumerate() {
        let Some(score) = GameScore::from_feed(game) else {
            warn!(index, "Skipping scoreboard entry without a gameid");
            summary.games_skipped += 1;
            continue;
        };

        writer
            .upsert(&score)
            .await
            .map_err(|source| SyncError::Upsert { game_id: score.game_id.clone(), source })?;
        summary.games_written += 1;
    }

    info!(
        games_in_feed = summary.games_in_feed,
        games_written = summary.games_written,
        games_skipped = summary.games_skipped,
        "Scoreboard update complete"
    );
    Ok(summary)
}
