use thiserror::Error;

/// Anything that aborts a scoreboard sync. Rows written before the error stay written.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("scoreboard request failed: {0}")]
    Fetch(#[from] ureq::Error),

    #[error("scoreboard response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scoreboard fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("failed to acquire database connection: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to upsert game {game_id}: {source}")]
    Upsert {
        game_id: String,
        #[source]
        source: sqlx::Error,
    },
}
