use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::config::FeedConfig;
use crate::store::ScoreStore;
use crate::sync;

/// Invocation payload. Whatever the trigger sends is accepted and ignored by the sync; a boolean
/// `test` key only tags the logs of manual invocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub test: bool,
}

impl Request {
    /// Read the payload leniently. `null`, non-objects and a non-boolean `test` all mean `false`.
    pub fn from_payload(payload: &Value) -> Self {
        Request { test: payload.get("test").and_then(Value::as_bool).unwrap_or(false) }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
    pub games_written: usize,
    pub games_skipped: usize,
}

#[instrument(
    skip_all,
    fields(request_id = %event.context.request_id, test = Request::from_payload(&event.payload).test)
)]
pub async fn handler(
    event: LambdaEvent<Value>,
    feed: &FeedConfig,
    store: &dyn ScoreStore,
) -> Result<Response, Error> {
    match sync::run(feed, store).await {
        Ok(summary) => {
            let message = if summary.games_in_feed == 0 {
                "No games available.".to_string()
            } else {
                format!("Upserted {} of {} games.", summary.games_written, summary.games_in_feed)
            };
            info!(message = %message, "Scoreboard sync finished");
            Ok(Response {
                message,
                games_written: summary.games_written,
                games_skipped: summary.games_skipped,
            })
        }
        Err(e) => {
            // Surface to the runtime so the scheduler sees the failure
            error!(error = %e, "Scoreboard sync failed");
            Err(e.into())
        }
    }
}
