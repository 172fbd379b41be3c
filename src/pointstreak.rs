use serde_json::Value;
use tracing::{debug, info, info_span, instrument, warn};

use crate::config::FeedConfig;
use crate::error::SyncError;
use crate::model::{Scoreboard, normalize_scoreboard};

/// Blocking client for the PointStreak baseball scoreboard feed.
#[derive(Clone)]
pub struct PointStreak {
    config: FeedConfig,
    agent: ureq::Agent,
}

impl PointStreak {
    pub fn new(config: FeedConfig) -> Self {
        // Error statuses are read and parsed like any other response; the caller sees the body.
        let agent = ureq::Agent::new_with_config(
            ureq::Agent::config_builder().http_status_as_error(false).build(),
        );
        Self { config, agent }
    }

    /// GET the season scoreboard and return the raw body, whatever the HTTP status.
    #[instrument(level = "info", skip(self), fields(season_id = %self.config.season_id))]
    pub fn fetch_scoreboard(&self) -> Result<String, SyncError> {
        let url = self.config.scoreboard_url();
        info!(url = %url, "Fetching scoreboard");

        let response = {
            let _span = info_span!("pointstreak_fetch", url = %url).entered();
            self.agent.get(&url).header("apikey", &self.config.api_key).call()?
        };

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            warn!(status, "Scoreboard responded with a non-success status; parsing body anyway");
        }

        let body = response.into_body().read_to_string()?;
        info!(status, bytes = body.len(), "Downloaded scoreboard");
        Ok(body)
    }
}

/// Parse a raw scoreboard body and normalize it into feed games.
#[instrument(level = "info", skip(body), fields(bytes = body.len()))]
pub fn parse_scoreboard(body: &str) -> Result<Scoreboard, SyncError> {
    let document: Value = serde_json::from_str(body)?;
    debug!(document = %document, "Parsed scoreboard document");
    Ok(normalize_scoreboard(&document))
}
