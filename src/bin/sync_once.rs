//! Run the scoreboard sync once from a shell, reading configuration from `.env` if present.

use scoreboard_sync_lambda::config::Config;
use scoreboard_sync_lambda::{LogFormat, init_logging, store, sync};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    init_logging(LogFormat::Pretty);

    let config = Config::from_env()?;
    let store = store::open(&config.database).await?;

    let result = sync::run(&config.feed, store.as_ref()).await;
    store.close().await;

    match result {
        Ok(summary) => {
            info!(?summary, "Sync finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Sync failed");
            Err(e.into())
        }
    }
}
