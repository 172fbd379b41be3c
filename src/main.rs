use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, service_fn};
use scoreboard_sync_lambda::config::Config;
use scoreboard_sync_lambda::handler::handler;
use scoreboard_sync_lambda::{LogFormat, init_logging, store};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(LogFormat::Json);

    // Config and the single-connection pool live for the whole process and are shared by every
    // invocation of a warm container.
    let config = Config::from_env()?;
    info!(feed = ?config.feed, database = ?config.database, "Loaded configuration");
    let store = store::open(&config.database).await?;
    let feed = Arc::new(config.feed);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<serde_json::Value>| {
        let feed = Arc::clone(&feed);
        let store = Arc::clone(&store);
        async move { handler(event, &feed, store.as_ref()).await }
    }))
    .await
}
