use std::env;
use std::fmt;

use thiserror::Error;

const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Everything the sync task needs, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed: FeedConfig,
    pub database: DatabaseConfig,
}

/// Where the scoreboard feed lives and how to authenticate against it.
#[derive(Clone)]
pub struct FeedConfig {
    pub base_url: String,
    pub season_id: String,
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub enum DatabaseConfig {
    Postgres(PostgresConfig),
    /// Local SQLite file, used for dry runs without a Postgres instance.
    Sqlite { path: String },
}

#[derive(Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let feed = FeedConfig {
            base_url: require("POINTSTREAK_BASE")?.trim_end_matches('/').to_string(),
            season_id: require("SEASON_ID")?,
            api_key: require("POINTSTREAK_API_KEY")?,
        };

        let database = match get("SQLITE_PATH") {
            Some(path) => DatabaseConfig::Sqlite { path },
            None => {
                let port = match get("DB_PORT") {
                    Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                        name: "DB_PORT",
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_DB_PORT,
                };
                DatabaseConfig::Postgres(PostgresConfig {
                    host: require("DB_HOST")?,
                    port,
                    user: require("DB_USER")?,
                    password: require("DB_PASS")?,
                    database: require("DB_NAME")?,
                })
            }
        };

        Ok(Config { feed, database })
    }
}

impl FeedConfig {
    /// Scoreboard endpoint for the configured season.
    pub fn scoreboard_url(&self) -> String {
        format!("{}/baseball/season/scoreboard/{}/json", self.base_url, self.season_id)
    }
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for FeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedConfig")
            .field("base_url", &self.base_url)
            .field("season_id", &self.season_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}
