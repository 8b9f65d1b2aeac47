//! Process configuration, read from the environment at startup

use anyhow::{Context, anyhow};
use log::info;
use sqlx::sqlite::SqliteConnectOptions;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
pub const DATABASE_ACQUIRE_TIMEOUT_SECS: &str = "DATABASE_ACQUIRE_TIMEOUT_SECS";
pub const DATABASE_MAX_LIFETIME_SECS: &str = "DATABASE_MAX_LIFETIME_SECS";
pub const STATIC_DIR: &str = "STATIC_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    pub database: SqliteConnectOptions,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub max_lifetime: Duration,
    pub static_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// `DATABASE_URL` is required, everything else falls back to a default.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url =
            lookup(DATABASE_URL).ok_or_else(|| anyhow!("{DATABASE_URL} must be set"))?;
        let database = SqliteConnectOptions::from_str(&database_url)
            .with_context(|| format!("invalid {DATABASE_URL}"))?
            .create_if_missing(true);

        Ok(Config {
            database,
            max_connections: try_load(&lookup, DATABASE_MAX_CONNECTIONS, "5")?,
            acquire_timeout: Duration::from_secs(try_load(
                &lookup,
                DATABASE_ACQUIRE_TIMEOUT_SECS,
                "30",
            )?),
            max_lifetime: Duration::from_secs(try_load(
                &lookup,
                DATABASE_MAX_LIFETIME_SECS,
                "1800",
            )?),
            static_dir: try_load(&lookup, STATIC_DIR, "static")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("invalid {key} value: {e}"))
}
