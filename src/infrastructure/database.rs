//! Pooled SQLite connection

use crate::config::Config;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::ops::{Deref, DerefMut};

/// Registered with the service provider as an existing singleton, see
/// [`crate::service_provider`].
pub struct DatabaseConnection {
    connection: SqlitePool,
}

impl DatabaseConnection {
    /// Builds a bounded pool. Connections are opened on first use, handed to one query at a
    /// time and recycled after `max_lifetime`.
    pub fn from_config(config: &Config) -> DatabaseConnection {
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .max_lifetime(config.max_lifetime)
            .connect_lazy_with(config.database.clone());

        DatabaseConnection { connection: pool }
    }
}

impl From<SqlitePool> for DatabaseConnection {
    fn from(connection: SqlitePool) -> Self {
        DatabaseConnection { connection }
    }
}

impl Deref for DatabaseConnection {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.connection
    }
}

impl DerefMut for DatabaseConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.connection
    }
}
