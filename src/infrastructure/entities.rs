//! Database entities

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Message {
    pub id: i64,
    pub username: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
