//! Persistence: connection pool, row types and repositories

pub mod database;
pub mod entities;
pub mod repositories;
pub mod traits;
