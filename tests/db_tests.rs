//! Database and schema tests
//!
//! Tests SQLite migrations, store-assigned columns and the message repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use web_chat::infrastructure::database::DatabaseConnection;
use web_chat::infrastructure::traits::MessageRepository;

/// Setup test database with migrations
async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    sqlx::migrate!().run(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn test_database_migrations_work() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name = 'messages'")
            .fetch_all(&pool)
            .await
            .unwrap();

    assert_eq!(tables.len(), 1);
}

#[tokio::test]
async fn test_store_assigns_id_and_timestamp() {
    let pool = setup_test_db().await;

    for (username, message) in [("alice", "first"), ("bob", "second")] {
        sqlx::query("INSERT INTO messages (username, message) VALUES (?, ?)")
            .bind(username)
            .bind(message)
            .execute(&pool)
            .await
            .unwrap();
    }

    let rows: Vec<(i64, String, String)> =
        sqlx::query_as("SELECT id, username, created_at FROM messages ORDER BY id ASC")
            .fetch_all(&pool)
            .await
            .unwrap();

    assert_eq!(rows[0].0, 1);
    assert_eq!(rows[1].0, 2);
    assert_eq!(rows[0].1, "alice");
    for (_, _, created_at) in rows {
        assert!(DateTime::parse_from_rfc3339(&created_at).is_ok(), "{created_at}");
    }
}

#[tokio::test]
async fn test_empty_message_is_stored() {
    let pool = setup_test_db().await;

    sqlx::query("INSERT INTO messages (username, message) VALUES (?, ?)")
        .bind("alice")
        .bind("")
        .execute(&pool)
        .await
        .unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages WHERE message = ''")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn test_repository_lists_newest_first() {
    let pool = setup_test_db().await;

    // Same timestamp on purpose: ties fall back to insertion order.
    let created_at = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string();
    for (username, message) in [("alice", "older"), ("bob", "newer")] {
        sqlx::query("INSERT INTO messages (username, message, created_at) VALUES (?, ?, ?)")
            .bind(username)
            .bind(message)
            .bind(&created_at)
            .execute(&pool)
            .await
            .unwrap();
    }
    sqlx::query("INSERT INTO messages (username, message, created_at) VALUES (?, ?, ?)")
        .bind("carol")
        .bind("oldest")
        .bind("2000-01-01T00:00:00.000Z")
        .execute(&pool)
        .await
        .unwrap();

    let provider = web_chat::service_provider(DatabaseConnection::from(pool)).unwrap();
    let repo = provider.get_required::<dyn MessageRepository>();

    let messages = repo.list_messages().await.unwrap();
    let texts: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
    assert_eq!(texts, ["newer", "older", "oldest"]);

}

#[tokio::test]
async fn test_repository_create_returns_stored_row() {
    let pool = setup_test_db().await;
    let provider = web_chat::service_provider(DatabaseConnection::from(pool)).unwrap();
    let repo = provider.get_required::<dyn MessageRepository>();

    let before = Utc::now();
    let created = repo
        .create_message("alice".to_owned(), "hello".to_owned())
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.username, "alice");
    assert_eq!(created.message, "hello");
    assert!(created.created_at >= before - chrono::Duration::seconds(1));

}

#[tokio::test]
async fn test_repository_reports_store_failure() {
    let pool = setup_test_db().await;
    pool.close().await;

    let provider = web_chat::service_provider(DatabaseConnection::from(pool)).unwrap();
    let repo = provider.get_required::<dyn MessageRepository>();

    assert!(repo.list_messages().await.is_err());
    assert!(
        repo.create_message("alice".to_owned(), "hello".to_owned())
            .await
            .is_err()
    );

}
