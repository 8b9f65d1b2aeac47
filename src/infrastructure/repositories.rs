//! DB Repository abstractions

use crate::infrastructure::database::DatabaseConnection;
use crate::infrastructure::entities::Message;
use crate::infrastructure::traits::MessageRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::error;

#[injectable(MessageRepository)]
pub struct DbMessageRepository {
    connection: Ref<DatabaseConnection>,
}

#[async_trait]
impl MessageRepository for DbMessageRepository {
    async fn list_messages(&self) -> Result<Vec<Message>, ()> {
        sqlx::query_as(
            "SELECT id, username, message, created_at FROM messages ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&**self.connection)
        .await
        .map_err(|e| error!("{e}"))
    }

    async fn create_message(&self, username: String, message: String) -> Result<Message, ()> {
        sqlx::query_as(
            "INSERT INTO messages (username, message) VALUES (?, ?) RETURNING id, username, message, created_at",
        )
        .bind(username)
        .bind(message)
        .fetch_one(&**self.connection)
        .await
        .map_err(|e| error!("{e}"))
    }
}
