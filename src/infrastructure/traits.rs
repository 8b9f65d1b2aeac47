//! Infrastructure traits, used for DI on higher levels

use crate::infrastructure::entities;
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// All stored messages, newest first.
    async fn list_messages(&self) -> Result<Vec<entities::Message>, ()>;

    /// Appends a message. The store assigns `id` and `created_at`.
    async fn create_message(
        &self,
        username: String,
        message: String,
    ) -> Result<entities::Message, ()>;
}
