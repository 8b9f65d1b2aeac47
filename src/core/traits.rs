//! DI "Interfaces"

use crate::infrastructure::entities;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Lists every message in the room, newest first.
    ///
    /// Returns `Err` if the store could not be read. No partial list is ever returned.
    async fn list_messages(&self) -> Result<Vec<entities::Message>, ()>;

    /// Posts a message to the room as `username`.
    ///
    /// Both the username and the text are stored verbatim; an empty text is accepted.
    async fn post_message(
        &self,
        username: String,
        message: String,
    ) -> Result<entities::Message, ()>;
}
