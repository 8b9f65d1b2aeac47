//! Implementations for the service the app needs.
//!

use crate::core::traits::ChatService;
use crate::infrastructure::entities::Message;
use crate::infrastructure::traits::MessageRepository;
use async_trait::async_trait;
use di::{Ref, injectable};
use log::info;

#[injectable(ChatService)]
pub struct RoomChatService {
    repo: Ref<dyn MessageRepository>,
}

#[async_trait]
impl ChatService for RoomChatService {
    async fn list_messages(&self) -> Result<Vec<Message>, ()> {
        self.repo.list_messages().await
    }

    async fn post_message(&self, username: String, message: String) -> Result<Message, ()> {
        let message = self.repo.create_message(username, message).await?;
        info!("message {} posted by {:?}", message.id, message.username);
        Ok(message)
    }
}
