//! Messages endpoint

use crate::api::error::AppError;
use crate::api::messages::schemas::{CreateMessage, Message};
use crate::api::session::SessionUser;
use crate::core::traits::ChatService;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Form, Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/", get(list_messages).post(post_message))
}

async fn list_messages(
    Inject(chat_service): Inject<dyn ChatService>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = chat_service
        .list_messages()
        .await
        .map_err(|_| AppError::MessagesUnavailable)?;

    Ok(Json(messages.into_iter().map(Message::from).collect()))
}

async fn post_message(
    Inject(chat_service): Inject<dyn ChatService>,
    SessionUser(username): SessionUser,
    Form(create_message): Form<CreateMessage>,
) -> Result<StatusCode, AppError> {
    chat_service
        .post_message(username, create_message.message)
        .await
        .map_err(|_| AppError::MessageNotSaved)?;

    Ok(StatusCode::OK)
}

pub mod schemas {
    use crate::infrastructure::entities;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Debug)]
    pub struct CreateMessage {
        #[serde(default)]
        pub message: String,
    }

    #[derive(Serialize, Debug)]
    pub struct Message {
        pub id: i64,
        pub username: String,
        pub message: String,
        pub created_at: DateTime<Utc>,
    }

    impl From<entities::Message> for Message {
        fn from(message: entities::Message) -> Self {
            Message {
                id: message.id,
                username: message.username,
                message: message.message,
                created_at: message.created_at,
            }
        }
    }
}
