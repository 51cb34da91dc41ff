// SPDX-License-Identifier: MIT

//! Chat repository: local history plus the AI assistant round trip.

use crate::db::Database;
use crate::error::Result;
use crate::models::{ChatMessage, MessageSender};
use crate::remote::AssistantClient;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Mediates between the local conversation history and the AI endpoint.
#[derive(Clone)]
pub struct ChatRepository {
    db: Arc<Database>,
    assistant: AssistantClient,
}

impl ChatRepository {
    pub fn new(db: Arc<Database>, assistant: AssistantClient) -> Self {
        Self { db, assistant }
    }

    /// Send a message to the assistant and return its reply.
    ///
    /// The user's message is persisted before the remote call, so a failed
    /// assistant round trip never loses the outgoing message.
    pub async fn send_message(&self, user_id: &str, content: &str) -> Result<ChatMessage> {
        let user_message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
            sender: MessageSender::User,
        };
        self.db.insert_chat_message(&user_message)?;

        let reply = self.assistant.generate_reply(content).await?;

        let bot_message = ChatMessage {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            content: reply,
            timestamp: Utc::now(),
            sender: MessageSender::Bot,
        };
        self.db.insert_chat_message(&bot_message)?;

        Ok(bot_message)
    }

    /// Conversation history from the local store, oldest first.
    pub fn history(&self, user_id: &str) -> Result<Vec<ChatMessage>> {
        self.db.chat_history(user_id)
    }

    /// Clear the local conversation. Local-only, nothing is deleted remotely.
    pub fn clear_history(&self, user_id: &str) -> Result<()> {
        self.db.clear_chat_history(user_id)
    }
}
