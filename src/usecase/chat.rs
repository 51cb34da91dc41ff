// SPDX-License-Identifier: MIT

//! Chat use-case.

use crate::error::Result;
use crate::models::ChatMessage;
use crate::repository::ChatRepository;
use crate::usecase::non_blank;

/// Validates an outgoing message and sends it through the chat repository.
#[derive(Clone)]
pub struct SendMessageUseCase {
    chat: ChatRepository,
}

impl SendMessageUseCase {
    pub fn new(chat: ChatRepository) -> Self {
        Self { chat }
    }

    pub async fn execute(&self, user_id: &str, message: &str) -> Result<ChatMessage> {
        non_blank(message, "Message cannot be empty")?;
        self.chat.send_message(user_id, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::remote::AssistantClient;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_blank_message_rejected_before_io() {
        let db = Arc::new(Database::open_in_memory().unwrap());
        // Unroutable endpoint: a send would fail loudly if attempted
        let assistant = AssistantClient::new("http://127.0.0.1:1", "key", "gemini-pro", 1).unwrap();
        let use_case = SendMessageUseCase::new(ChatRepository::new(db.clone(), assistant));

        let err = use_case.execute("u1", "   ").await.unwrap_err();
        assert_eq!(err.to_string(), "Message cannot be empty");
        // Nothing was persisted either
        assert!(db.chat_history("u1").unwrap().is_empty());
    }
}
