//! Agri-Bot chat endpoint.
//!
//! Request/response only: each question is sent on its own, with no prior
//! conversation context.

use kisaan_core::entities::{ChatAnswer, ChatRequest};
use kisaan_core::enums::Language;

use crate::{ApiClient, error::ApiError, http};

impl ApiClient {
    /// `POST /api/chat` with body `{user_id, question, language}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server returns a
    /// non-success status, or the body has no `answer`.
    pub async fn send_chat_message(
        &self,
        message: &str,
        user_id: Option<i64>,
        language: Language,
    ) -> Result<ChatAnswer, ApiError> {
        let request = ChatRequest {
            user_id,
            question: message.to_string(),
            language,
        };
        http::decode(self.post("/api/chat", &request).await?).await
    }
}
