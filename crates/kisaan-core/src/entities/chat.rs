use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Author, Language};

/// Body of `POST /api/chat`. Every message is independent: no history is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Serialized as `null` when absent.
    pub user_id: Option<i64>,
    pub question: String,
    pub language: Language,
}

/// Answer returned by the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatAnswer {
    pub answer: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// One entry of the client-local conversation log. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            author: Author::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            author: Author::Bot,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_missing_user_as_null() {
        let request = ChatRequest {
            user_id: None,
            question: "When to sow wheat?".into(),
            language: Language::En,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["user_id"].is_null());
        assert_eq!(json["question"], "When to sow wheat?");
        assert_eq!(json["language"], "en");
    }

    #[test]
    fn answer_ignores_extra_fields() {
        let answer: ChatAnswer =
            serde_json::from_str(r#"{"answer":"Sow in November","language":"en","model":"x"}"#)
                .unwrap();
        assert_eq!(answer.answer, "Sow in November");
        assert_eq!(answer.language.as_deref(), Some("en"));
    }
}
