//! Agri-Bot: a linear chat log plus an alert sidebar.
//!
//! The conversation is `Idle -> AwaitingResponse -> Idle`. A failed chat
//! call is never surfaced as an error: it becomes one fixed fallback reply.

use std::sync::Arc;

use kisaan_api::ApiError;
use kisaan_core::entities::{ChatAnswer, ChatMessage};
use kisaan_core::enums::Language;
use kisaan_core::i18n::{self, BotText};
use serde::Serialize;

use crate::alerts::{AlertBoard, fetch_alert_board};
use crate::loader::Loader;
use crate::shell::SessionContext;
use crate::state::DataState;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatStatus {
    #[default]
    Idle,
    AwaitingResponse,
}

/// A question accepted by [`ChatView::begin_send`], ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuestion {
    pub question: String,
    pub user_id: Option<i64>,
    pub language: Language,
}

#[derive(Debug)]
pub struct ChatView {
    ctx: SessionContext,
    user_id: Option<i64>,
    input: String,
    log: Vec<ChatMessage>,
    status: ChatStatus,
    sidebar: Loader<AlertBoard>,
}

impl ChatView {
    /// Mount with the localized welcome message and start the sidebar fetch.
    #[must_use]
    pub fn mount(ctx: SessionContext) -> Self {
        let welcome = ChatMessage::bot(i18n::bot(ctx.language).welcome);
        let mut view = Self {
            ctx,
            user_id: None,
            input: String::new(),
            log: vec![welcome],
            status: ChatStatus::Idle,
            sidebar: Loader::new("agribot.sidebar"),
        };
        view.refresh_sidebar();
        view
    }

    /// Attach a user id to every question sent from now on.
    #[must_use]
    pub const fn with_user(mut self, user_id: Option<i64>) -> Self {
        self.user_id = user_id;
        self
    }

    fn refresh_sidebar(&mut self) {
        let api = Arc::clone(&self.ctx.api);
        let language = self.ctx.language;
        let limit = self.ctx.settings.sidebar_alert_limit;
        self.sidebar
            .start(async move { fetch_alert_board(api.as_ref(), language, limit).await });
    }

    /// Refresh the sidebar for the new language. The log is kept.
    pub fn set_language(&mut self, language: Language) {
        if self.ctx.language != language {
            self.ctx.language = language;
            self.refresh_sidebar();
        }
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.ctx.language
    }

    #[must_use]
    pub const fn text(&self) -> &'static BotText {
        i18n::bot(self.ctx.language)
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.log
    }

    #[must_use]
    pub const fn status(&self) -> ChatStatus {
        self.status
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: &str) {
        input.clone_into(&mut self.input);
    }

    /// Sending needs a non-blank draft and no reply in flight.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.status == ChatStatus::Idle && !self.input.trim().is_empty()
    }

    /// Accept the current draft: log it as typed, clear the input and wait
    /// for a reply. Returns `None` and changes nothing when sending is
    /// disabled.
    pub fn begin_send(&mut self) -> Option<PendingQuestion> {
        if !self.can_send() {
            return None;
        }
        let question = std::mem::take(&mut self.input);
        self.log.push(ChatMessage::user(question.clone()));
        self.status = ChatStatus::AwaitingResponse;
        Some(PendingQuestion {
            question,
            user_id: self.user_id,
            language: self.ctx.language,
        })
    }

    /// Log the bot's reply, or the fallback message if the call failed.
    pub fn complete(&mut self, result: Result<ChatAnswer, ApiError>) -> &ChatMessage {
        let text = match result {
            Ok(answer) => answer.answer,
            Err(e) => {
                tracing::warn!(error = %e, "chat request failed");
                self.text().fallback.to_string()
            }
        };
        self.status = ChatStatus::Idle;
        self.log.push(ChatMessage::bot(text));
        &self.log[self.log.len() - 1]
    }

    /// Send `input` and wait for the reply. Returns `None` when the input
    /// is blank or a reply is already awaited.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if self.status != ChatStatus::Idle {
            return None;
        }
        self.set_input(input);
        let pending = self.begin_send()?;
        let result = self
            .ctx
            .api
            .send_chat_message(&pending.question, pending.user_id, pending.language)
            .await;
        Some(self.complete(result))
    }

    #[must_use]
    pub const fn sidebar(&self) -> &DataState<AlertBoard> {
        self.sidebar.state()
    }

    pub fn poll(&mut self) -> &DataState<AlertBoard> {
        self.sidebar.poll()
    }

    pub async fn settle(&mut self) -> &DataState<AlertBoard> {
        self.sidebar.settle().await
    }
}
