//! Test doubles for the chat platform and the completion backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use poise::serenity_prelude::{ChannelId, MessageId, UserId};

use crate::error::{BotError, Result};
use crate::events::{ChatActions, IncomingMessage};
use crate::openai::{CompletionBackend, CompletionRequest};

pub const BOT_ID: u64 = 123;
pub const USER_ID: u64 = 42;
pub const CHANNEL_ID: u64 = 900;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Fetch(MessageId),
    Typing(ChannelId),
    Reply(MessageId, String),
    Send(ChannelId, String),
}

/// Records every outbound call; fetches resolve to `referenced_author`.
#[derive(Default)]
pub struct RecordingActions {
    pub referenced_author: Option<UserId>,
    pub known_channels: Vec<ChannelId>,
    pub fail_replies: bool,
    pub fail_typing: bool,
    pub actions: Mutex<Vec<Action>>,
}

impl RecordingActions {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }

    fn record(&self, action: Action) {
        self.actions.lock().unwrap().push(action);
    }
}

#[async_trait]
impl ChatActions for RecordingActions {
    async fn fetch_author(&self, _channel_id: ChannelId, message_id: MessageId) -> Result<UserId> {
        self.record(Action::Fetch(message_id));
        self.referenced_author
            .ok_or_else(|| BotError::Config("Unknown Message".to_string()))
    }

    async fn broadcast_typing(&self, channel_id: ChannelId) -> Result<()> {
        self.record(Action::Typing(channel_id));
        if self.fail_typing {
            return Err(BotError::Config("typing rejected".to_string()));
        }
        Ok(())
    }

    async fn reply(&self, message: &IncomingMessage, content: &str) -> Result<()> {
        self.record(Action::Reply(message.id, content.to_string()));
        if self.fail_replies {
            return Err(BotError::Config("reply rejected".to_string()));
        }
        Ok(())
    }

    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<()> {
        self.record(Action::Send(channel_id, content.to_string()));
        Ok(())
    }

    fn has_channel(&self, channel_id: ChannelId) -> bool {
        self.known_channels.contains(&channel_id)
    }
}

/// Answers every request with a fixed reply, or fails when `reply` is `None`.
#[derive(Default)]
pub struct ScriptedBackend {
    pub reply: Option<String>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::default(),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().ok_or_else(|| BotError::CompletionApi {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "quota exceeded".to_string(),
        })
    }
}

pub fn message(content: &str, mentions: &[u64], reference: Option<u64>) -> IncomingMessage {
    IncomingMessage {
        id: MessageId::new(1000),
        channel_id: ChannelId::new(CHANNEL_ID),
        author_id: UserId::new(USER_ID),
        author_tag: "alice#0".to_string(),
        author_is_bot: false,
        content: content.to_string(),
        mentions: mentions.iter().copied().map(UserId::new).collect(),
        reference: reference.map(MessageId::new),
    }
}

#[async_trait]
impl CompletionBackend for Arc<ScriptedBackend> {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.as_ref().complete(request).await
    }
}
