//! Inbound event shapes and the outbound actions the handlers need.
//!
//! Handlers only see these types, so they can be driven without a gateway
//! connection. [`crate::discord`] implements [`ChatActions`] over serenity.

use async_trait::async_trait;
use poise::serenity_prelude::{ChannelId, Message as SerenityMessage, Member, MessageId, UserId};

use crate::error::Result;

/// A "message created" event, reduced to what the responder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub author_tag: String,
    /// Author is an automated account (bots and webhooks).
    pub author_is_bot: bool,
    pub content: String,
    pub mentions: Vec<UserId>,
    /// The message this one replies to, if any.
    pub reference: Option<MessageId>,
}

impl From<&SerenityMessage> for IncomingMessage {
    fn from(message: &SerenityMessage) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            author_tag: message.author.tag(),
            author_is_bot: message.author.bot || message.webhook_id.is_some(),
            content: message.content.clone(),
            mentions: message.mentions.iter().map(|user| user.id).collect(),
            reference: message
                .message_reference
                .as_ref()
                .and_then(|reference| reference.message_id),
        }
    }
}

/// A "guild member added" event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub user_id: UserId,
    pub tag: String,
}

impl From<&Member> for NewMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            tag: member.user.tag(),
        }
    }
}

/// Outbound operations against the chat platform.
#[async_trait]
pub trait ChatActions: Send + Sync {
    /// Fetch a message and return its author.
    async fn fetch_author(&self, channel_id: ChannelId, message_id: MessageId) -> Result<UserId>;

    async fn broadcast_typing(&self, channel_id: ChannelId) -> Result<()>;

    /// Send `content` as a reply to `message`.
    async fn reply(&self, message: &IncomingMessage, content: &str) -> Result<()>;

    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<()>;

    /// Whether the channel is known to the client.
    fn has_channel(&self, channel_id: ChannelId) -> bool;
}
