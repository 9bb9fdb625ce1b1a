//! Serenity-backed implementation of [`ChatActions`].

use async_trait::async_trait;
use poise::serenity_prelude::{ChannelId, Context, CreateMessage, MessageId, UserId};

use crate::error::Result;
use crate::events::{ChatActions, IncomingMessage};

pub struct SerenityActions<'a> {
    ctx: &'a Context,
}

impl<'a> SerenityActions<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ChatActions for SerenityActions<'_> {
    async fn fetch_author(&self, channel_id: ChannelId, message_id: MessageId) -> Result<UserId> {
        let message = self.ctx.http.get_message(channel_id, message_id).await?;
        Ok(message.author.id)
    }

    async fn broadcast_typing(&self, channel_id: ChannelId) -> Result<()> {
        channel_id.broadcast_typing(&self.ctx.http).await?;
        Ok(())
    }

    async fn reply(&self, message: &IncomingMessage, content: &str) -> Result<()> {
        let reply = CreateMessage::new()
            .content(content)
            .reference_message((message.channel_id, message.id));
        message
            .channel_id
            .send_message(&self.ctx.http, reply)
            .await?;
        Ok(())
    }

    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<()> {
        channel_id.say(&self.ctx.http, content).await?;
        Ok(())
    }

    fn has_channel(&self, channel_id: ChannelId) -> bool {
        self.ctx.cache.channel(channel_id).is_some()
    }
}
