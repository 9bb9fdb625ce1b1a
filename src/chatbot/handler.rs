//! Handler for "message created" events.

use log::{debug, error, info};
use poise::serenity_prelude::UserId;

use crate::error::Result;
use crate::events::{ChatActions, IncomingMessage};

use super::gateway::CompletionGateway;
use super::normalize::clean_content;
use super::responder::should_respond;

pub const EMPTY_MENTION_REPLY: &str = "Hey! How can I help you? 👋";

pub const SEND_FAILURE_REPLY: &str = "Oops! Something went wrong. Please try again! 😅";

/// Answers messages addressed to the bot with a completion.
///
/// Returns an error only when the apology for a failed send cannot be sent
/// either.
pub async fn handle_message(
    actions: &dyn ChatActions,
    gateway: &CompletionGateway,
    message: &IncomingMessage,
    bot_user_id: UserId,
) -> Result<()> {
    if message.author_is_bot {
        return Ok(());
    }

    if !should_respond(actions, message, bot_user_id).await {
        return Ok(());
    }

    info!(
        "Received message from {} in channel {}: {}",
        message.author_tag, message.channel_id, message.content
    );

    let user_text = clean_content(&message.content, bot_user_id);
    if user_text.is_empty() {
        debug!("Message was only a mention, greeting instead");
        actions.reply(message, EMPTY_MENTION_REPLY).await?;
        return Ok(());
    }

    if let Err(e) = respond(actions, gateway, message, &user_text).await {
        error!("Error sending message to {}: {e}", message.author_tag);
        actions.reply(message, SEND_FAILURE_REPLY).await?;
    }

    Ok(())
}

async fn respond(
    actions: &dyn ChatActions,
    gateway: &CompletionGateway,
    message: &IncomingMessage,
    user_text: &str,
) -> Result<()> {
    actions.broadcast_typing(message.channel_id).await?;

    let reply = gateway.get_completion(user_text).await;
    actions.reply(message, &reply).await?;

    info!(
        "Replied to {} in channel {}: {}",
        message.author_tag, message.channel_id, reply
    );
    Ok(())
}
