//! Decides whether an incoming message is addressed to the bot.

use log::debug;
use poise::serenity_prelude::UserId;

use crate::events::{ChatActions, IncomingMessage};

/// Returns true when the message mentions the bot or replies to one of its
/// messages.
///
/// A reply target that cannot be fetched counts as not addressed to the bot.
pub async fn should_respond(
    actions: &dyn ChatActions,
    message: &IncomingMessage,
    bot_user_id: UserId,
) -> bool {
    if message.mentions.contains(&bot_user_id) {
        return true;
    }

    let Some(reference) = message.reference else {
        return false;
    };

    match actions.fetch_author(message.channel_id, reference).await {
        Ok(author_id) => author_id == bot_user_id,
        Err(e) => {
            debug!("Failed to fetch replied message {reference}: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::MessageId;

    use super::*;
    use crate::test_support::{Action, BOT_ID, RecordingActions, USER_ID, message};

    fn bot() -> UserId {
        UserId::new(BOT_ID)
    }

    #[tokio::test]
    async fn responds_to_direct_mention_without_fetching() {
        let actions = RecordingActions::default();
        let msg = message("<@123> hi", &[BOT_ID], Some(7));

        assert!(should_respond(&actions, &msg, bot()).await);
        assert!(actions.actions().is_empty());
    }

    #[tokio::test]
    async fn ignores_plain_message() {
        let actions = RecordingActions::default();
        let msg = message("hello everyone", &[USER_ID], None);

        assert!(!should_respond(&actions, &msg, bot()).await);
        assert!(actions.actions().is_empty());
    }

    #[tokio::test]
    async fn responds_to_reply_to_bot_without_mention() {
        let actions = RecordingActions {
            referenced_author: Some(bot()),
            ..Default::default()
        };
        let msg = message("and then?", &[], Some(7));

        assert!(should_respond(&actions, &msg, bot()).await);
        assert_eq!(actions.actions(), vec![Action::Fetch(MessageId::new(7))]);
    }

    #[tokio::test]
    async fn ignores_reply_to_someone_else() {
        let actions = RecordingActions {
            referenced_author: Some(UserId::new(USER_ID)),
            ..Default::default()
        };
        let msg = message("agreed", &[], Some(7));

        assert!(!should_respond(&actions, &msg, bot()).await);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_a_reply_to_bot() {
        let actions = RecordingActions::default();
        let msg = message("deleted parent", &[], Some(7));

        assert!(!should_respond(&actions, &msg, bot()).await);
    }
}
