//! Handler for "guild member added" events.

use log::{debug, info};
use poise::serenity_prelude::{ChannelId, Mentionable};

use crate::error::Result;
use crate::events::{ChatActions, NewMember};

use super::composer::WelcomeComposer;

/// Posts a welcome for `member` in `channel_id`.
///
/// Does nothing when the channel is not known to the client.
pub async fn handle_member_added(
    actions: &dyn ChatActions,
    composer: &WelcomeComposer,
    channel_id: ChannelId,
    member: &NewMember,
) -> Result<()> {
    if !actions.has_channel(channel_id) {
        debug!("Welcome channel {channel_id} not found, skipping welcome for {}", member.tag);
        return Ok(());
    }

    let welcome = composer.compose(member.user_id.mention());
    actions.send(channel_id, &welcome).await?;

    info!("Welcomed new member: {}", member.tag);
    Ok(())
}
