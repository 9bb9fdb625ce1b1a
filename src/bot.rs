//! Discord bot wiring and event dispatch.

use log::{debug, error, info};
use poise::{
    Framework, FrameworkOptions,
    serenity_prelude::{
        ActivityData, ChannelId, ClientBuilder, Context, FullEvent, GatewayIntents, UserId,
    },
};

use crate::chatbot::{CompletionGateway, handle_message};
use crate::config::Config;
use crate::discord::SerenityActions;
use crate::error::Result;
use crate::events::{IncomingMessage, NewMember};
use crate::openai::OpenAiClient;
use crate::welcome::{WelcomeComposer, handle_member_added};

const ACTIVITY_NAME: &str = "Mention me!";
const ACTIVITY_URL: &str = "https://www.twitch.tv/vormaza";

pub struct Data {
    bot_user_id: UserId,
    gateway: CompletionGateway,
    welcome: WelcomeComposer,
    welcome_channel_id: ChannelId,
}

/// Run the Discord bot.
pub async fn run() -> Result<()> {
    info!("Initializing bot");
    let config = Config::from_env()?;

    debug!("Initializing OpenAI client");
    let backend = OpenAiClient::new(config.openai_api_key, config.openai_model);
    let gateway = CompletionGateway::new(Box::new(backend), config.system_prompt);
    let welcome_channel_id = config.welcome_channel_id;

    debug!("Setting up gateway intents");
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    debug!("Building framework");
    let framework = Framework::builder()
        .options(FrameworkOptions {
            event_handler: |ctx, event, _framework, data| Box::pin(event_handler(ctx, event, data)),
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!("Bot is ready! Logged in as {}", ready.user.tag());

                ctx.set_activity(Some(ActivityData::streaming(ACTIVITY_NAME, ACTIVITY_URL)?));
                info!("Listening for mentions and replies...");

                Ok(Data {
                    bot_user_id: ready.user.id,
                    gateway,
                    welcome: WelcomeComposer::default(),
                    welcome_channel_id,
                })
            })
        })
        .build();

    debug!("Creating Discord client");
    let mut client = ClientBuilder::new(config.discord_token, intents)
        .framework(framework)
        .await?;

    info!("Starting Discord client");

    tokio::select! {
        result = client.start() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, shutting down...");
        }
    }

    Ok(())
}

async fn event_handler(ctx: &Context, event: &FullEvent, data: &Data) -> Result<()> {
    let actions = SerenityActions::new(ctx);

    match event {
        FullEvent::Message { new_message } => {
            let message = IncomingMessage::from(new_message);
            if let Err(e) =
                handle_message(&actions, &data.gateway, &message, data.bot_user_id).await
            {
                error!("Error handling message from {}: {e}", message.author_tag);
            }
        }
        FullEvent::GuildMemberAddition { new_member } => {
            let member = NewMember::from(new_member);
            if let Err(e) = handle_member_added(
                &actions,
                &data.welcome,
                data.welcome_channel_id,
                &member,
            )
            .await
            {
                error!("Error sending welcome message for {}: {e}", member.tag);
            }
        }
        _ => {}
    }

    Ok(())
}
