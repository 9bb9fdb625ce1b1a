use std::env;

use log::{debug, error, info};
use poise::serenity_prelude::ChannelId;

use crate::error::{BotError, Result};
use crate::persona::SYSTEM_PROMPT;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// The community's #general channel.
pub const DEFAULT_WELCOME_CHANNEL_ID: u64 = 475_617_095_351_009_281;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub system_prompt: String,
    pub welcome_channel_id: ChannelId,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment");
        dotenvy::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN").map_err(|e| {
            error!("Failed to load DISCORD_TOKEN from environment: {e}");
            e
        })?;

        let openai_api_key = env::var("OPENAI_API_KEY").map_err(|e| {
            error!("Failed to load OPENAI_API_KEY from environment: {e}");
            e
        })?;

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let system_prompt = env::var("SYSTEM_PROMPT").unwrap_or_else(|_| SYSTEM_PROMPT.to_string());

        let welcome_channel_id = match env::var("WELCOME_CHANNEL_ID") {
            Ok(raw) => parse_channel_id(&raw)?,
            Err(_) => ChannelId::new(DEFAULT_WELCOME_CHANNEL_ID),
        };

        info!("Configuration loaded successfully");
        debug!("Discord token length: {} characters", discord_token.len());
        debug!("OpenAI API key length: {} characters", openai_api_key.len());
        debug!("OpenAI model: {openai_model}");
        debug!("System prompt length: {} characters", system_prompt.len());
        debug!("Welcome channel: {welcome_channel_id}");

        Ok(Self {
            discord_token,
            openai_api_key,
            openai_model,
            system_prompt,
            welcome_channel_id,
        })
    }
}

fn parse_channel_id(raw: &str) -> Result<ChannelId> {
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(ChannelId::new(id)),
        _ => Err(BotError::Config(format!(
            "WELCOME_CHANNEL_ID must be a non-zero channel id, got '{raw}'"
        ))),
    }
}
