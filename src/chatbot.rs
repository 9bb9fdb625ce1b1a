//! AI chatbot module - answers mentions and replies to the bot.

mod gateway;
mod handler;
mod normalize;
mod responder;

pub use gateway::{CompletionGateway, FALLBACK_REPLY, MAX_TOKENS, TEMPERATURE};
pub use handler::{EMPTY_MENTION_REPLY, SEND_FAILURE_REPLY, handle_message};
pub use normalize::clean_content;
pub use responder::should_respond;
