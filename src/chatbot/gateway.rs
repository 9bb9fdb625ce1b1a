//! Single-attempt completion calls with a static fallback.

use log::{debug, error};

use crate::openai::{CompletionBackend, CompletionRequest};

/// Upper bound on generated tokens; keeps replies chat-sized.
pub const MAX_TOKENS: u32 = 120;

pub const TEMPERATURE: f32 = 0.7;

pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble thinking right now. Please try again later! 😅";

pub struct CompletionGateway {
    backend: Box<dyn CompletionBackend>,
    system_prompt: String,
}

impl CompletionGateway {
    pub fn new(backend: Box<dyn CompletionBackend>, system_prompt: String) -> Self {
        Self {
            backend,
            system_prompt,
        }
    }

    /// Asks the backend to answer `user_text` in persona.
    ///
    /// Never fails: any backend error is logged and answered with
    /// [`FALLBACK_REPLY`].
    pub async fn get_completion(&self, user_text: &str) -> String {
        let request = CompletionRequest {
            system_prompt: self.system_prompt.clone(),
            user_text: user_text.to_string(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        match self.backend.complete(&request).await {
            Ok(reply) => {
                debug!("Completion returned {} characters", reply.len());
                reply
            }
            Err(e) => {
                error!("Completion API error: {e}");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
