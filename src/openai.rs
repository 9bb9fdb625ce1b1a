use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};
use crate::types::MessageRole;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// A single persona + user-turn exchange sent to the completion backend.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_text: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    fn messages(&self) -> Vec<Message> {
        vec![
            Message {
                role: MessageRole::System,
                content: Some(self.system_prompt.clone()),
            },
            Message {
                role: MessageRole::User,
                content: Some(self.user_text.clone()),
            },
        ]
    }
}

/// Request/response text generation service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Message {
    role: MessageRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

pub struct OpenAiClient {
    api_key: String,
    client: reqwest::Client,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
            model,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String> {
        debug!(
            "Sending request to OpenAI API (model: {}, max_tokens: {})",
            self.model, request.max_tokens
        );

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: request.messages(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {e}"));
            return Err(BotError::CompletionApi { status, message });
        }

        let api_response: ChatCompletionResponse = response.json().await?;
        let reply = extract_reply(api_response)?;

        debug!("Received response from OpenAI API");
        Ok(reply)
    }
}

fn extract_reply(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| BotError::CompletionResponse("No choices in response".to_string()))?
        .message
        .content
        .ok_or_else(|| BotError::CompletionResponse("Choice has no content".to_string()))
}
