use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::BackendError;
use crate::config::OpenAiConfig;
use crate::prompt::Prompt;

// Hosted services may stall on long generations; bound the wait
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

// Wire format of the chat completions API

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Hosted chat-completion backend
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    endpoint: String,
}

impl OpenAiBackend {
    /// Create a backend from its configuration
    pub fn new(config: &OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            endpoint: config.endpoint.clone(),
        }
    }

    /// The hosted backend is usable once a credential is present
    pub fn ensure_available(&self) -> Result<(), BackendError> {
        match self.api_key {
            Some(_) => Ok(()),
            None => Err(BackendError::MissingApiKey),
        }
    }

    /// Send the system/user message pair and return the markdown answer
    pub async fn analyze(&self, prompt: &Prompt) -> Result<String, BackendError> {
        // Checked before any request goes out
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(BackendError::MissingApiKey)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
        };

        ::log::info!(
            "Requesting completion from {} (model {})",
            self.endpoint,
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .timeout(COMPLETION_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| BackendError::Response("completion contained no choices".to_string()))
    }
}
