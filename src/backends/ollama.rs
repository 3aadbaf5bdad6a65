use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use super::BackendError;
use crate::config::OllamaConfig;
use crate::prompt::Prompt;

// Local models can be slow on long pages; bound the wait
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(120);

/// Prompt used by the availability probe
const PROBE_PROMPT: &str = "hi";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Local Ollama generation backend
pub struct OllamaBackend {
    client: reqwest::Client,
    base_url: Url,
    model: String,
}

impl OllamaBackend {
    /// Create a backend from its configuration
    ///
    /// A malformed server URL falls back to the default local endpoint.
    pub fn new(config: &OllamaConfig) -> Self {
        let base_url = Url::parse(&config.url)
            .unwrap_or_else(|_| Url::parse("http://localhost:11434").unwrap());

        Self {
            client: reqwest::Client::new(),
            base_url,
            model: config.model.clone(),
        }
    }

    /// Endpoint for generation requests
    fn generate_url(&self) -> String {
        format!("{}api/generate", self.base_url)
    }

    /// Endpoint listing the models the server has available
    fn tags_url(&self) -> String {
        format!("{}api/tags", self.base_url)
    }

    /// Probe the server before offering the backend as usable
    ///
    /// The server must answer on its tags endpoint and the configured model
    /// must complete a trivial prompt.
    pub async fn ensure_available(&self) -> Result<(), BackendError> {
        let tags_response = self
            .client
            .get(self.tags_url())
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !tags_response.status().is_success() {
            return Err(BackendError::Unavailable(format!(
                "tags endpoint returned {}",
                tags_response.status()
            )));
        }

        let probe = GenerateRequest {
            model: &self.model,
            prompt: PROBE_PROMPT,
            stream: false,
        };

        let probe_response = self
            .client
            .post(self.generate_url())
            .json(&probe)
            .send()
            .await
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !probe_response.status().is_success() {
            return Err(BackendError::Unavailable(format!(
                "model {} failed a test generation with status {}",
                self.model,
                probe_response.status()
            )));
        }

        ::log::debug!("Ollama server detected at {}", self.base_url);
        Ok(())
    }

    /// Send the merged prompt and return the markdown answer
    pub async fn analyze(&self, prompt: &Prompt) -> Result<String, BackendError> {
        let merged = prompt.merged();
        let request = GenerateRequest {
            model: &self.model,
            prompt: &merged,
            stream: false,
        };

        ::log::info!(
            "Requesting generation from {} (model {})",
            self.generate_url(),
            self.model
        );

        let response = self
            .client
            .post(self.generate_url())
            .timeout(COMPLETION_TIMEOUT)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Carry the raw body; the status line alone rarely identifies
            // what the local server rejected
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.response)
    }
}
