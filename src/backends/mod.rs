pub mod ollama;
pub mod openai;

#[cfg(test)]
mod tests;

use crate::config::BackendConfigType;
use crate::prompt::Prompt;
use thiserror::Error;

/// Error raised when a completion backend cannot produce a report
#[derive(Debug, Error)]
pub enum BackendError {
    /// The hosted backend was selected without an API key
    #[error("no API key provided for the hosted backend")]
    MissingApiKey,

    /// The local server failed its availability probe
    #[error("Ollama server is not available: {0}")]
    Unavailable(String),

    /// The request could not be sent or the response body not read
    #[error("backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The service answered successfully but with an unusable payload
    #[error("malformed backend response: {0}")]
    Response(String),
}

/// A completion backend selected at runtime
pub enum Backend {
    /// Hosted OpenAI-style chat completion API
    OpenAi(openai::OpenAiBackend),

    /// Locally running Ollama server
    Ollama(ollama::OllamaBackend),
}

impl Backend {
    /// Build the backend described by a configuration value
    pub fn from_config(config: &BackendConfigType) -> Self {
        match config {
            BackendConfigType::OpenAi(openai_config) => {
                Backend::OpenAi(openai::OpenAiBackend::new(openai_config))
            }
            BackendConfigType::Ollama(ollama_config) => {
                Backend::Ollama(ollama::OllamaBackend::new(ollama_config))
            }
        }
    }

    /// Check the backend preconditions before an analysis starts
    ///
    /// The hosted variant needs a credential; the local variant needs a
    /// reachable server whose model answers a trivial generation request.
    pub async fn ensure_available(&self) -> Result<(), BackendError> {
        match self {
            Backend::OpenAi(backend) => backend.ensure_available(),
            Backend::Ollama(backend) => backend.ensure_available().await,
        }
    }

    /// Produce a markdown report for the given prompt
    pub async fn analyze(&self, prompt: &Prompt) -> Result<String, BackendError> {
        match self {
            Backend::OpenAi(backend) => backend.analyze(prompt).await,
            Backend::Ollama(backend) => backend.analyze(prompt).await,
        }
    }
}
