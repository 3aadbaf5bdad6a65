use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the hosted OpenAI-style backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key; when absent the OPENAI_API_KEY environment variable is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model identifier to request
    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Sampling temperature for the completion
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Chat completions endpoint
    #[serde(default = "default_openai_endpoint")]
    pub endpoint: String,
}

/// Configuration for the local Ollama backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server
    #[serde(default = "default_ollama_url")]
    pub url: String,

    /// Model identifier to request
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

/// Enum containing all backend configuration types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BackendConfigType {
    /// Hosted backend configuration
    OpenAi(OpenAiConfig),

    /// Local Ollama backend configuration
    Ollama(OllamaConfig),
}

impl BackendConfigType {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default model for the hosted backend
fn default_openai_model() -> String {
    "gpt-4".to_string()
}

/// Default sampling temperature
fn default_temperature() -> f32 {
    0.7
}

/// Default chat completions endpoint
fn default_openai_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

/// Default URL of the local Ollama server
fn default_ollama_url() -> String {
    "http://localhost:11434".to_string()
}

/// Default model served by Ollama
fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_openai_model(),
            temperature: default_temperature(),
            endpoint: default_openai_endpoint(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_ollama_url(),
            model: default_ollama_model(),
        }
    }
}
