use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use audit_page::config::{BackendConfigType, OllamaConfig, OpenAiConfig};

#[derive(Parser, Debug)]
#[command(name = "audit-page")]
#[command(about = "AI-powered SEO analysis for a single web page")]
#[command(version)]
pub struct Args {
    /// URL of the page to analyze (include http:// or https://)
    pub url: String,

    /// Completion backend that produces the report
    #[arg(short, long, value_enum, default_value_t = BackendArg::Openai)]
    pub backend: BackendArg,

    /// API key for the hosted backend (defaults to OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model identifier to request from the selected backend
    #[arg(short, long)]
    pub model: Option<String>,

    /// Base URL of the Ollama server
    #[arg(long)]
    pub ollama_url: Option<String>,

    /// Load the backend configuration from a JSON file instead of flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the report to a file named after the URL
    #[arg(short, long)]
    pub save: bool,

    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub fetch_timeout: u64,
}

/// Completion backends selectable from the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Openai,
    Ollama,
}

/// Convert command-line flags to a backend configuration
pub fn convert_backend(args: &Args) -> BackendConfigType {
    match args.backend {
        BackendArg::Openai => {
            let mut config = OpenAiConfig::default();
            config.api_key = args.api_key.clone();
            if let Some(model) = &args.model {
                config.model = model.clone();
            }
            BackendConfigType::OpenAi(config)
        }
        BackendArg::Ollama => {
            let mut config = OllamaConfig::default();
            if let Some(server_url) = &args.ollama_url {
                config.url = server_url.clone();
            }
            if let Some(model) = &args.model {
                config.model = model.clone();
            }
            BackendConfigType::Ollama(config)
        }
    }
}
