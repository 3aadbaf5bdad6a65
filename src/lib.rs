// Re-export modules
pub mod backends;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod prompt;
pub mod report;

// Re-export commonly used types for convenience
pub use extractor::FetchedPage;
pub use report::Report;

use backends::{Backend, BackendError};
use config::BackendConfigType;
use fetcher::FetchError;
use std::time::Duration;

/// Errors that can end an analysis
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page could not be retrieved
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The completion backend could not produce a report
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Main builder for analyzing the SEO of a single page
pub struct Analysis {
    url: String,
    backend: BackendConfigType,
    fetch_timeout: Duration,
}

impl Analysis {
    /// Create a new Analysis builder for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            backend: BackendConfigType::OpenAi(config::OpenAiConfig::default()),
            fetch_timeout: fetcher::DEFAULT_TIMEOUT,
        }
    }

    /// Select the completion backend that produces the report
    pub fn with_backend(mut self, backend: BackendConfigType) -> Self {
        self.backend = backend;
        self
    }

    /// Set the page fetch timeout
    pub fn with_fetch_timeout(mut self, timeout_seconds: u64) -> Self {
        self.fetch_timeout = Duration::from_secs(timeout_seconds);
        self
    }

    /// Load the backend configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = BackendConfigType::from_file(path)?;
        Ok(self.with_backend(config))
    }

    /// Apply backend configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = serde_json::from_str(config_str)?;
        Ok(self.with_backend(config))
    }

    /// Run the pipeline: probe the backend, fetch, extract, prompt, complete
    pub async fn run(self) -> Result<Report, Error> {
        let mut backend_config = self.backend;

        // Fill in credentials and endpoints from the environment when the
        // configuration leaves them unset
        match &mut backend_config {
            BackendConfigType::OpenAi(openai_config) => {
                if openai_config.api_key.is_none() {
                    if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                        if !key.is_empty() {
                            openai_config.api_key = Some(key);
                        }
                    }
                }
            }
            BackendConfigType::Ollama(ollama_config) => {
                if let Ok(server_url) = std::env::var("OLLAMA_URL") {
                    if !server_url.is_empty() {
                        ollama_config.url = server_url;
                    }
                }
            }
        }

        // Validate the backend before any page is fetched
        let backend = Backend::from_config(&backend_config);
        backend.ensure_available().await?;

        let html = fetcher::fetch(&self.url, self.fetch_timeout).await?;
        let page = extractor::extract(&self.url, &html);
        ::log::info!(
            "Extracted page \"{}\" ({} bytes of text)",
            page.title,
            page.body_text.len()
        );

        let prompt = prompt::build(&page);
        let markdown = backend.analyze(&prompt).await?;

        Ok(Report::new(page.url, page.title, markdown))
    }
}
