use std::time::Duration;
use thiserror::Error;

/// Browser-like identification header sent with every page request
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36";

/// Default timeout for page requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error raised when a page could not be retrieved
#[derive(Debug, Error)]
#[error("error fetching website: {0}")]
pub struct FetchError(#[from] reqwest::Error);

/// Fetch the raw HTML for a URL
///
/// Performs a single GET request with a browser-like User-Agent header.
/// Any transport failure (DNS, connection, timeout) or non-2xx status is
/// reported as a `FetchError` carrying the underlying cause.
pub async fn fetch(url: &str, timeout: Duration) -> Result<String, FetchError> {
    ::log::info!("Fetching page: {}", url);

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send().await?.error_for_status()?;

    // reqwest decodes the body using the declared charset, falling back to UTF-8
    let html = response.text().await?;

    ::log::debug!("Fetched {} bytes from {}", html.len(), url);
    Ok(html)
}
