use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Placeholder used when a document has no usable <title>
pub const TITLE_PLACEHOLDER: &str = "No title found";

// Element kinds that never contribute readable text
const STRIP_SELECTOR: &str = "body script, body style, body img, body input";

/// Title and readable text extracted from a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL the page was fetched from
    pub url: String,

    /// Title of the page, or the placeholder
    pub title: String,

    /// Newline-separated readable text from the page body
    pub body_text: String,
}

impl FetchedPage {
    /// Create a new fetched page instance
    pub fn new(url: String, title: String, body_text: String) -> Self {
        Self {
            url,
            title,
            body_text,
        }
    }
}

/// Extracts the title and readable body text from raw HTML
///
/// Always returns a best-effort result; malformed markup is repaired by the
/// HTML5 parsing algorithm rather than reported as an error.
pub fn extract(url: &str, html: &str) -> FetchedPage {
    let mut doc = Html::parse_document(html);

    let title = extract_title(&doc);
    strip_non_prose(&mut doc);
    let body_text = extract_body_text(&doc);

    FetchedPage::new(url.to_string(), title, body_text)
}

/// Returns the trimmed <title> text, or the placeholder when missing or empty
fn extract_title(doc: &Html) -> String {
    let title_selector = Selector::parse("title").unwrap();

    doc.select(&title_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

/// Detaches script, style, img and input elements from the body subtree
fn strip_non_prose(doc: &mut Html) {
    let strip_selector = Selector::parse(STRIP_SELECTOR).unwrap();
    let node_ids: Vec<_> = doc.select(&strip_selector).map(|el| el.id()).collect();

    ::log::debug!("Removing {} non-prose elements", node_ids.len());
    for id in node_ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Joins the remaining body text nodes with newlines
fn extract_body_text(doc: &Html) -> String {
    let body_selector = Selector::parse("body").unwrap();

    match doc.select(&body_selector).next() {
        Some(body) => body
            .text()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n"),
        None => String::new(),
    }
}
