use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Finished SEO analysis for a single page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// URL that was analyzed
    pub url: String,

    /// Title of the analyzed page
    pub title: String,

    /// Markdown-formatted analysis text
    pub markdown: String,
}

impl Report {
    /// Create a new report instance
    pub fn new(url: String, title: String, markdown: String) -> Self {
        Self {
            url,
            title,
            markdown,
        }
    }

    /// Download filename derived from the analyzed URL
    pub fn suggested_filename(&self) -> String {
        format!("seo_analysis_{}.md", sanitize_filename(&self.url))
    }

    /// Write the markdown report to the given path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path, &self.markdown)
    }
}

/// Convert a URL to a sanitized filename fragment
pub fn sanitize_filename(url: &str) -> String {
    // Remove protocol and replace invalid filename characters
    let mut name = url.replace("http://", "").replace("https://", "");
    name = name.replace(['/', ':', '?', '&', '=', '#', '%'], "_");

    // Limit filename length
    if name.chars().count() > 100 {
        name.chars().take(100).collect()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename() {
        // Scheme stripped, path separators replaced
        assert_eq!(sanitize_filename("https://example.com/a/b"), "example.com_a_b");
        assert_eq!(sanitize_filename("http://example.com"), "example.com");

        // Query characters replaced
        assert_eq!(
            sanitize_filename("https://example.com/p?q=1&r=2"),
            "example.com_p_q_1_r_2"
        );

        // Long names are capped
        let long_url = format!("https://example.com/{}", "a".repeat(200));
        assert_eq!(sanitize_filename(&long_url).chars().count(), 100);
    }

    #[test]
    fn test_suggested_filename() {
        let report = Report::new(
            "https://example.com/".to_string(),
            "Example".to_string(),
            "# Report".to_string(),
        );
        assert_eq!(report.suggested_filename(), "seo_analysis_example.com_.md");
    }

    #[test]
    fn test_save_writes_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        let report = Report::new(
            "https://example.com".to_string(),
            "Example".to_string(),
            "# Report\nScore: 80".to_string(),
        );
        report.save(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Report\nScore: 80"
        );
    }
}
