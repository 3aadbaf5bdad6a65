use crate::extractor;
use crate::prompt;
use crate::report::Report;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_prompt_report_pipeline() {
        // The full flow with a fixed page and a fixed backend answer
        let html = "<html><title>T</title><body><p>Hi</p><script>bad()</script></body></html>";
        let page = extractor::extract("http://x.test", html);

        assert_eq!(page.title, "T");
        assert_eq!(page.body_text, "Hi");

        let built = prompt::build(&page);
        assert!(built.user.contains("T"));
        assert!(built.user.contains("http://x.test"));
        assert!(built.user.contains("Hi"));
        assert!(!built.user.contains("bad()"));

        // The backend answer reaches the report unmodified
        let answer = "# Report\nScore: 80";
        let report = Report::new(page.url, page.title, answer.to_string());
        assert_eq!(report.markdown, "# Report\nScore: 80");
    }

    #[test]
    fn test_report_filename_follows_url() {
        let report = Report::new(
            "https://example.com/pricing".to_string(),
            "Example".to_string(),
            "# Report".to_string(),
        );
        assert_eq!(
            report.suggested_filename(),
            "seo_analysis_example.com_pricing.md"
        );
    }
}
