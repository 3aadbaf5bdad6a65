use crate::extractor::FetchedPage;

/// System instruction describing the report the backend must produce
pub const SYSTEM_PROMPT: &str = "You are an SEO Expert and Web Development Engineer. Analyze the website content and provide a detailed SEO analysis with these sections:
1. Overall SEO Score (0-100)
2. Key Findings
3. Critical Issues
4. Recommendations
5. Technical Details
6. Mobile-friendly Analysis
7. Performance Analysis
8. Additional SEO Factors
Respond in markdown format.";

/// Maximum number of body text characters embedded in a prompt
pub const MAX_BODY_CHARS: usize = 100_000;

/// System/user prompt pair handed to a completion backend
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Instruction describing the expected report
    pub system: String,

    /// Page content to analyze
    pub user: String,
}

impl Prompt {
    /// Single concatenated form for backends without a system/user split
    pub fn merged(&self) -> String {
        format!("{}\n\n{}", self.system, self.user)
    }
}

/// Builds the analysis prompt for an extracted page
///
/// The page title, URL and body text are embedded verbatim, except that
/// body text beyond `MAX_BODY_CHARS` is cut off.
pub fn build(page: &FetchedPage) -> Prompt {
    let body_text = clip_body(&page.body_text);

    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user: format!(
            "Analyzing website: {}\nURL: {}\n\nContent:\n{}",
            page.title, page.url, body_text
        ),
    }
}

/// Truncates oversized body text at a char boundary
fn clip_body(body_text: &str) -> &str {
    if body_text.len() <= MAX_BODY_CHARS {
        return body_text;
    }

    let mut end = MAX_BODY_CHARS;
    while !body_text.is_char_boundary(end) {
        end -= 1;
    }

    ::log::warn!(
        "Page text truncated from {} to {} characters before prompting",
        body_text.len(),
        end
    );
    &body_text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::FetchedPage;

    #[test]
    fn test_build_embeds_page_fields_verbatim() {
        let page = FetchedPage::new(
            "http://x.test".to_string(),
            "Example".to_string(),
            "Hello".to_string(),
        );
        let built = build(&page);

        assert!(built.user.contains("Example"));
        assert!(built.user.contains("http://x.test"));
        assert!(built.user.contains("Hello"));
        assert_eq!(built.system, SYSTEM_PROMPT);
    }

    #[test]
    fn test_merged_puts_system_before_user() {
        let built = Prompt {
            system: "SYS".to_string(),
            user: "USER".to_string(),
        };
        assert_eq!(built.merged(), "SYS\n\nUSER");
    }

    #[test]
    fn test_clip_body_keeps_short_text_intact() {
        assert_eq!(clip_body("short"), "short");
    }

    #[test]
    fn test_clip_body_respects_char_boundaries() {
        // Three-byte chars do not divide the limit evenly, so the cut has
        // to back off to the previous boundary
        let body = "€".repeat(MAX_BODY_CHARS / 3 + 10);
        let clipped = clip_body(&body);

        assert!(clipped.len() <= MAX_BODY_CHARS);
        assert_eq!(clipped.len() % 3, 0);
        assert!(clipped.chars().all(|c| c == '€'));
    }
}
