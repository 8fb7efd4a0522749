//! Input resolution for the address bar

use crate::frame::encode_component;

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Navigate to a URL
    Navigate(String),
    /// Perform a search
    Search(String),
}

impl Resolution {
    /// The URL to load either way.
    pub fn into_url(self) -> String {
        match self {
            Resolution::Navigate(url) | Resolution::Search(url) => url,
        }
    }
}

pub struct InputResolver {
    /// Search engine URL template (%s replaced with the encoded query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: "https://google.com/search?q=%s".to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a load target. Returns `None` for empty
    /// input, which callers ignore.
    ///
    /// Any input containing a space is treated as a search query, even
    /// when it carries a scheme. Longstanding heuristic, kept as is.
    pub fn resolve(&self, input: &str) -> Option<Resolution> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        if input.contains(' ') {
            let url = self.search_template.replace("%s", &encode_component(input));
            tracing::debug!(query = input, "Resolved input as search");
            return Some(Resolution::Search(url));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Some(Resolution::Navigate(input.to_string()));
        }

        Some(Resolution::Navigate(format!("https://{input}")))
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        let resolver = InputResolver::new();
        assert_eq!(
            resolver.resolve("example.com"),
            Some(Resolution::Navigate("https://example.com".to_string()))
        );
    }

    #[test]
    fn test_explicit_scheme_preserved() {
        let resolver = InputResolver::new();
        assert_eq!(
            resolver.resolve("http://example.com"),
            Some(Resolution::Navigate("http://example.com".to_string()))
        );
        assert_eq!(
            resolver.resolve("https://example.com/path"),
            Some(Resolution::Navigate("https://example.com/path".to_string()))
        );
    }

    #[test]
    fn test_space_means_search() {
        let resolver = InputResolver::new();
        match resolver.resolve("hello world") {
            Some(Resolution::Search(url)) => {
                assert_eq!(url, "https://google.com/search?q=hello%20world");
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }

    #[test]
    fn test_scheme_with_space_still_searches() {
        let resolver = InputResolver::new();
        assert!(matches!(
            resolver.resolve("https://example.com/a path"),
            Some(Resolution::Search(_))
        ));
    }

    #[test]
    fn test_empty_input_ignored() {
        let resolver = InputResolver::new();
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve("   "), None);
    }

    #[test]
    fn test_custom_search_engine() {
        let resolver =
            InputResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string());
        match resolver.resolve("rust book") {
            Some(Resolution::Search(url)) => {
                assert_eq!(url, "https://duckduckgo.com/?q=rust%20book");
            }
            other => panic!("expected Search, got {other:?}"),
        }
    }
}
