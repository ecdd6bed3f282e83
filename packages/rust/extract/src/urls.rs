//! HTTP(S) URL extraction from markdown text.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `http://` or `https://` up to whitespace, `)`, `>` or `]`.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s)>\]]+").expect("URL regex"));

/// Prose punctuation trimmed from the end of a matched URL.
const TRAILING_PUNCTUATION: &[char] = &[')', '.', ',', ';', ':', '!', '?'];

/// Return all HTTP(S) URLs in reading order, de-duplicated and cleaned.
///
/// Trailing sentence punctuation is not part of the URL, so
/// `see https://example.org/review.` yields `https://example.org/review`.
pub fn extract_urls(markdown: &str) -> Vec<String> {
    crate::dedup_in_order(
        URL_RE
            .find_iter(markdown)
            .map(|m| m.as_str().trim_end_matches(TRAILING_PUNCTUATION)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_markdown_and_bare_links() {
        let text = "See [site](https://brand.example.com/page) and also https://example.org/review.\n\
                    Bare link: http://brand.example.com/faq)";
        assert_eq!(
            extract_urls(text),
            vec![
                "https://brand.example.com/page",
                "https://example.org/review",
                "http://brand.example.com/faq",
            ]
        );
    }

    #[test]
    fn duplicates_keep_first_position() {
        let text = "https://b.example https://a.example, https://b.example. https://a.example";
        assert_eq!(
            extract_urls(text),
            vec!["https://b.example", "https://a.example"]
        );
    }

    #[test]
    fn strips_runs_of_trailing_punctuation() {
        for suffix in [")", ".", ",", ";", ":", "!", "?", "?!", ".)", "..."] {
            let text = format!("go to https://example.org/x{suffix} now");
            assert_eq!(extract_urls(&text), vec!["https://example.org/x"], "suffix {suffix:?}");
        }
    }

    #[test]
    fn keeps_query_and_fragment() {
        let text = "<https://example.org/search?q=gander&page=2#top>";
        assert_eq!(
            extract_urls(text),
            vec!["https://example.org/search?q=gander&page=2#top"]
        );
    }

    #[test]
    fn stops_at_closing_bracket() {
        assert_eq!(
            extract_urls("[https://example.org/a]"),
            vec!["https://example.org/a"]
        );
    }

    #[test]
    fn ignores_other_schemes() {
        assert!(extract_urls("ftp://files.example.org and mailto:me@example.org").is_empty());
        assert!(extract_urls("HTTPS://EXAMPLE.ORG").is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(extract_urls("").is_empty());
    }
}
