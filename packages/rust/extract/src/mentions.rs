//! Exact-case, whole-word brand mention extraction.
//!
//! An occurrence counts when the characters on either side of it are not word
//! characters (alphanumeric or `_`) or are the edge of the text. For brands
//! that begin and end with a word character this is the usual `\b` rule; for
//! brands like `C++` or `.NET` it still means "not glued to another word".

use regex::Regex;
use tracing::warn;

/// Return exact-case mentions of the brand from the answer text.
///
/// Every occurrence is returned, repeats included.
pub fn extract_mentions(markdown: &str, brand: &str) -> Vec<String> {
    if brand.is_empty() || markdown.is_empty() {
        return Vec::new();
    }

    // The brand is a literal, never a pattern.
    let pattern = match Regex::new(&regex::escape(brand)) {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "brand too large to match, skipping mentions");
            return Vec::new();
        }
    };

    let mut mentions = Vec::new();
    let mut start = 0;

    while let Some(m) = pattern.find_at(markdown, start) {
        if starts_word(markdown, m.start()) && ends_word(markdown, m.end()) {
            mentions.push(m.as_str().to_string());
            start = m.end();
        } else {
            // Retry one character further so overlapping candidates are not skipped.
            let step = markdown[m.start()..].chars().next().map_or(1, char::len_utf8);
            start = m.start() + step;
        }
    }

    mentions
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn starts_word(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().is_none_or(|c| !is_word_char(c))
}

fn ends_word(text: &str, at: usize) -> bool {
    text[at..].chars().next().is_none_or(|c| !is_word_char(c))
}
