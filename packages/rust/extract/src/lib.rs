//! Fact extraction from generated answer text.
//!
//! Pulls cited URLs and brand mentions out of free-form markdown and
//! classifies URLs as owned by the brand or external. Every function here is
//! pure and infallible: malformed input degrades to empty results.

mod domain;
mod mentions;
mod urls;

use std::collections::HashSet;

use tracing::debug;

pub use domain::{is_owned, normalize_domain, split_owned_external};
pub use mentions::extract_mentions;
pub use urls::extract_urls;

/// Everything extracted from one answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    /// Unique URLs in first-occurrence order.
    pub urls: Vec<String>,
    /// Every brand mention, repeats included.
    pub mentions: Vec<String>,
    /// URLs on the brand domain or a subdomain of it.
    pub owned: Vec<String>,
    /// All other URLs.
    pub external: Vec<String>,
}

/// Run every extractor over `markdown`.
///
/// `brand_domain` is the already-normalized host of the brand URL; an empty
/// string means no URL is owned.
pub fn extract(markdown: &str, brand: &str, brand_domain: &str) -> ExtractionResult {
    let urls = extract_urls(markdown);
    let (owned, external) = split_owned_external(&urls, brand_domain);
    let mentions = extract_mentions(markdown, brand);

    debug!(
        urls = urls.len(),
        mentions = mentions.len(),
        owned = owned.len(),
        external = external.len(),
        "extraction complete"
    );

    ExtractionResult {
        urls,
        mentions,
        owned,
        external,
    }
}

/// Drop repeats, keeping the first occurrence of each item in place.
pub(crate) fn dedup_in_order<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}
