//! Owned vs external source classification by host.

use tracing::trace;
use url::Url;

/// Return the lowercase host of `url`, with any leading dots stripped.
///
/// Yields `None` when the string does not parse as a URL or has no host.
/// This never fails loudly: a bad URL simply has no domain.
pub fn normalize_domain(url: &str) -> Option<String> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            trace!(url, error = %e, "unparsable URL has no domain");
            return None;
        }
    };

    let host = parsed.host_str()?.trim_start_matches('.').to_lowercase();
    (!host.is_empty()).then_some(host)
}

/// Whether `host` is `brand_domain` itself or one of its subdomains.
///
/// Comparison is case-insensitive. An empty brand domain owns nothing.
pub fn is_owned(host: &str, brand_domain: &str) -> bool {
    if host.is_empty() || brand_domain.is_empty() {
        return false;
    }

    let host = host.to_lowercase();
    let brand_domain = brand_domain.to_lowercase();

    host == brand_domain
        || host
            .strip_suffix(brand_domain.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

/// Partition URLs into owned vs external by comparing hosts.
///
/// URLs without a usable host are external. Each list is de-duplicated
/// independently, keeping first-occurrence order.
pub fn split_owned_external<S: AsRef<str>>(
    urls: &[S],
    brand_domain: &str,
) -> (Vec<String>, Vec<String>) {
    let (owned, external): (Vec<&str>, Vec<&str>) =
        urls.iter().map(|url| url.as_ref()).partition(|url| {
            normalize_domain(url).is_some_and(|host| is_owned(&host, brand_domain))
        });

    (
        crate::dedup_in_order(owned),
        crate::dedup_in_order(external),
    )
}
