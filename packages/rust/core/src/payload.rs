//! Payload assembly and validation.
//!
//! Turns a generated answer into the canonical [`OutputPayload`]: runs every
//! extractor, classifies sources against the brand domain, and checks that
//! each owned/external entry is a well-formed absolute HTTP(S) URL.

use tracing::{info, instrument, warn};
use url::Url;

use gander_extract::normalize_domain;
use gander_shared::{GanderError, Metadata, OutputPayload, Result, RunConfig, SKELETON_NOTES, Usage};

/// Longest URL accepted in a typed source field.
pub const MAX_URL_LENGTH: usize = 2083;

/// Assemble the payload for `answer`.
///
/// Fails with [`GanderError::Validation`] when an owned or external source
/// is not a valid HTTP(S) URL; nothing is silently dropped.
#[instrument(skip_all, fields(brand = %config.brand, model = %config.model))]
pub fn assemble(config: &RunConfig, answer: &str) -> Result<OutputPayload> {
    let brand_domain = normalize_domain(&config.brand_url).unwrap_or_default();
    if brand_domain.is_empty() {
        warn!(
            brand_url = %config.brand_url,
            "brand URL has no host, every source will be external"
        );
    }

    let extraction = gander_extract::extract(answer, &config.brand, &brand_domain);

    let owned_sources = validate_urls("owned_sources", &extraction.owned)?;
    let sources = validate_urls("sources", &extraction.external)?;
    let sources_included = owned_sources.len() + sources.len();

    info!(
        %brand_domain,
        citations = extraction.urls.len(),
        mentions = extraction.mentions.len(),
        owned = owned_sources.len(),
        external = sources.len(),
        "payload assembled"
    );

    Ok(OutputPayload {
        human_response_markdown: answer.trim().to_string(),
        citations: extraction.urls,
        mentions: extraction.mentions,
        owned_sources,
        sources,
        metadata: Metadata {
            model: config.model.clone(),
            budgets: config.budgets,
            usage: Usage {
                searches: 0,
                sources_included,
            },
            notes: SKELETON_NOTES.to_string(),
        },
    })
}

/// Parse every entry of a typed URL field, naming the first bad one.
fn validate_urls(field: &str, urls: &[String]) -> Result<Vec<Url>> {
    urls.iter()
        .enumerate()
        .map(|(i, raw)| {
            parse_http_url(raw)
                .map_err(|reason| GanderError::validation(format!("{field}[{i}] '{raw}': {reason}")))
        })
        .collect()
}

/// Parse `raw` as an absolute HTTP(S) URL with a host.
pub fn parse_http_url(raw: &str) -> std::result::Result<Url, String> {
    if raw.len() > MAX_URL_LENGTH {
        return Err(format!("longer than {MAX_URL_LENGTH} characters"));
    }

    let url = Url::parse(raw).map_err(|e| format!("not a valid URL ({e})"))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("scheme '{}' is not http or https", url.scheme()));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".to_string());
    }

    Ok(url)
}
