//! Answer generation seam.
//!
//! The pipeline only needs markdown text back. The bundled generator is a
//! deterministic placeholder; a search- or model-backed implementation plugs
//! in behind the same trait.

use gander_shared::{Result, RunConfig};

/// Inputs handed to an answer generator.
#[derive(Debug, Clone, Copy)]
pub struct AnswerRequest<'a> {
    /// End-user question.
    pub question: &'a str,
    /// Brand name the question is about.
    pub brand: &'a str,
    /// Brand's canonical site URL.
    pub brand_url: &'a str,
}

impl<'a> From<&'a RunConfig> for AnswerRequest<'a> {
    fn from(config: &'a RunConfig) -> Self {
        Self {
            question: &config.question,
            brand: &config.brand,
            brand_url: &config.brand_url,
        }
    }
}

/// Produces a markdown answer for a brand question.
pub trait AnswerGenerator {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Generate the answer text.
    fn generate(&self, request: &AnswerRequest<'_>) -> Result<String>;
}

/// Fixed answer citing the brand site and one third-party review.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnswer;

impl AnswerGenerator for PlaceholderAnswer {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn generate(&self, request: &AnswerRequest<'_>) -> Result<String> {
        let AnswerRequest {
            brand, brand_url, ..
        } = *request;

        Ok(format!(
            "Here is a brief answer to your question about {brand}.\n\n\
             For full details, see the official site: {brand_url}\n\
             You may also find third-party reviews helpful at https://example.org/review.\n"
        ))
    }
}
