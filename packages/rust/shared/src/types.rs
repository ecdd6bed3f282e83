//! Payload types emitted by a Gander run.

use serde::{Deserialize, Serialize};
use url::Url;

/// Fixed diagnostic note recorded in every payload's metadata.
pub const SKELETON_NOTES: &str = "Skeleton run without search or real model calls.";

// ---------------------------------------------------------------------------
// Budgets
// ---------------------------------------------------------------------------

/// Hard caps for search and source selection. Recorded, not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budgets {
    /// Maximum number of web searches.
    pub max_searches: i64,
    /// Maximum number of sources included in the answer.
    pub max_sources: i64,
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Usage counters for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    /// Searches performed (always zero until search is wired in).
    pub searches: u32,
    /// Owned plus external sources present in the payload.
    pub sources_included: usize,
}

/// The `metadata` object of the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Model identifier the answer is attributed to.
    pub model: String,
    /// Configured budgets.
    pub budgets: Budgets,
    /// Usage counts.
    pub usage: Usage,
    /// Free-form run diagnostics.
    pub notes: String,
}

// ---------------------------------------------------------------------------
// OutputPayload
// ---------------------------------------------------------------------------

/// Canonical JSON payload returned by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPayload {
    /// User-facing answer in markdown.
    pub human_response_markdown: String,
    /// Every URL cited in the answer, de-duplicated, in reading order.
    #[serde(default)]
    pub citations: Vec<String>,
    /// Every occurrence of the brand name in the answer.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// URLs under the brand's domain or its subdomains.
    #[serde(default)]
    pub owned_sources: Vec<Url>,
    /// Non-owned external URLs present in the answer.
    #[serde(default)]
    pub sources: Vec<Url>,
    /// Budgets, usage counts, and run diagnostics.
    pub metadata: Metadata,
}

impl OutputPayload {
    /// Render the payload as pretty-printed (2-space indented) JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
