use serde::{Deserialize, Serialize};

use crate::core::hit::GeneHit;
use crate::core::types::TypingStatus;

/// Label for an unresolved mec or ccr complex
pub const NEGATIVE: &str = "Negative";

/// Label for an SCCmec type no rule could assign
pub const UNKNOWN_TYPE: &str = "Unknown";

/// Outcome of classifying one sample's gene hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub status: TypingStatus,

    /// Why classification stopped early (Negative and Error only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mec_complex: Option<String>,

    /// Sorted, `/`-joined ccr type names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccr_complex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sccmec_type: Option<String>,

    /// Unique gene symbols, sorted
    pub genes_detected: Vec<String>,

    pub warnings: Vec<String>,

    pub hits: Vec<GeneHit>,
}

impl ClassificationResult {
    /// A result for a call that could not be classified at all
    #[must_use]
    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            status: TypingStatus::Error,
            reason: Some(reason.into()),
            mec_complex: None,
            ccr_complex: None,
            sccmec_type: None,
            genes_detected: Vec::new(),
            warnings: Vec::new(),
            hits: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_gene(&self, gene: &str) -> bool {
        self.genes_detected.binary_search_by(|g| g.as_str().cmp(gene)).is_ok()
    }
}
