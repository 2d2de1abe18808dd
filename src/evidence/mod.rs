//! Turning raw alignment records into gene-presence evidence.
//!
//! - [`filter`]: direct mode, one alignment per gene hit, identity and
//!   coverage thresholds
//! - [`coverage`]: read mode, many read alignments merged into per-gene
//!   breadth of coverage
//!
//! Both produce [`GeneHit`]s of the same shape so the classifier does not need
//! to know how the evidence was gathered.

pub mod coverage;
pub mod filter;

use serde::{Deserialize, Serialize};

use crate::core::hit::GeneHit;
use crate::core::record::AlignmentRecord;
use crate::core::types::DetectionMode;

pub const DEFAULT_MIN_IDENTITY: f64 = 0.90;
pub const DEFAULT_MIN_COVERAGE: f64 = 0.80;
pub const DEFAULT_MIN_BREADTH: f64 = 0.90;

/// Acceptance thresholds for gene evidence (all inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvidenceConfig {
    /// Minimum alignment identity in direct mode
    pub min_identity: f64,
    /// Minimum gene coverage in direct mode
    pub min_coverage: f64,
    /// Minimum merged breadth of coverage in read mode
    pub min_breadth: f64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            min_identity: DEFAULT_MIN_IDENTITY,
            min_coverage: DEFAULT_MIN_COVERAGE,
            min_breadth: DEFAULT_MIN_BREADTH,
        }
    }
}

/// Collect gene hits from alignment records using the strategy for `mode`
#[must_use]
pub fn collect_hits(
    records: &[AlignmentRecord],
    mode: DetectionMode,
    config: &EvidenceConfig,
) -> Vec<GeneHit> {
    match mode {
        DetectionMode::Assembly => filter::filter_records(records, config),
        DetectionMode::Reads => coverage::aggregate_coverage(records, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::paf::parse_paf_text;

    #[test]
    fn test_collect_hits_dispatches_on_mode() {
        // Read of 150bp covering all of a 100bp gene
        let paf = "read1\t150\t0\t100\t+\tmecA__X|II\t100\t0\t100\t50\t100\t60\n";
        let records = parse_paf_text(paf).unwrap();
        let config = EvidenceConfig::default();

        // Assembly mode: identity 0.5 and query coverage 0.67 both fail
        assert!(collect_hits(&records, DetectionMode::Assembly, &config).is_empty());

        // Reads mode: breadth is 1.0, identity is ignored
        let hits = collect_hits(&records, DetectionMode::Reads, &config);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gene, "mecA");
    }
}
