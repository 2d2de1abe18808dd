use serde::{Deserialize, Serialize};

use crate::core::hit::GeneHit;
use crate::core::types::{DetectionMode, Strand, TypingStatus};
use crate::typing::result::ClassificationResult;

/// Genes whose presence marks a sample as carrying a mec gene
pub const MEC_GENES: [&str; 2] = ["mecA", "mecC"];

/// Compact view of one gene hit for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitSummary {
    pub gene: String,
    pub accession: String,
    pub scc_type: String,
    pub contig: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    /// Identity as a percentage (0 for read-mode evidence)
    pub identity_pct: f64,
    /// Coverage or breadth as a percentage
    pub coverage_pct: f64,
    pub reference_len: u64,
    pub aligned_len: u64,
}

impl From<&GeneHit> for HitSummary {
    fn from(hit: &GeneHit) -> Self {
        Self {
            gene: hit.gene.clone(),
            accession: hit.accession.clone(),
            scc_type: hit.scc_type.clone(),
            contig: hit.contig.clone(),
            start: hit.start,
            end: hit.end,
            strand: hit.strand,
            identity_pct: hit.identity * 100.0,
            coverage_pct: hit.coverage * 100.0,
            reference_len: hit.reference_len,
            aligned_len: hit.aligned_len,
        }
    }
}

/// The externally consumed genotype record for one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenotypeReport {
    pub sample: String,
    pub mode: DetectionMode,
    pub status: TypingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sccmec_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mec_complex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccr_complex: Option<String>,

    /// Whether mecA or mecC was detected
    pub mec_gene_present: bool,

    pub genes_detected: Vec<String>,
    pub warnings: Vec<String>,
    pub hits_summary: Vec<HitSummary>,
}

impl GenotypeReport {
    /// Package a classification result for output
    #[must_use]
    pub fn assemble(
        sample: impl Into<String>,
        mode: DetectionMode,
        result: &ClassificationResult,
    ) -> Self {
        Self {
            sample: sample.into(),
            mode,
            status: result.status,
            reason: result.reason.clone(),
            sccmec_type: result.sccmec_type.clone(),
            mec_complex: result.mec_complex.clone(),
            ccr_complex: result.ccr_complex.clone(),
            mec_gene_present: MEC_GENES.iter().any(|g| result.has_gene(g)),
            genes_detected: result.genes_detected.clone(),
            warnings: result.warnings.clone(),
            hits_summary: result.hits.iter().map(HitSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::store::RuleSet;
    use crate::typing::engine::TypingEngine;

    fn hit(gene: &str) -> GeneHit {
        GeneHit {
            gene: gene.to_string(),
            accession: "AB033763".to_string(),
            scc_type: "SCCmec_II".to_string(),
            identity: 0.995,
            coverage: 0.9,
            contig: "contig_1".to_string(),
            start: 10,
            end: 2017,
            strand: Strand::Forward,
            reference_len: 2007,
            aligned_len: 1806,
        }
    }

    #[test]
    fn test_assemble_positive() {
        let rules = RuleSet::load_embedded().unwrap();
        let hits: Vec<GeneHit> = ["mecC", "mecR1", "mecI", "ccrA2"].iter().map(|g| hit(g)).collect();
        let result = TypingEngine::new(&rules).classify(&hits);

        let report = GenotypeReport::assemble("S1", DetectionMode::Assembly, &result);
        assert_eq!(report.sample, "S1");
        assert_eq!(report.status, TypingStatus::Positive);
        assert!(report.mec_gene_present);
        assert_eq!(report.sccmec_type.as_deref(), Some("Type II"));
        assert_eq!(report.hits_summary.len(), 4);
        assert!((report.hits_summary[0].identity_pct - 99.5).abs() < 1e-9);
        assert!((report.hits_summary[0].coverage_pct - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_assemble_orphan_has_no_mec_gene() {
        let rules = RuleSet::load_embedded().unwrap();
        let result = TypingEngine::new(&rules).classify(&[hit("ccrA1")]);

        let report = GenotypeReport::assemble("S2", DetectionMode::Reads, &result);
        assert!(!report.mec_gene_present);
        assert_eq!(report.status, TypingStatus::PartialOrphanCcr);
    }

    #[test]
    fn test_assemble_error() {
        let result = ClassificationResult::error("Failed to load classification rules: boom");
        let report = GenotypeReport::assemble("S3", DetectionMode::Assembly, &result);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "Error");
        assert_eq!(json["mode"], "assembly");
        assert!(json.get("sccmec_type").is_none());
        assert_eq!(json["mec_gene_present"], false);
    }
}
