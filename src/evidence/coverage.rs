//! Breadth of coverage for read-mode evidence.
//!
//! When reads are aligned onto the marker genes, no single alignment spans a
//! whole gene. Instead all aligned target intervals for a gene are unioned and
//! the gene is accepted when the union covers enough of its length. Identity
//! is not used here: with accumulated read depth, per-read identity says little
//! about whether the gene is present.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::core::hit::{GeneHeader, GeneHit};
use crate::core::record::{ratio, AlignmentRecord};
use crate::core::types::Strand;
use crate::evidence::EvidenceConfig;

/// Contig placeholder for hits assembled from read alignments
pub const READS_CONTIG: &str = "Reads";

/// Half-open `[start, end)` interval on a gene reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GeneInterval {
    pub start: u64,
    pub end: u64,
}

impl GeneInterval {
    #[must_use]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Union a set of intervals.
///
/// Intervals are sorted by start and swept left to right; the next interval is
/// folded into the current one when it starts before the current one ends.
/// Intervals that merely touch stay separate, which does not change the
/// covered length.
#[must_use]
pub fn merge_intervals(mut intervals: Vec<GeneInterval>) -> Vec<GeneInterval> {
    intervals.retain(|iv| !iv.is_empty());
    intervals.sort_unstable();

    let mut merged: Vec<GeneInterval> = Vec::with_capacity(intervals.len());
    for next in intervals {
        match merged.last_mut() {
            Some(current) if next.start < current.end => {
                current.end = current.end.max(next.end);
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// Total length covered by the union of `intervals`
#[must_use]
pub fn covered_length(intervals: Vec<GeneInterval>) -> u64 {
    merge_intervals(intervals).iter().map(GeneInterval::len).sum()
}

/// Per-gene accumulation of aligned intervals
#[derive(Debug, Default)]
struct GeneCoverage {
    reference_len: u64,
    intervals: Vec<GeneInterval>,
}

impl GeneCoverage {
    fn add(&mut self, record: &AlignmentRecord) {
        self.reference_len = record.target_len;
        // Keep intervals inside the reference so breadth stays within [0, 1]
        let end = record.target_end.min(record.target_len);
        let start = record.target_start.min(end);
        self.intervals.push(GeneInterval::new(start, end));
    }
}

/// Aggregate read alignments (query = read, target = gene) into one synthetic
/// hit per gene whose breadth of coverage meets `config.min_breadth`.
#[must_use]
pub fn aggregate_coverage(records: &[AlignmentRecord], config: &EvidenceConfig) -> Vec<GeneHit> {
    let mut genes: BTreeMap<&str, GeneCoverage> = BTreeMap::new();
    for record in records {
        genes
            .entry(record.target_name.as_str())
            .or_default()
            .add(record);
    }

    let total_genes = genes.len();
    let hits: Vec<GeneHit> = genes
        .into_iter()
        .filter_map(|(name, coverage)| gene_hit(name, coverage, config.min_breadth))
        .collect();

    info!(
        "{} of {total_genes} genes reached breadth >= {} from {} read alignments",
        hits.len(),
        config.min_breadth,
        records.len()
    );

    hits
}

fn gene_hit(name: &str, coverage: GeneCoverage, min_breadth: f64) -> Option<GeneHit> {
    let reference_len = coverage.reference_len;
    let covered = covered_length(coverage.intervals);
    let breadth = if reference_len > 0 {
        ratio(covered, reference_len)
    } else {
        0.0
    };

    if breadth < min_breadth {
        debug!("Rejected {name}: breadth {breadth:.3} ({covered}/{reference_len} bp)");
        return None;
    }

    let header = GeneHeader::parse(name);
    Some(GeneHit {
        gene: header.symbol,
        accession: header.accession,
        scc_type: header.scc_type,
        identity: 0.0,
        coverage: breadth,
        contig: READS_CONTIG.to_string(),
        start: 0,
        end: reference_len,
        strand: Strand::Unknown,
        reference_len,
        aligned_len: covered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u64, end: u64) -> GeneInterval {
        GeneInterval::new(start, end)
    }

    fn read(gene: &str, gene_len: u64, start: u64, end: u64) -> AlignmentRecord {
        AlignmentRecord {
            query_name: "read".to_string(),
            query_len: 150,
            query_start: 0,
            query_end: end - start,
            strand: Strand::Forward,
            target_name: gene.to_string(),
            target_len: gene_len,
            target_start: start,
            target_end: end,
            matches: 1,
            block_len: end - start,
        }
    }

    #[test]
    fn test_merge_overlapping() {
        let merged = merge_intervals(vec![iv(50, 120), iv(0, 60), iv(200, 250), iv(100, 150)]);
        assert_eq!(merged, vec![iv(0, 150), iv(200, 250)]);
    }

    #[test]
    fn test_merge_contained() {
        assert_eq!(merge_intervals(vec![iv(0, 100), iv(10, 20)]), vec![iv(0, 100)]);
    }

    #[test]
    fn test_adjacent_intervals_not_merged() {
        assert_eq!(
            merge_intervals(vec![iv(10, 20), iv(0, 10)]),
            vec![iv(0, 10), iv(10, 20)]
        );
    }

    #[test]
    fn test_merge_is_idempotent() {
        let once = merge_intervals(vec![iv(5, 30), iv(0, 10), iv(40, 45), iv(44, 60), iv(60, 70)]);
        let twice = merge_intervals(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_covered_length_invariant_under_reordering_and_splitting() {
        let base = covered_length(vec![iv(0, 100), iv(150, 200)]);
        let reordered = covered_length(vec![iv(150, 200), iv(0, 100)]);
        let split = covered_length(vec![iv(50, 100), iv(150, 175), iv(0, 50), iv(175, 200)]);

        assert_eq!(base, 150);
        assert_eq!(reordered, base);
        assert_eq!(split, base);
    }

    #[test]
    fn test_empty_intervals_ignored() {
        assert!(merge_intervals(vec![iv(5, 5)]).is_empty());
        assert_eq!(covered_length(Vec::new()), 0);
    }

    #[test]
    fn test_aggregate_accepts_gene_at_breadth_threshold() {
        let records = vec![
            read("mecA__AB033763|SCCmec_II", 100, 0, 50),
            read("mecA__AB033763|SCCmec_II", 100, 40, 90),
        ];
        let hits = aggregate_coverage(&records, &EvidenceConfig::default());

        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.gene, "mecA");
        assert_eq!(hit.accession, "AB033763");
        assert_eq!(hit.contig, READS_CONTIG);
        assert_eq!(hit.identity, 0.0);
        assert!((hit.coverage - 0.9).abs() < 1e-12);
        assert_eq!(hit.aligned_len, 90);
        assert_eq!(hit.end, 100);
        assert_eq!(hit.strand, Strand::Unknown);
    }

    #[test]
    fn test_aggregate_rejects_low_breadth() {
        let records = vec![read("ccrA2", 1000, 0, 500), read("ccrA2", 1000, 100, 600)];
        assert!(aggregate_coverage(&records, &EvidenceConfig::default()).is_empty());
    }

    #[test]
    fn test_aggregate_multiple_genes_sorted_by_name() {
        let records = vec![
            read("mecR1", 100, 0, 100),
            read("ccrB2", 100, 0, 95),
            read("mecI", 100, 0, 10),
        ];
        let hits = aggregate_coverage(&records, &EvidenceConfig::default());
        let genes: Vec<&str> = hits.iter().map(|h| h.gene.as_str()).collect();
        assert_eq!(genes, vec!["ccrB2", "mecR1"]);
    }

    #[test]
    fn test_intervals_clamped_to_reference() {
        let records = vec![read("mecA", 100, 0, 100), read("mecA", 100, 50, 140)];
        let hits = aggregate_coverage(&records, &EvidenceConfig::default());
        assert!((hits[0].coverage - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_length_reference_has_zero_breadth() {
        let records = vec![read("mecA", 0, 0, 0)];
        let config = EvidenceConfig {
            min_breadth: 0.0,
            ..EvidenceConfig::default()
        };
        // breadth is reported as 0, which still meets a zero threshold
        assert_eq!(aggregate_coverage(&records, &config).len(), 1);
        assert!(aggregate_coverage(&records, &EvidenceConfig::default()).is_empty());
    }
}
