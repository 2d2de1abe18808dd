use tracing::{debug, info};

use crate::core::hit::{GeneHeader, GeneHit};
use crate::core::record::AlignmentRecord;
use crate::evidence::EvidenceConfig;

/// Keep alignments of marker genes (query) onto an assembly (target) that
/// pass both the identity and the coverage threshold.
#[must_use]
pub fn filter_records(records: &[AlignmentRecord], config: &EvidenceConfig) -> Vec<GeneHit> {
    let hits: Vec<GeneHit> = records
        .iter()
        .filter_map(|record| filter_record(record, config))
        .collect();

    info!(
        "Accepted {} of {} alignments (identity >= {}, coverage >= {})",
        hits.len(),
        records.len(),
        config.min_identity,
        config.min_coverage
    );

    hits
}

/// Convert a single alignment into a gene hit if it passes the thresholds
#[must_use]
pub fn filter_record(record: &AlignmentRecord, config: &EvidenceConfig) -> Option<GeneHit> {
    let identity = record.identity();
    let coverage = record.query_coverage();

    if identity < config.min_identity || coverage < config.min_coverage {
        debug!(
            "Rejected {} on {}: identity {:.3}, coverage {:.3}",
            record.query_name, record.target_name, identity, coverage
        );
        return None;
    }

    let header = GeneHeader::parse(&record.query_name);

    Some(GeneHit {
        gene: header.symbol,
        accession: header.accession,
        scc_type: header.scc_type,
        identity: identity.min(1.0),
        coverage: coverage.min(1.0),
        contig: record.target_name.clone(),
        start: record.target_start,
        end: record.target_end,
        strand: record.strand,
        reference_len: record.query_len,
        aligned_len: record.query_aligned_len(),
    })
}
