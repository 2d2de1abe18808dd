use serde::{Deserialize, Serialize};

use crate::core::types::Strand;

/// SCC-type tag used when a marker header carries no `|`-delimited tag
pub const UNKNOWN_SCC_TYPE: &str = "Unknown";

/// Metadata parsed from a marker-database sequence name.
///
/// Marker headers look like `mecA__AB033763|SCCmec_II` or, in older
/// databases, `mecA AB033763|SCCmec_II`. The tokenizer tries, in order:
///
/// 1. split on the first `__` (gene symbol, metadata)
/// 2. otherwise split on the first space
/// 3. otherwise the whole name is the symbol and the metadata is empty
///
/// The metadata is then split on the first `|` into accession and SCC-type
/// tag; without a `|` the whole metadata is the accession and the tag is
/// [`UNKNOWN_SCC_TYPE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneHeader {
    pub symbol: String,
    pub accession: String,
    pub scc_type: String,
}

impl GeneHeader {
    #[must_use]
    pub fn parse(name: &str) -> Self {
        let (symbol, meta) = name
            .split_once("__")
            .or_else(|| name.split_once(' '))
            .unwrap_or((name, ""));

        let (accession, scc_type) = meta.split_once('|').unwrap_or((meta, UNKNOWN_SCC_TYPE));

        Self {
            symbol: symbol.to_string(),
            accession: accession.to_string(),
            scc_type: scc_type.to_string(),
        }
    }
}

/// Evidence that one marker gene is present in the sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneHit {
    /// Gene symbol (e.g. `mecA`, `ccrA2`)
    pub gene: String,

    /// Source accession from the marker header
    pub accession: String,

    /// SCC-type tag from the marker header
    pub scc_type: String,

    /// Alignment identity in [0, 1]; 0 for aggregated read evidence
    pub identity: f64,

    /// Gene coverage (direct mode) or breadth (read mode) in [0, 1]
    pub coverage: f64,

    /// Contig the gene was found on, or a placeholder for read evidence
    pub contig: String,

    pub start: u64,
    pub end: u64,
    pub strand: Strand,

    /// Length of the marker reference sequence
    pub reference_len: u64,

    /// Number of marker bases covered
    pub aligned_len: u64,
}

/// Symbol prefix shared by all cassette chromosome recombinase genes
pub const CCR_PREFIX: &str = "ccr";

#[must_use]
pub fn is_ccr_symbol(symbol: &str) -> bool {
    symbol.starts_with(CCR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_double_underscore_with_tag() {
        let header = GeneHeader::parse("mecA__AB033763|SCCmec_II");
        assert_eq!(header.symbol, "mecA");
        assert_eq!(header.accession, "AB033763");
        assert_eq!(header.scc_type, "SCCmec_II");
    }

    #[test]
    fn test_parse_space_fallback() {
        let header = GeneHeader::parse("ccrA2 AB033763|SCCmec_II");
        assert_eq!(header.symbol, "ccrA2");
        assert_eq!(header.accession, "AB033763");
        assert_eq!(header.scc_type, "SCCmec_II");
    }

    #[test]
    fn test_double_underscore_wins_over_space() {
        let header = GeneHeader::parse("mecR1__X 1|IV");
        assert_eq!(header.symbol, "mecR1");
        assert_eq!(header.accession, "X 1");
        assert_eq!(header.scc_type, "IV");
    }

    #[test]
    fn test_parse_without_tag() {
        let header = GeneHeader::parse("IS1272__AF181950");
        assert_eq!(header.symbol, "IS1272");
        assert_eq!(header.accession, "AF181950");
        assert_eq!(header.scc_type, UNKNOWN_SCC_TYPE);
    }

    #[test]
    fn test_parse_bare_symbol() {
        let header = GeneHeader::parse("mecI");
        assert_eq!(header.symbol, "mecI");
        assert_eq!(header.accession, "");
        assert_eq!(header.scc_type, UNKNOWN_SCC_TYPE);
    }

    #[test]
    fn test_tag_keeps_later_pipes() {
        let header = GeneHeader::parse("ccrC1__AB121219|SCCmec_V|5C2");
        assert_eq!(header.accession, "AB121219");
        assert_eq!(header.scc_type, "SCCmec_V|5C2");
    }

    #[test]
    fn test_is_ccr_symbol() {
        assert!(is_ccr_symbol("ccrA1"));
        assert!(is_ccr_symbol("ccrC"));
        assert!(!is_ccr_symbol("mecA"));
        assert!(!is_ccr_symbol("CcrA1"));
    }
}
