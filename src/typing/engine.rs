use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::core::hit::{is_ccr_symbol, GeneHit};
use crate::core::types::TypingStatus;
use crate::rules::matcher::{all_matches, first_match, ComplexPair, GeneSet, Rule};
use crate::rules::store::{RuleSet, RuleSource};
use crate::typing::result::{ClassificationResult, NEGATIVE, UNKNOWN_TYPE};

/// SCCmec type whose definition accepts any number of ccr complexes.
///
/// Several ccr allotypes side by side are what this type looks like, so it
/// is never rewritten to `Composite(...)`.
pub const CCR_VARIABLE_TYPE: &str = "Type V (ccr variable)";

/// Prefix for types with more than one ccr complex
pub const COMPOSITE: &str = "Composite";

/// Separator between ccr type names in a combined ccr label
pub const CCR_SEPARATOR: &str = "/";

/// Classifies a sample's gene hits against a rule table
pub struct TypingEngine<'a> {
    rules: &'a RuleSet,
}

impl<'a> TypingEngine<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Resolve mec complex, ccr complex and SCCmec type for one sample
    #[must_use]
    pub fn classify(&self, hits: &[GeneHit]) -> ClassificationResult {
        let genes: GeneSet = hits.iter().map(|h| h.gene.clone()).collect();
        let mut warnings = Vec::new();

        let contigs: BTreeSet<&str> = hits.iter().map(|h| h.contig.as_str()).collect();
        if contigs.len() > 1 {
            warnings.push(format!(
                "Marker genes found on {} different contigs ({}); the cassette may be split across the assembly",
                contigs.len(),
                contigs.iter().copied().collect::<Vec<_>>().join(", ")
            ));
        }

        let mec_complex = self.resolve_mec_complex(&genes);
        let ccr_types = self.resolve_ccr_types(&genes);
        debug!(
            "Resolved mec complex {:?}, ccr types {:?}",
            mec_complex, ccr_types
        );

        let genes_detected: Vec<String> = genes.into_iter().collect();

        let Some(mec_complex) = mec_complex else {
            if ccr_types.is_empty() {
                let reason = if hits.is_empty() {
                    "No alignments found"
                } else {
                    "No mec or ccr complex genes detected"
                };
                return ClassificationResult {
                    status: TypingStatus::Negative,
                    reason: Some(reason.to_string()),
                    mec_complex: None,
                    ccr_complex: None,
                    sccmec_type: None,
                    genes_detected,
                    warnings,
                    hits: hits.to_vec(),
                };
            }

            warnings.push(
                "ccr genes detected without a mec complex (orphan SCC element)".to_string(),
            );
            let sccmec_type = composite_type(UNKNOWN_TYPE, &ccr_types, &mut warnings);
            return ClassificationResult {
                status: TypingStatus::PartialOrphanCcr,
                reason: None,
                mec_complex: Some(NEGATIVE.to_string()),
                ccr_complex: Some(ccr_label(&ccr_types)),
                sccmec_type: Some(sccmec_type),
                genes_detected,
                warnings,
                hits: hits.to_vec(),
            };
        };

        let (status, sccmec_type) = if ccr_types.is_empty() {
            self.type_without_ccr(&mec_complex, &mut warnings)
        } else {
            let resolved = self.type_with_ccr(&mec_complex, &ccr_types, &mut warnings);
            (
                TypingStatus::Positive,
                composite_type(&resolved, &ccr_types, &mut warnings),
            )
        };

        ClassificationResult {
            status,
            reason: None,
            mec_complex: Some(mec_complex),
            ccr_complex: Some(ccr_label(&ccr_types)),
            sccmec_type: Some(sccmec_type),
            genes_detected,
            warnings,
            hits: hits.to_vec(),
        }
    }

    /// First mec-complex rule satisfied by the gene set
    fn resolve_mec_complex(&self, genes: &GeneSet) -> Option<String> {
        first_match(&self.rules.mec_complex, genes).map(|rule| rule.name().to_string())
    }

    /// Every ccr type matched by any detected ccr gene
    fn resolve_ccr_types(&self, genes: &GeneSet) -> BTreeSet<String> {
        genes
            .iter()
            .filter(|g| is_ccr_symbol(g))
            .flat_map(|g| all_matches(&self.rules.ccr_complex, g.as_str()))
            .map(|rule| rule.name().to_string())
            .collect()
    }

    /// A mec complex with no ccr genes is only typable through a wildcard rule
    fn type_without_ccr(
        &self,
        mec_complex: &str,
        warnings: &mut Vec<String>,
    ) -> (TypingStatus, String) {
        if let Some(rule) = self
            .rules
            .sccmec_types
            .iter()
            .find(|rule| rule.accepts_missing_ccr(mec_complex))
        {
            debug!("{mec_complex} typed as {} without ccr genes", rule.name());
            return (TypingStatus::Positive, rule.name().to_string());
        }

        warnings.push(format!(
            "mec complex ({mec_complex}) detected but no ccr genes found"
        ));
        (TypingStatus::PartialUnclassifiable, UNKNOWN_TYPE.to_string())
    }

    fn type_with_ccr(
        &self,
        mec_complex: &str,
        ccr_types: &BTreeSet<String>,
        warnings: &mut Vec<String>,
    ) -> String {
        let pair = ComplexPair {
            mec_complex,
            ccr_types,
        };
        if let Some(rule) = first_match(&self.rules.sccmec_types, &pair) {
            return rule.name().to_string();
        }

        warnings.push(format!(
            "No SCCmec type rule for mec complex {mec_complex} with ccr complex {}",
            ccr_label(ccr_types)
        ));
        UNKNOWN_TYPE.to_string()
    }
}

/// Sorted, `/`-joined ccr type names, or `Negative` when there are none
#[must_use]
pub fn ccr_label(ccr_types: &BTreeSet<String>) -> String {
    if ccr_types.is_empty() {
        return NEGATIVE.to_string();
    }
    ccr_types
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(CCR_SEPARATOR)
}

/// Prefix the type with `Composite` when more than one ccr type was found
fn composite_type(
    sccmec_type: &str,
    ccr_types: &BTreeSet<String>,
    warnings: &mut Vec<String>,
) -> String {
    if ccr_types.len() < 2 || sccmec_type == CCR_VARIABLE_TYPE {
        return sccmec_type.to_string();
    }

    warnings.push(format!(
        "Multiple ccr complexes detected ({}); possible composite cassette",
        ccr_label(ccr_types)
    ));

    if sccmec_type == UNKNOWN_TYPE {
        COMPOSITE.to_string()
    } else {
        format!("{COMPOSITE}({sccmec_type})")
    }
}

/// Load rules from `source` and classify `hits`.
///
/// Rule loading failures never escape: they are reported as a result with
/// status `Error`.
#[must_use]
pub fn classify_with_source(hits: &[GeneHit], source: &RuleSource) -> ClassificationResult {
    match RuleSet::load(source) {
        Ok(rules) => TypingEngine::new(&rules).classify(hits),
        Err(e) => {
            warn!("Could not load classification rules from {source}: {e}");
            ClassificationResult::error(format!("Failed to load classification rules: {e}"))
        }
    }
}
