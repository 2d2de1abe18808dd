//! SCCmec typing engine.
//!
//! - [`TypingEngine`](engine::TypingEngine): rule-driven classifier
//! - [`ClassificationResult`](result::ClassificationResult): status, complexes,
//!   type and warnings for one sample
//! - [`GenotypeReport`](report::GenotypeReport): the assembled output record
//!
//! ## Decision procedure
//!
//! 1. Collect unique gene symbols; warn when hits span several contigs
//! 2. mec complex: first `mec_complex` rule satisfied by the gene set
//! 3. ccr complex: every `ccr_complex` rule matched by any `ccr*` gene
//! 4. Status: Negative, Partial (Orphan ccr), Partial (Unclassifiable) or Positive
//! 5. SCCmec type: first `sccmec_types` rule for the (mec, ccr) pair
//! 6. Composite: several ccr types turn `T` into `Composite(T)`
//!
//! ## Example
//!
//! ```rust,no_run
//! use sccmec_typer::{EvidenceConfig, RuleSet, TypingEngine};
//! use sccmec_typer::core::types::DetectionMode;
//! use sccmec_typer::evidence::collect_hits;
//! use sccmec_typer::parsing::paf::parse_paf_file;
//! use std::path::Path;
//!
//! let records = parse_paf_file(Path::new("sample.paf")).unwrap();
//! let hits = collect_hits(&records, DetectionMode::Assembly, &EvidenceConfig::default());
//!
//! let rules = RuleSet::load_embedded().unwrap();
//! let result = TypingEngine::new(&rules).classify(&hits);
//! println!("{} {:?}", result.status, result.sccmec_type);
//! ```

pub mod engine;
pub mod report;
pub mod result;
