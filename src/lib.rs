//! # sccmec-typer
//!
//! A library for inferring the SCCmec cassette type of a *Staphylococcus*
//! sample from alignments against a marker-gene database.
//!
//! The staphylococcal cassette chromosome *mec* (SCCmec) carries the mecA or
//! mecC methicillin-resistance gene. Its type is defined by two gene clusters:
//! the **mec complex** (mec gene plus regulators or insertion sequences) and the
//! **ccr complex** (cassette chromosome recombinases). `sccmec-typer` reads the
//! alignments an external aligner produced, decides which marker genes are
//! present, and maps that gene set to a type through an ordered rule table.
//!
//! ## Features
//!
//! - **Assembly mode**: marker genes aligned onto contigs, filtered by identity
//!   and coverage
//! - **Reads mode**: reads aligned onto marker genes, merged into breadth of
//!   coverage per gene
//! - **Declarative rules**: mec, ccr and SCCmec-type rules evaluated in
//!   declaration order; swap in your own table without recompiling
//! - **Partial calls**: orphan ccr elements, mec complexes without ccr genes
//!   and composite cassettes are reported with explanatory warnings
//!
//! ## Example
//!
//! ```rust,no_run
//! use sccmec_typer::{EvidenceConfig, GenotypeReport, RuleSet, TypingEngine};
//! use sccmec_typer::core::types::DetectionMode;
//! use sccmec_typer::evidence::collect_hits;
//! use sccmec_typer::parsing::paf::parse_paf_text;
//!
//! let paf = "mecA__AB033763|SCCmec_II\t2007\t0\t2007\t+\tcontig_1\t50000\t1200\t3207\t2007\t2007\t60\n";
//! let records = parse_paf_text(paf).unwrap();
//! let hits = collect_hits(&records, DetectionMode::Assembly, &EvidenceConfig::default());
//!
//! let rules = RuleSet::load_embedded().unwrap();
//! let result = TypingEngine::new(&rules).classify(&hits);
//! let report = GenotypeReport::assemble("sample", DetectionMode::Assembly, &result);
//!
//! println!("{}: {:?}", report.status, report.sccmec_type);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment records, gene hits and shared enums
//! - [`parsing`]: PAF reader
//! - [`evidence`]: Identity/coverage filter and breadth-of-coverage aggregator
//! - [`rules`]: Rule table loading and the rule matcher
//! - [`typing`]: Classification engine, result and report
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod evidence;
pub mod parsing;
pub mod rules;
pub mod typing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::hit::{GeneHeader, GeneHit};
pub use crate::core::record::AlignmentRecord;
pub use crate::core::types::*;
pub use crate::evidence::EvidenceConfig;
pub use crate::rules::store::{RuleSet, RuleSource, RulesError};
pub use crate::typing::engine::{classify_with_source, TypingEngine};
pub use crate::typing::report::GenotypeReport;
pub use crate::typing::result::ClassificationResult;
