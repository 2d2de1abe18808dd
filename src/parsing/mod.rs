//! Parsers for aligner output.
//!
//! The classification core consumes alignment records in PAF (Pairwise mApping
//! Format), as written by minimap2:
//!
//! | Col | Field | Used |
//! |-----|-------|------|
//! | 1   | Query name | gene symbol and metadata (assembly mode) |
//! | 2-4 | Query length, start, end | coverage |
//! | 5   | Strand | hit orientation |
//! | 6   | Target name | contig (assembly mode) or gene (reads mode) |
//! | 7-9 | Target length, start, end | breadth (reads mode) |
//! | 10  | Matching bases | identity |
//! | 11  | Alignment block length | identity |
//! | 12  | Mapping quality | ignored |
//!
//! ## Example
//!
//! ```rust,no_run
//! use sccmec_typer::parsing::paf::parse_paf_file;
//! use std::path::Path;
//!
//! let records = parse_paf_file(Path::new("sample.paf")).unwrap();
//! println!("{} alignments", records.len());
//! ```

pub mod paf;
