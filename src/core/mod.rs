//! Core data types for SCCmec typing.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`AlignmentRecord`](record::AlignmentRecord): One raw PAF line from the aligner
//! - [`GeneHit`](hit::GeneHit): Accepted evidence that a marker gene is present
//! - [`GeneHeader`](hit::GeneHeader): Tokenizer for marker-database sequence names
//! - [`DetectionMode`](types::DetectionMode), [`Strand`](types::Strand),
//!   [`TypingStatus`](types::TypingStatus): Shared enums
//!
//! ## Query and target roles
//!
//! | Mode     | Query          | Target         |
//! |----------|----------------|----------------|
//! | assembly | marker gene    | assembly contig|
//! | reads    | sequencing read| marker gene    |
//!
//! Gene metadata is always parsed from whichever side holds the marker.

pub mod hit;
pub mod record;
pub mod types;
