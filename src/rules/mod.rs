//! Classification rule table.
//!
//! Typing decisions are driven by three ordered rule lists rather than
//! hard-coded conditionals:
//!
//! - **mec_complex**: `required` genes (all present) plus optional `any_of`
//!   genes (at least one present)
//! - **ccr_complex**: a substring `pattern` matched against ccr gene symbols
//! - **sccmec_types**: a mec complex paired with a ccr type, or `"ANY"`
//!
//! Within each list, the first matching rule wins. A default table is
//! embedded in the binary; custom tables use the same JSON layout:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "mec_complex": [
//!     { "name": "Class A", "required": ["mecR1", "mecI"], "any_of": ["mecA", "mecC"] }
//!   ],
//!   "ccr_complex": [ { "name": "Type 2", "pattern": "2" } ],
//!   "sccmec_types": [ { "name": "Type II", "mec_complex": "Class A", "ccr": "Type 2" } ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use sccmec_typer::RuleSet;
//! use std::path::Path;
//!
//! let rules = RuleSet::load_embedded().unwrap();
//! let custom = RuleSet::load_from_file(Path::new("my_rules.json")).unwrap();
//! ```

pub mod matcher;
pub mod store;
