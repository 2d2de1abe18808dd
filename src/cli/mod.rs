//! Command-line interface for sccmec-typer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **classify**: Type a sample from minimap2 PAF output
//! - **rules**: List or export the classification rule table
//!
//! ## Usage
//!
//! ```text
//! # Marker genes aligned onto an assembly
//! minimap2 -cx asm5 assembly.fasta sccmec_markers.mfa > sample.paf
//! sccmec-typer classify sample.paf
//!
//! # Long reads aligned onto the marker genes
//! minimap2 -cx map-ont sccmec_markers.mfa reads.fastq > reads.paf
//! sccmec-typer classify reads.paf --mode reads
//!
//! # JSON output, plus <prefix>.json and <prefix>.tsv files
//! sccmec-typer --format json classify sample.paf --output results/sample
//!
//! # Export the default rules for editing
//! sccmec-typer rules export my_rules.json
//! ```

use clap::{Parser, Subcommand};

pub mod classify;
pub mod rules;

#[derive(Parser)]
#[command(name = "sccmec-typer")]
#[command(version)]
#[command(about = "Infer SCCmec cassette types from marker-gene alignments")]
#[command(
    long_about = "sccmec-typer assigns a mec complex, a ccr complex and an SCCmec type to a sample from PAF alignments against a marker-gene database.\n\nIt accepts either:\n- Marker genes aligned onto an assembly (identity and coverage filtering)\n- Reads aligned onto the marker genes (breadth-of-coverage aggregation)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a sample from PAF alignments
    Classify(classify::ClassifyArgs),

    /// Inspect the classification rule table
    Rules(rules::RulesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
