use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::types::{DetectionMode, TypingStatus};
use crate::evidence::{
    collect_hits, EvidenceConfig, DEFAULT_MIN_BREADTH, DEFAULT_MIN_COVERAGE, DEFAULT_MIN_IDENTITY,
};
use crate::parsing::paf::parse_paf_file;
use crate::rules::store::RuleSource;
use crate::typing::engine::classify_with_source;
use crate::typing::report::GenotypeReport;
use crate::utils::validation::{is_stdin_path, parse_fraction};

/// Placeholder shown for complexes and types that were not resolved
const UNRESOLVED: &str = "Unknown";

/// Columns of the one-row TSV summary
pub const TSV_HEADER: &str =
    "Sample\tStatus\tSCCmec_Type\tMec_Complex\tCcr_Complex\tGenes_Detected\tWarnings";

#[derive(Args)]
pub struct ClassifyArgs {
    /// PAF alignment file (plain or .gz); use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// How the alignments were produced
    #[arg(short, long, value_enum, default_value = "assembly")]
    pub mode: DetectionMode,

    /// Path to a custom rules file (defaults to the embedded rules)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Sample name for reports (defaults to the input file stem)
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Minimum alignment identity, assembly mode (0-1)
    #[arg(long, default_value_t = DEFAULT_MIN_IDENTITY, value_parser = parse_fraction)]
    pub min_identity: f64,

    /// Minimum gene coverage, assembly mode (0-1)
    #[arg(long, default_value_t = DEFAULT_MIN_COVERAGE, value_parser = parse_fraction)]
    pub min_coverage: f64,

    /// Minimum breadth of coverage, reads mode (0-1)
    #[arg(long, default_value_t = DEFAULT_MIN_BREADTH, value_parser = parse_fraction)]
    pub min_breadth: f64,

    /// Also write <PREFIX>.json and <PREFIX>.tsv
    #[arg(short, long, value_name = "PREFIX")]
    pub output: Option<PathBuf>,
}

/// Execute classify subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read, an output file cannot be
/// written, or classification ends with status `Error`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ClassifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = EvidenceConfig {
        min_identity: args.min_identity,
        min_coverage: args.min_coverage,
        min_breadth: args.min_breadth,
    };

    let records = parse_paf_file(&args.input)?;
    let hits = collect_hits(&records, args.mode, &config);

    if verbose {
        eprintln!(
            "Parsed {} alignments, {} gene hits ({} mode)",
            records.len(),
            hits.len(),
            args.mode
        );
    }

    let source = args
        .rules
        .clone()
        .map_or(RuleSource::Embedded, RuleSource::File);
    let result = classify_with_source(&hits, &source);

    let sample = args
        .sample
        .clone()
        .unwrap_or_else(|| sample_name(&args.input));
    let report = GenotypeReport::assemble(sample, args.mode, &result);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => write_text(&mut out, &report, verbose)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
        OutputFormat::Tsv => write_tsv(&mut out, &report)?,
    }
    out.flush()?;

    if let Some(prefix) = &args.output {
        write_output_files(prefix, &report)?;
    }

    if report.status == TypingStatus::Error {
        anyhow::bail!(
            "{}",
            report.reason.as_deref().unwrap_or("Classification failed")
        );
    }

    Ok(())
}

/// Derive a sample name from the input path, dropping `.gz` and `.paf`
#[must_use]
pub fn sample_name(path: &Path) -> String {
    if is_stdin_path(path) {
        return "stdin".to_string();
    }

    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    for ext in [".gz", ".paf"] {
        if let Some(stripped) = name.strip_suffix(ext) {
            name = stripped.to_string();
        }
    }
    name
}

fn write_output_files(prefix: &Path, report: &GenotypeReport) -> anyhow::Result<()> {
    let json_path = with_suffix(prefix, "json");
    let mut json_out = BufWriter::new(File::create(&json_path)?);
    write_json(&mut json_out, report)?;
    json_out.flush()?;
    info!("JSON results written to {}", json_path.display());

    let tsv_path = with_suffix(prefix, "tsv");
    let mut tsv_out = BufWriter::new(File::create(&tsv_path)?);
    write_tsv(&mut tsv_out, report)?;
    tsv_out.flush()?;
    info!("TSV summary written to {}", tsv_path.display());

    Ok(())
}

fn with_suffix(prefix: &Path, ext: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    PathBuf::from(path)
}

/// Write a human-readable report
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_text<W: Write>(out: &mut W, report: &GenotypeReport, verbose: bool) -> io::Result<()> {
    writeln!(out, "\n{} ({})", report.sample, report.status)?;

    if let Some(reason) = &report.reason {
        writeln!(out, "   Reason: {reason}")?;
    }
    if let Some(sccmec_type) = &report.sccmec_type {
        writeln!(out, "   SCCmec type: {sccmec_type}")?;
    }
    if let Some(mec) = &report.mec_complex {
        writeln!(out, "   mec complex: {mec}")?;
    }
    if let Some(ccr) = &report.ccr_complex {
        writeln!(out, "   ccr complex: {ccr}")?;
    }
    writeln!(
        out,
        "   mecA/mecC: {}",
        if report.mec_gene_present {
            "present"
        } else {
            "absent"
        }
    )?;

    if report.genes_detected.is_empty() {
        writeln!(out, "   Genes detected: none")?;
    } else {
        writeln!(
            out,
            "   Genes detected: {}",
            report.genes_detected.join(", ")
        )?;
    }

    if !report.warnings.is_empty() {
        writeln!(out, "\n   Warnings:")?;
        for warning in &report.warnings {
            writeln!(out, "   - {warning}")?;
        }
    }

    if verbose && !report.hits_summary.is_empty() {
        writeln!(out, "\n   Hits:")?;
        for hit in &report.hits_summary {
            writeln!(
                out,
                "   - {} [{}] {}:{}-{} ({}) identity {:.1}%, coverage {:.1}%",
                hit.gene,
                hit.accession,
                hit.contig,
                hit.start,
                hit.end,
                hit.strand,
                hit.identity_pct,
                hit.coverage_pct,
            )?;
        }
    }

    writeln!(out)
}

/// Write the full report as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(out: &mut W, report: &GenotypeReport) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Write the one-row TSV summary with header
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_tsv<W: Write>(out: &mut W, report: &GenotypeReport) -> io::Result<()> {
    writeln!(out, "{TSV_HEADER}")?;
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
        report.sample,
        report.status,
        report.sccmec_type.as_deref().unwrap_or(UNRESOLVED),
        report.mec_complex.as_deref().unwrap_or(UNRESOLVED),
        report.ccr_complex.as_deref().unwrap_or(UNRESOLVED),
        report.genes_detected.join(","),
        report.warnings.join("; "),
    )
}
