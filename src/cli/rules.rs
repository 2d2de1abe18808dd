use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::rules::store::{RuleSet, RuleSource};

#[derive(Args)]
pub struct RulesArgs {
    #[command(subcommand)]
    pub command: RulesCommands,
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// List all rules in evaluation order
    List {
        /// Path to custom rules file
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Export the rule table to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom rules file to export (defaults to embedded)
        #[arg(long)]
        rules: Option<PathBuf>,
    },
}

/// Execute rules subcommand
///
/// # Errors
///
/// Returns an error if the rules cannot be loaded or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RulesArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        RulesCommands::List { rules } => {
            let rule_set = load(rules)?;
            match format {
                OutputFormat::Text => print_text(&rule_set),
                OutputFormat::Json => println!("{}", rule_set.to_json()?),
                OutputFormat::Tsv => print_tsv(&rule_set),
            }
        }
        RulesCommands::Export { output, rules } => {
            let rule_set = load(rules)?;
            std::fs::write(&output, rule_set.to_json()?)?;
            if verbose {
                eprintln!("Exported {} rules to {}", rule_set.len(), output.display());
            }
        }
    }
    Ok(())
}

fn load(path: Option<PathBuf>) -> anyhow::Result<RuleSet> {
    let source = path.map_or(RuleSource::Embedded, RuleSource::File);
    Ok(RuleSet::load(&source)?)
}

fn print_text(rules: &RuleSet) {
    println!("mec complex rules:");
    for (i, rule) in rules.mec_complex.iter().enumerate() {
        let mut parts = Vec::new();
        if !rule.required.is_empty() {
            parts.push(format!("all of [{}]", rule.required.join(", ")));
        }
        if !rule.any_of.is_empty() {
            parts.push(format!("any of [{}]", rule.any_of.join(", ")));
        }
        println!("  {:>2}. {:<16} {}", i + 1, rule.name, parts.join(" and "));
    }

    println!("\nccr complex rules:");
    for (i, rule) in rules.ccr_complex.iter().enumerate() {
        println!("  {:>2}. {:<16} symbol contains \"{}\"", i + 1, rule.name, rule.pattern);
    }

    println!("\nSCCmec type rules:");
    for (i, rule) in rules.sccmec_types.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} {} + {}",
            i + 1,
            rule.name,
            rule.mec_complex,
            rule.ccr
        );
    }
}

fn print_tsv(rules: &RuleSet) {
    println!("section\torder\tname\tcriteria");
    for (i, rule) in rules.mec_complex.iter().enumerate() {
        println!(
            "mec_complex\t{}\t{}\trequired={};any_of={}",
            i + 1,
            rule.name,
            rule.required.join(","),
            rule.any_of.join(",")
        );
    }
    for (i, rule) in rules.ccr_complex.iter().enumerate() {
        println!("ccr_complex\t{}\t{}\tpattern={}", i + 1, rule.name, rule.pattern);
    }
    for (i, rule) in rules.sccmec_types.iter().enumerate() {
        println!(
            "sccmec_types\t{}\t{}\tmec_complex={};ccr={}",
            i + 1,
            rule.name,
            rule.mec_complex,
            rule.ccr
        );
    }
}
