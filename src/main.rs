use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod evidence;
mod parsing;
mod rules;
mod typing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("sccmec_typer=debug,info")
    } else {
        EnvFilter::new("sccmec_typer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Rules(args) => {
            cli::rules::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
