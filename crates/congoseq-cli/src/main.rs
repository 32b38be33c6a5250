use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.command {
        Command::Rename(args) => {
            let output = congoseq_pipeline::rename_file(&args.input)?;
            println!("{}", output.display());
        }
        Command::Retrieve(args) => {
            let paths = congoseq_pipeline::retrieve_seq(&args.input, args.seq_id)?;
            for path in paths {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}

/// RUST_LOG wins when set; otherwise the -v/-q flags pick the level.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.verbosity.tracing_level_filter().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
