//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Parser)]
#[command(
    name = "congoseq",
    version,
    about = "Rename and retrieve T. congolense coding sequences by life-cycle stage"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -q to silence progress output).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify records by life-cycle stage and write a named_ copy with
    /// canonical headers and sequence IDs.
    Rename(RenameArgs),

    /// Copy the record(s) with a given sequence ID into a stage-named file.
    Retrieve(RetrieveArgs),
}

#[derive(Parser)]
pub struct RenameArgs {
    /// FASTA file of predicted coding sequences.
    #[arg(value_name = "FASTA")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct RetrieveArgs {
    /// Renamed FASTA file produced by `congoseq rename`.
    #[arg(value_name = "NAMED_FASTA")]
    pub input: PathBuf,

    /// Sequence ID assigned during renaming.
    #[arg(value_name = "SEQ_ID")]
    pub seq_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_retrieve_args() {
        let cli = Cli::parse_from(["congoseq", "retrieve", "named_pooled.pep", "201"]);
        match cli.command {
            Command::Retrieve(args) => {
                assert_eq!(args.input, PathBuf::from("named_pooled.pep"));
                assert_eq!(args.seq_id, 201);
            }
            _ => panic!("expected retrieve subcommand"),
        }
    }
}
