pub mod rename;
pub mod retrieve;

use std::path::PathBuf;

use thiserror::Error;

pub use rename::{rename_file, rename_records};
pub use retrieve::{find_matches, retrieve_seq, StageWriters};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("sequence ID {seq_id} not found in {}", .file.display())]
    SeqIdNotFound { seq_id: u64, file: PathBuf },
    #[error(transparent)]
    Parse(#[from] congoseq_formats::ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
