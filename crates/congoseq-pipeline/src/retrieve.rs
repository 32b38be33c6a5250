use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use congoseq_core::{CanonicalRecord, LifeCycleStage};
use congoseq_formats::canonical;
use tracing::info;

use crate::PipelineError;

/// Records whose assigned sequence ID equals `seq_id`, in file order. More
/// than one match only happens when independent renaming runs were
/// concatenated into one file; all of them are returned.
pub fn find_matches(records: &[CanonicalRecord], seq_id: u64) -> Vec<&CanonicalRecord> {
    records
        .iter()
        .filter(|record| record.sequence_id == Some(seq_id))
        .collect()
}

/// Append-mode output handles keyed by stage. Each handle is opened on the
/// first record routed to its stage and flushed by `finish`.
pub struct StageWriters {
    dir: PathBuf,
    seq_id: u64,
    open: HashMap<LifeCycleStage, File>,
    order: Vec<LifeCycleStage>,
}

impl StageWriters {
    pub fn new(dir: impl Into<PathBuf>, seq_id: u64) -> Self {
        Self {
            dir: dir.into(),
            seq_id,
            open: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Path of the output stream for `stage`.
    pub fn path_for(&self, stage: LifeCycleStage) -> PathBuf {
        self.dir
            .join(format!("{}_{}.fas", stage.file_prefix(), self.seq_id))
    }

    /// Append one matched record to its stage output.
    pub fn append(&mut self, record: &CanonicalRecord) -> io::Result<()> {
        let writer = self.writer_for(record.stage)?;
        canonical::write_record(writer, record)
    }

    /// Flush every open handle and return the paths written, in the order
    /// the stages were first seen.
    pub fn finish(mut self) -> io::Result<Vec<PathBuf>> {
        let mut paths = Vec::with_capacity(self.order.len());
        for i in 0..self.order.len() {
            let stage = self.order[i];
            if let Some(file) = self.open.get_mut(&stage) {
                file.flush()?;
            }
            paths.push(self.path_for(stage));
        }
        Ok(paths)
    }

    fn writer_for(&mut self, stage: LifeCycleStage) -> io::Result<&mut File> {
        let path = self.path_for(stage);
        match self.open.entry(stage) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file = OpenOptions::new().create(true).append(true).open(&path)?;
                self.order.push(stage);
                Ok(entry.insert(file))
            }
        }
    }
}

/// Copy every record carrying `seq_id` out of a renamed file, appending each
/// to a file named for its stage and the requested ID. Returns the paths
/// written; fails when the ID is absent from the file. Repeat calls append
/// to the same outputs rather than overwriting them.
pub fn retrieve_seq(named_file: &Path, seq_id: u64) -> Result<Vec<PathBuf>, PipelineError> {
    let content = fs::read_to_string(named_file)?;
    let records = canonical::parse(&content)?;

    let matches = find_matches(&records, seq_id);
    if matches.is_empty() {
        return Err(PipelineError::SeqIdNotFound {
            seq_id,
            file: named_file.to_path_buf(),
        });
    }

    let dir = named_file.parent().map(Path::to_path_buf).unwrap_or_default();
    let mut writers = StageWriters::new(dir, seq_id);
    for record in &matches {
        writers.append(record)?;
    }
    let paths = writers.finish()?;

    info!(
        seq_id,
        matches = matches.len(),
        file = %named_file.display(),
        "retrieved records"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use congoseq_core::AnnotationFields;

    fn record(seq_id: Option<u64>, stage: LifeCycleStage) -> CanonicalRecord {
        CanonicalRecord {
            sequence_id: seq_id,
            stage,
            annotations: AnnotationFields::default(),
            sequence: "MKT".to_string(),
        }
    }

    #[test]
    fn test_find_matches_collects_all_in_order() {
        let records = vec![
            record(Some(1), LifeCycleStage::Epimastigote),
            record(Some(2), LifeCycleStage::Procyclic),
            record(Some(2), LifeCycleStage::NorMetacyclic),
            record(None, LifeCycleStage::Unclassified),
        ];
        let matches = find_matches(&records, 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].stage, LifeCycleStage::Procyclic);
        assert_eq!(matches[1].stage, LifeCycleStage::NorMetacyclic);
    }

    #[test]
    fn test_find_matches_id_is_exact() {
        let records = vec![record(Some(120), LifeCycleStage::Epimastigote)];
        assert!(find_matches(&records, 12).is_empty());
        assert_eq!(find_matches(&records, 120).len(), 1);
    }

    #[test]
    fn test_unclassified_records_never_match() {
        let records = vec![record(None, LifeCycleStage::Unclassified)];
        assert!(find_matches(&records, 0).is_empty());
    }

    #[test]
    fn test_stage_writer_paths() {
        let writers = StageWriters::new("out", 201);
        assert_eq!(
            writers.path_for(LifeCycleStage::NorBloodstream),
            Path::new("out/Tcongo_nor_bloodstream_201.fas")
        );
    }
}
