use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use congoseq_core::{Classifier, RawRecord};
use congoseq_formats::{canonical, fasta};
use tracing::{debug, info};

use crate::PipelineError;

/// Classify records in encounter order and write their canonical form to
/// `out`. Returns the number of records that received a sequence ID.
pub fn rename_records<W: Write>(records: &[RawRecord], out: &mut W) -> Result<u64, PipelineError> {
    let mut classifier = Classifier::new();
    for record in records {
        let renamed = classifier.classify(record);
        if renamed.sequence_id.is_none() {
            debug!(id = %record.id, "no stage marker in description");
        }
        canonical::write_record(out, &renamed)?;
    }
    Ok(classifier.assigned())
}

/// Rename every record of a FASTA file, appending canonical records to a
/// `named_` sibling of the input. Returns the output path. An input with no
/// records still creates the output file, empty.
pub fn rename_file(input: &Path) -> Result<PathBuf, PipelineError> {
    let content = fs::read_to_string(input)?;
    let records = fasta::parse(&content)?;

    let output = named_path(input);
    let file = OpenOptions::new().create(true).append(true).open(&output)?;
    let mut writer = BufWriter::new(file);
    let assigned = rename_records(&records, &mut writer)?;
    writer.flush()?;

    info!(
        input = %input.display(),
        output = %output.display(),
        total = records.len(),
        classified = assigned,
        "renamed records"
    );
    Ok(output)
}

/// `named_` prepended to the file name, in the input's directory.
fn named_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("named_{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use congoseq_core::RawRecord;

    #[test]
    fn test_named_path_keeps_directory() {
        assert_eq!(
            named_path(Path::new("data/Tcongo_pooled.pep")),
            Path::new("data/named_Tcongo_pooled.pep")
        );
        assert_eq!(
            named_path(Path::new("Tcongo_pooled.pep")),
            Path::new("named_Tcongo_pooled.pep")
        );
    }

    #[test]
    fn test_rename_records_writes_in_input_order() {
        let records = vec![
            RawRecord::new("TCep_g1", "TCep_g1", "MKT"),
            RawRecord::new("u_g2", "u_g2 hypothetical", "MAA"),
            RawRecord::new("TCbln_g3", "TCbln_g3", "MGG"),
        ];
        let mut out = Vec::new();
        let assigned = rename_records(&records, &mut out).unwrap();
        assert_eq!(assigned, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            ">T.congo_epimastigote 1\nMKT\n\
             >T.congo_unclassified\nMAA\n\
             >T.congo_nor_bloodstream 2\nMGG\n"
        );
    }

    #[test]
    fn test_rename_records_empty_input() {
        let mut out = Vec::new();
        let assigned = rename_records(&[], &mut out).unwrap();
        assert_eq!(assigned, 0);
        assert!(out.is_empty());
    }
}
