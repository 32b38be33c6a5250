use congoseq_core::RawRecord;

use crate::ParseError;

/// Parse a FASTA string into raw records. An input with no records is valid
/// and yields an empty vector; an empty normalization run is not an error.
pub fn parse(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<RawRecord> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            let id = header.split_whitespace().next().unwrap_or_default();
            current = Some(RawRecord::new(id, header, String::new()));
        } else if trimmed.starts_with(';') {
            // Comment line, skip
            continue;
        } else if let Some(record) = current.as_mut() {
            // Residue line. TransDecoder peptides carry `*` stop symbols,
            // so the filter keeps those alongside alphanumerics.
            record.sequence.extend(
                trimmed
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '*'),
            );
        } else {
            return Err(ParseError::InvalidFormat(
                "sequence data before first FASTA header".to_string(),
            ));
        }
    }

    // Don't forget the last record
    if let Some(record) = current.take() {
        records.push(record);
    }

    Ok(records)
}
