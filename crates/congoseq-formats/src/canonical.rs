//! The canonical record format written by renaming and read back by
//! retrieval: one header line carrying stage, sequence ID and annotations,
//! followed by one sequence line.
//!
//! ```text
//! >T.congo_epimastigote 1 ORF_type-complete len-245 score-67.30 bases;1000-1738 +
//! MKTAYIAKQR*
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use congoseq_core::{AnnotationFields, CanonicalRecord, CodingSpan, LifeCycleStage, Strand};

use crate::ParseError;

/// Render the canonical header line for a record, including the leading `>`
/// but no trailing newline. Absent fields leave no separators behind.
pub fn header_line(record: &CanonicalRecord) -> String {
    let mut line = String::new();
    line.push('>');
    line.push_str(record.stage.header_name());
    if let Some(id) = record.sequence_id {
        let _ = write!(line, " {id}");
    }
    let ann = &record.annotations;
    if let Some(orf_type) = &ann.orf_type {
        let _ = write!(line, " ORF_type-{orf_type}");
    }
    if let Some(length) = &ann.length {
        let _ = write!(line, " len-{length}");
    }
    if let Some(score) = &ann.score {
        let _ = write!(line, " score-{score}");
    }
    if let Some(span) = &ann.span {
        let _ = write!(line, " bases;{}-{} {}", span.start, span.end, span.strand);
    }
    line
}

/// Write one record: header line plus sequence line.
pub fn write_record<W: Write>(out: &mut W, record: &CanonicalRecord) -> io::Result<()> {
    writeln!(out, "{}", header_line(record))?;
    writeln!(out, "{}", record.sequence)
}

/// Serialize records to canonical text, preserving their order.
pub fn serialize(records: &[CanonicalRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&header_line(record));
        out.push('\n');
        out.push_str(&record.sequence);
        out.push('\n');
    }
    out
}

/// Parse canonical text back into records.
pub fn parse(input: &str) -> Result<Vec<CanonicalRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<CanonicalRecord> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(parse_header(header)?);
        } else if let Some(record) = current.as_mut() {
            record.sequence.push_str(trimmed);
        } else {
            return Err(ParseError::InvalidFormat(
                "sequence data before first canonical header".to_string(),
            ));
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    Ok(records)
}

fn parse_header(header: &str) -> Result<CanonicalRecord, ParseError> {
    let mut tokens = header.split_whitespace().peekable();

    let name = tokens
        .next()
        .ok_or_else(|| ParseError::InvalidHeader("empty header line".to_string()))?;
    let stage = LifeCycleStage::from_header_name(name)
        .ok_or_else(|| ParseError::InvalidHeader(format!("unknown stage name: {name}")))?;

    // Unclassified records carry no ID; the header goes straight to fields.
    let sequence_id = match tokens.peek().and_then(|tok| tok.parse::<u64>().ok()) {
        Some(id) => {
            tokens.next();
            Some(id)
        }
        None => None,
    };

    let mut annotations = AnnotationFields::default();
    while let Some(token) = tokens.next() {
        if let Some(value) = token.strip_prefix("ORF_type-") {
            annotations.orf_type = Some(value.to_string());
        } else if let Some(value) = token.strip_prefix("len-") {
            annotations.length = Some(value.to_string());
        } else if let Some(value) = token.strip_prefix("score-") {
            annotations.score = Some(value.to_string());
        } else if let Some(range) = token.strip_prefix("bases;") {
            let strand = tokens.next().ok_or_else(|| {
                ParseError::InvalidHeader(format!("coding span missing strand: {token}"))
            })?;
            annotations.span = Some(parse_span(range, strand)?);
        } else {
            return Err(ParseError::InvalidHeader(format!(
                "unrecognized header field: {token}"
            )));
        }
    }

    Ok(CanonicalRecord {
        sequence_id,
        stage,
        annotations,
        sequence: String::new(),
    })
}

fn parse_span(range: &str, strand: &str) -> Result<CodingSpan, ParseError> {
    let bad = || ParseError::InvalidHeader(format!("malformed coding span: bases;{range} {strand}"));

    let (start, end) = range.split_once('-').ok_or_else(bad)?;
    let mut chars = strand.chars();
    let strand_char = chars.next().ok_or_else(bad)?;
    if chars.next().is_some() {
        return Err(bad());
    }

    Ok(CodingSpan {
        start: start.parse().map_err(|_| bad())?,
        end: end.parse().map_err(|_| bad())?,
        strand: Strand::from_char(strand_char).ok_or_else(bad)?,
    })
}
