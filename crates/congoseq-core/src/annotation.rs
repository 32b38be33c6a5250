use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Strand of a predicted coding region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn as_char(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Strand> {
        match c {
            '+' => Some(Strand::Forward),
            '-' => Some(Strand::Reverse),
            _ => None,
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Genomic extent of a predicted coding region: start-end(strand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingSpan {
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
}

/// Optional annotation fields extracted from a raw description. Every field
/// may be absent; absence just omits it from the canonical header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationFields {
    #[serde(default)]
    pub orf_type: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub span: Option<CodingSpan>,
}

static ORF_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ORF type:(\S+)").expect("ORF type pattern is valid"));
static LEN_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"len:(\S+)").expect("len pattern is valid"));
static SCORE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"score=(\S+)").expect("score pattern is valid"));
static CODING_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)-(\d+)\(([+-])\)").expect("coding span pattern is valid"));

impl AnnotationFields {
    /// Pull whichever annotation fields the description carries.
    pub fn extract(description: &str) -> AnnotationFields {
        let capture = |re: &Regex| {
            re.captures(description)
                .map(|caps| caps[1].to_string())
        };
        AnnotationFields {
            orf_type: capture(&ORF_TYPE),
            length: capture(&LEN_FIELD),
            score: capture(&SCORE_FIELD),
            span: CodingSpan::extract(description),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.orf_type.is_none()
            && self.length.is_none()
            && self.score.is_none()
            && self.span.is_none()
    }
}

impl CodingSpan {
    fn extract(description: &str) -> Option<CodingSpan> {
        let caps = CODING_SPAN.captures(description)?;
        Some(CodingSpan {
            start: caps[1].parse().ok()?,
            end: caps[2].parse().ok()?,
            strand: Strand::from_char(caps[3].chars().next()?)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_all_fields() {
        let desc = "TCep_g1.p1 ORF type:complete len:245 (+),score=67.30 scaffold1:1000-1738(+)";
        let ann = AnnotationFields::extract(desc);
        assert_eq!(ann.orf_type.as_deref(), Some("complete"));
        assert_eq!(ann.length.as_deref(), Some("245"));
        assert_eq!(ann.score.as_deref(), Some("67.30"));
        assert_eq!(
            ann.span,
            Some(CodingSpan {
                start: 1000,
                end: 1738,
                strand: Strand::Forward,
            })
        );
    }

    #[test]
    fn test_extract_no_fields() {
        let ann = AnnotationFields::extract("hypothetical protein");
        assert!(ann.is_empty());
    }

    #[test]
    fn test_extract_partial_fields() {
        let ann = AnnotationFields::extract("TCpc_g4.p1 ORF type:internal score=3.50");
        assert_eq!(ann.orf_type.as_deref(), Some("internal"));
        assert!(ann.length.is_none());
        assert_eq!(ann.score.as_deref(), Some("3.50"));
        assert!(ann.span.is_none());
    }

    #[test]
    fn test_extract_field_at_end_of_line() {
        // No trailing space after the value.
        let ann = AnnotationFields::extract("TCep_g1.p1 len:98");
        assert_eq!(ann.length.as_deref(), Some("98"));
    }

    #[test]
    fn test_extract_reverse_strand_span() {
        let ann = AnnotationFields::extract("scaffold2:40-600(-)");
        assert_eq!(
            ann.span,
            Some(CodingSpan {
                start: 40,
                end: 600,
                strand: Strand::Reverse,
            })
        );
    }

    #[test]
    fn test_negative_score_value() {
        let ann = AnnotationFields::extract("score=-1.20 more text");
        assert_eq!(ann.score.as_deref(), Some("-1.20"));
    }

    #[test]
    fn test_bare_parenthesized_strand_is_not_a_span() {
        let ann = AnnotationFields::extract("ORF type:complete (+),score=2.0");
        assert!(ann.span.is_none());
    }
}
