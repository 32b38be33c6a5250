use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationFields;
use crate::stage::LifeCycleStage;

/// One entry of the source FASTA file, as handed over by the parser. The
/// description is the full header text including the id token, since stage
/// markers frequently live in the id itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl RawRecord {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        sequence: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            sequence: sequence.into(),
        }
    }
}

/// A normalized record. `sequence_id` is present exactly when the stage is
/// classified; the IDs come from one counter shared across all stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    #[serde(default)]
    pub sequence_id: Option<u64>,
    pub stage: LifeCycleStage,
    #[serde(default)]
    pub annotations: AnnotationFields,
    pub sequence: String,
}

/// Assigns stages and sequence IDs. The counter is part of the value, one
/// per normalization run, so repeated runs stay independent.
#[derive(Debug, Default)]
pub struct Classifier {
    next_id: u64,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs handed out so far.
    pub fn assigned(&self) -> u64 {
        self.next_id
    }

    pub fn classify(&mut self, record: &RawRecord) -> CanonicalRecord {
        let stage = LifeCycleStage::classify(&record.description);
        let sequence_id = if stage.is_classified() {
            self.next_id += 1;
            Some(self.next_id)
        } else {
            None
        };
        CanonicalRecord {
            sequence_id,
            stage,
            annotations: AnnotationFields::extract(&record.description),
            sequence: record.sequence.clone(),
        }
    }
}
