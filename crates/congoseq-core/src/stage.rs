use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Life-cycle stages of T. congolense recognized in TransDecoder descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeCycleStage {
    Epimastigote,
    NorBloodstream,
    RegBloodstream,
    NorMetacyclic,
    RegMetacyclic,
    Procyclic,
    Unclassified,
}

// Marker tokens must not ride inside a longer word: no word character before,
// no letter after (a trailing digit is fine, e.g. "TCep1"). Nor-variant
// markers precede their plain-variant prefixes in the alternation so that
// "TCbln" never resolves to the plain bloodstream marker.
static STAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^0-9A-Za-z_])(tcbln|tcmcn|tcpc|tcbl|tcmc|tcep)(?:[^A-Za-z]|$)")
        .expect("stage marker pattern is valid")
});

impl LifeCycleStage {
    /// Classify a description line by its leftmost stage marker.
    pub fn classify(description: &str) -> LifeCycleStage {
        let Some(caps) = STAGE_MARKER.captures(description) else {
            return LifeCycleStage::Unclassified;
        };
        match caps[1].to_ascii_lowercase().as_str() {
            "tcbln" => LifeCycleStage::NorBloodstream,
            "tcmcn" => LifeCycleStage::NorMetacyclic,
            "tcpc" => LifeCycleStage::Procyclic,
            "tcbl" => LifeCycleStage::RegBloodstream,
            "tcmc" => LifeCycleStage::RegMetacyclic,
            "tcep" => LifeCycleStage::Epimastigote,
            _ => LifeCycleStage::Unclassified,
        }
    }

    /// Whether a sequence ID gets assigned for this stage.
    pub fn is_classified(&self) -> bool {
        *self != LifeCycleStage::Unclassified
    }

    /// Stage name as written in canonical headers.
    pub fn header_name(&self) -> &'static str {
        match self {
            LifeCycleStage::Epimastigote => "T.congo_epimastigote",
            LifeCycleStage::NorBloodstream => "T.congo_nor_bloodstream",
            LifeCycleStage::RegBloodstream => "T.congo_reg_bloodstream",
            LifeCycleStage::NorMetacyclic => "T.congo_nor_metacyclic",
            LifeCycleStage::RegMetacyclic => "T.congo_reg_metacyclic",
            LifeCycleStage::Procyclic => "T.congo_procyclic",
            LifeCycleStage::Unclassified => "T.congo_unclassified",
        }
    }

    /// Inverse of `header_name`, case-insensitive.
    pub fn from_header_name(name: &str) -> Option<LifeCycleStage> {
        match name.to_lowercase().as_str() {
            "t.congo_epimastigote" => Some(LifeCycleStage::Epimastigote),
            "t.congo_nor_bloodstream" => Some(LifeCycleStage::NorBloodstream),
            "t.congo_reg_bloodstream" => Some(LifeCycleStage::RegBloodstream),
            "t.congo_nor_metacyclic" => Some(LifeCycleStage::NorMetacyclic),
            "t.congo_reg_metacyclic" => Some(LifeCycleStage::RegMetacyclic),
            "t.congo_procyclic" => Some(LifeCycleStage::Procyclic),
            "t.congo_unclassified" => Some(LifeCycleStage::Unclassified),
            _ => None,
        }
    }

    /// Prefix for retrieval output file names.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            LifeCycleStage::Epimastigote => "Tcongo_epimastigote",
            LifeCycleStage::NorBloodstream => "Tcongo_nor_bloodstream",
            LifeCycleStage::RegBloodstream => "Tcongo_reg_bloodstream",
            LifeCycleStage::NorMetacyclic => "Tcongo_nor_metacyclic",
            LifeCycleStage::RegMetacyclic => "Tcongo_reg_metacyclic",
            LifeCycleStage::Procyclic => "Tcongo_procyclic",
            LifeCycleStage::Unclassified => "Tcongo_unclassified",
        }
    }
}

impl fmt::Display for LifeCycleStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
