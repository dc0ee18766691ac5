// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a record inside the lookup dataset.
pub type RecordId = usize;

/// One row of the lookup dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerbRecord {
    /// May hold several comma-separated surface forms, e.g. "खा,khaa".
    pub root: String,
    /// Latin-script gloss, matched case-insensitively.
    pub romanized: Option<String>,
    pub verb_forms: String,
    pub count_vf: String,
    pub frequency: f64,
}

/// One row of the statistics dataset. Unrelated to `VerbRecord` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRecord {
    pub root: String,
    pub romanized: Option<String>,
    pub root_length: u32,
    pub frequency: f64,
}

impl StatRecord {
    /// Label used on charts: the gloss when there is one, the root otherwise.
    pub fn label(&self) -> &str {
        match self.romanized.as_deref().map(str::trim) {
            Some(gloss) if !gloss.is_empty() => gloss,
            _ => self.root.trim(),
        }
    }
}

/// Aggregate facts over the statistics dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub longest: StatRecord,
    /// Never the placeholder root.
    pub shortest: StatRecord,
    /// Mean over every row, placeholder included.
    pub average_length: f64,
    pub total_count: usize,
}

/// Both datasets as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datasets {
    pub verbs: Vec<VerbRecord>,
    pub stats: Vec<StatRecord>,
}
