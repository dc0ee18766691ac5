// --- File: src/core/index.rs
use crate::core::types::{RecordId, VerbRecord};
use log::{debug, warn};
use std::collections::HashMap;

/// Immutable surface-form index over the lookup dataset.
/// Built once after load; every key resolves in O(1).
#[derive(Debug, Clone, Default)]
pub struct VerbIndex {
    keys: HashMap<String, RecordId>,
    records: Vec<VerbRecord>,
}

impl VerbIndex {
    /// Registers every comma-separated root token and the lower-cased gloss
    /// of each row. Rows are visited in input order, so on a key collision
    /// the later row wins.
    pub fn build(rows: Vec<VerbRecord>) -> Self {
        let mut keys: HashMap<String, RecordId> = HashMap::with_capacity(rows.len() * 2);

        for (id, row) in rows.iter().enumerate() {
            for form in row.root.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                register(&mut keys, form.to_string(), id);
            }
            if let Some(gloss) = row.romanized.as_deref().map(str::trim) {
                if !gloss.is_empty() {
                    register(&mut keys, gloss.to_lowercase(), id);
                }
            }
        }

        debug!("verb index: {} rows, {} keys", rows.len(), keys.len());
        Self { keys, records: rows }
    }

    /// Exact match on the trimmed query first (native script keeps its
    /// case), then a retry on the lower-cased query for romanized input.
    pub fn lookup(&self, query: &str) -> Option<&VerbRecord> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.keys
            .get(query)
            .or_else(|| self.keys.get(&query.to_lowercase()))
            .map(|&id| &self.records[id])
    }

    pub fn records(&self) -> &[VerbRecord] {
        &self.records
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}

fn register(keys: &mut HashMap<String, RecordId>, key: String, id: RecordId) {
    if let Some(previous) = keys.insert(key.clone(), id) {
        if previous != id {
            warn!("lookup key '{}' of row {} is overwritten by row {}", key, previous, id);
        }
    }
}
