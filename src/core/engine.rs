use crate::charts::{self, ChartKind, ChartSeries};
use crate::config::AppConfig;
use crate::core::index::VerbIndex;
use crate::core::stats::StatsEngine;
use crate::core::types::{Datasets, StatRecord, Summary, VerbRecord};
use crate::error::{LoadError, StatsError};
use crate::loader::load_datasets;
use crate::persistence::load_snapshot;
use log::warn;
use std::collections::BTreeMap;

/// The lookup index and the statistics engine, built once from the two
/// datasets and read-only afterwards. This is everything a front end needs.
pub struct VerbInfoEngine {
    pub index: VerbIndex,
    pub stats: StatsEngine,
    top_n: usize,
}

impl VerbInfoEngine {
    pub fn from_datasets(datasets: Datasets, placeholder_root: &str) -> Self {
        Self {
            index: VerbIndex::build(datasets.verbs),
            stats: StatsEngine::new(datasets.stats).with_placeholder(placeholder_root),
            top_n: 20,
        }
    }

    /// Reads the snapshot when one is configured and decodes cleanly,
    /// the two CSV files otherwise.
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        let datasets = match &config.snapshot_path {
            Some(path) if path.exists() => load_snapshot(path).or_else(|e| {
                warn!("{}; reading the CSV files instead", e);
                load_datasets(&config.lookup_csv, &config.stats_csv)
            })?,
            _ => load_datasets(&config.lookup_csv, &config.stats_csv)?,
        };

        let mut engine = Self::from_datasets(datasets, &config.placeholder_root);
        engine.top_n = config.top_n;
        Ok(engine)
    }

    pub fn lookup(&self, query: &str) -> Option<&VerbRecord> {
        self.index.lookup(query)
    }

    pub fn summary(&self) -> Result<Summary, StatsError> {
        self.stats.summarize()
    }

    pub fn ranked_by_frequency(&self) -> Vec<&StatRecord> {
        self.stats.ranked_by_frequency()
    }

    pub fn top_n(&self, n: usize) -> Vec<&StatRecord> {
        self.stats.top_n(n)
    }

    pub fn histogram(&self) -> BTreeMap<u32, usize> {
        self.stats.histogram()
    }

    pub fn chart(&self, kind: ChartKind, top_n: Option<usize>) -> ChartSeries {
        charts::series(&self.stats, kind, top_n.unwrap_or(self.top_n))
    }

    /// Copies the rows back out, for writing a snapshot.
    pub fn datasets(&self) -> Datasets {
        Datasets {
            verbs: self.index.records().to_vec(),
            stats: self.stats.rows().to_vec(),
        }
    }
}
