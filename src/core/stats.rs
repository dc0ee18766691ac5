// File: src/core/stats.rs
use crate::core::types::{StatRecord, Summary};
use crate::error::StatsError;
use std::collections::BTreeMap;

/// Root value the statistics dataset uses as a degenerate entry.
/// It never counts as the shortest root.
pub const PLACEHOLDER_ROOT: &str = "v";

/// Aggregates over the statistics dataset. The frequency ranking is
/// computed once on construction; the rows never change afterwards.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    rows: Vec<StatRecord>,
    ranking: Vec<usize>,
    placeholder: String,
}

impl StatsEngine {
    pub fn new(rows: Vec<StatRecord>) -> Self {
        let mut ranking: Vec<usize> = (0..rows.len()).collect();
        // `sort_by` is stable: equal frequencies keep input order.
        ranking.sort_by(|&a, &b| rows[b].frequency.total_cmp(&rows[a].frequency));
        Self {
            rows,
            ranking,
            placeholder: PLACEHOLDER_ROOT.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.trim().to_lowercase();
        self
    }

    pub fn rows(&self) -> &[StatRecord] {
        &self.rows
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn is_placeholder(&self, row: &StatRecord) -> bool {
        row.root.trim().to_lowercase() == self.placeholder
    }

    pub fn summarize(&self) -> Result<Summary, StatsError> {
        if self.rows.is_empty() {
            return Err(StatsError::EmptyDataset);
        }

        let longest = first_extreme(self.rows.iter(), |candidate, best| {
            candidate.root_length > best.root_length
        })
        .ok_or(StatsError::EmptyDataset)?;

        let shortest = first_extreme(
            self.rows.iter().filter(|row| !self.is_placeholder(row)),
            |candidate, best| candidate.root_length < best.root_length,
        )
        .ok_or_else(|| StatsError::OnlyPlaceholderRoots {
            placeholder: self.placeholder.clone(),
        })?;

        let total_length: f64 = self.rows.iter().map(|row| f64::from(row.root_length)).sum();

        Ok(Summary {
            longest: longest.clone(),
            shortest: shortest.clone(),
            average_length: total_length / self.rows.len() as f64,
            total_count: self.rows.len(),
        })
    }

    /// All rows, highest frequency first. Rank is the 1-based position.
    pub fn ranked_by_frequency(&self) -> Vec<&StatRecord> {
        self.ranking.iter().map(|&i| &self.rows[i]).collect()
    }

    pub fn top_n(&self, n: usize) -> Vec<&StatRecord> {
        self.ranking.iter().take(n).map(|&i| &self.rows[i]).collect()
    }

    /// Unit-width buckets covering `1..=max(root_length)`, empty ones included.
    pub fn histogram(&self) -> BTreeMap<u32, usize> {
        let max_length = self.rows.iter().map(|row| row.root_length).max().unwrap_or(0);
        let mut buckets: BTreeMap<u32, usize> = (1..=max_length).map(|len| (len, 0)).collect();
        for row in &self.rows {
            *buckets.entry(row.root_length.max(1)).or_insert(0) += 1;
        }
        buckets
    }
}

/// The first row for which no later row is strictly better.
fn first_extreme<'a, I, F>(rows: I, better: F) -> Option<&'a StatRecord>
where
    I: Iterator<Item = &'a StatRecord>,
    F: Fn(&StatRecord, &StatRecord) -> bool,
{
    rows.fold(None, |best, row| match best {
        Some(current) if !better(row, current) => Some(current),
        _ => Some(row),
    })
}
