// File: src/charts.rs
//! Chart-ready series over the statistics dataset. Rendering lives in `ui`.

use crate::core::stats::StatsEngine;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Histogram,
    Scatter,
    Zipf,
    Top,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [ChartKind::Histogram, ChartKind::Scatter, ChartKind::Zipf, ChartKind::Top];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Histogram => "histogram",
            ChartKind::Scatter => "scatter",
            ChartKind::Zipf => "zipf",
            ChartKind::Top => "top",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "histogram" | "hist" | "lengths" => Ok(ChartKind::Histogram),
            "scatter" | "frequency-vs-length" => Ok(ChartKind::Scatter),
            "zipf" => Ok(ChartKind::Zipf),
            "top" | "leaderboard" => Ok(ChartKind::Top),
            other => Err(format!(
                "unknown chart '{}', expected one of: histogram, scatter, zipf, top",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBar {
    pub root_length: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub label: String,
    pub root: String,
    pub frequency: f64,
    pub root_length: u32,
}

/// Every chart the front end can draw, in serialisable form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartSeries {
    LengthDistribution { bars: Vec<HistogramBar> },
    FrequencyVsLength { points: Vec<Point> },
    Zipf { points: Vec<Point> },
    Leaderboard { entries: Vec<LeaderboardEntry> },
}

pub fn length_distribution(stats: &StatsEngine) -> Vec<HistogramBar> {
    stats
        .histogram()
        .into_iter()
        .map(|(root_length, count)| HistogramBar { root_length, count })
        .collect()
}

/// Builds the series behind `kind`; `top_n` only matters for the leaderboard.
pub fn series(stats: &StatsEngine, kind: ChartKind, top_n: usize) -> ChartSeries {
    match kind {
        ChartKind::Histogram => ChartSeries::LengthDistribution { bars: length_distribution(stats) },
        ChartKind::Scatter => ChartSeries::FrequencyVsLength { points: frequency_vs_length(stats) },
        ChartKind::Zipf => ChartSeries::Zipf { points: zipf_points(stats) },
        ChartKind::Top => ChartSeries::Leaderboard { entries: leaderboard(stats, top_n) },
    }
}

/// One point per row, x = root length, y = frequency.
pub fn frequency_vs_length(stats: &StatsEngine) -> Vec<Point> {
    stats
        .rows()
        .iter()
        .map(|row| Point {
            x: f64::from(row.root_length),
            y: row.frequency,
        })
        .collect()
}

/// log10(rank) against log10(frequency). Zero-frequency rows keep their
/// rank but produce no point.
pub fn zipf_points(stats: &StatsEngine) -> Vec<Point> {
    stats
        .ranked_by_frequency()
        .into_iter()
        .enumerate()
        .filter(|(_, row)| row.frequency > 0.0)
        .map(|(i, row)| Point {
            x: ((i + 1) as f64).log10(),
            y: row.frequency.log10(),
        })
        .collect()
}

/// Highest frequency first, which is also the order bars are drawn top-down.
pub fn leaderboard(stats: &StatsEngine, n: usize) -> Vec<LeaderboardEntry> {
    stats
        .top_n(n)
        .into_iter()
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: i + 1,
            label: row.label().to_string(),
            root: row.root.clone(),
            frequency: row.frequency,
            root_length: row.root_length,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::StatRecord;

    fn stat(root: &str, romanized: Option<&str>, root_length: u32, frequency: f64) -> StatRecord {
        StatRecord {
            root: root.to_string(),
            romanized: romanized.map(str::to_string),
            root_length,
            frequency,
        }
    }

    fn engine() -> StatsEngine {
        StatsEngine::new(vec![
            stat("कर", Some("kar"), 2, 100.0),
            stat("हो", Some("ho"), 2, 1000.0),
            stat("निकाल", None, 5, 10.0),
            stat("सँभाल", Some(""), 5, 0.0),
        ])
    }

    #[test]
    fn zipf_uses_one_based_rank() {
        let points = zipf_points(&engine());

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].x, 0.0);
        assert!((points[0].y - 3.0).abs() < 1e-12);
        assert!((points[1].x - 2f64.log10()).abs() < 1e-12);
        assert!((points[1].y - 2.0).abs() < 1e-12);
        assert!((points[2].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn leaderboard_labels_fall_back_to_root() {
        let entries = leaderboard(&engine(), 20);

        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["ho", "kar", "निकाल", "सँभाल"]);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(leaderboard(&engine(), 2).len(), 2);
    }

    #[test]
    fn scatter_keeps_input_order() {
        let points = frequency_vs_length(&engine());

        assert_eq!(points[0], Point { x: 2.0, y: 100.0 });
        assert_eq!(points[3], Point { x: 5.0, y: 0.0 });
    }

    #[test]
    fn distribution_includes_empty_buckets() {
        let bars = length_distribution(&engine());

        assert_eq!(bars.len(), 5);
        assert_eq!(bars[2], HistogramBar { root_length: 3, count: 0 });
    }

    #[test]
    fn chart_names_parse() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.name().parse::<ChartKind>(), Ok(kind));
        }
        assert_eq!(" Hist ".parse::<ChartKind>(), Ok(ChartKind::Histogram));
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn series_serialize_with_a_chart_tag() {
        let json = serde_json::to_value(ChartSeries::Zipf { points: zipf_points(&engine()) }).unwrap();

        assert_eq!(json["chart"], "zipf");
        assert_eq!(json["points"].as_array().unwrap().len(), 3);
    }
}
